//! Tests for CLI dispatch logic.
//!
//! These tests verify:
//! 1. Unified flags: check and tree accept each other's flags without error
//! 2. Help visibility: hidden flags don't appear in --help
//! 3. Params extraction: correct fields are extracted from ArgMatches

use std::path::PathBuf;

use traceql_lib::{ColumnBase, ParserConfig};

use super::*;
use crate::cli::commands::{check_command, tree_command};
use crate::commands::check::CheckArgs;
use crate::commands::tree::TreeArgs;

#[test]
fn check_defaults() {
    let m = check_command()
        .try_get_matches_from(["check", "query.traceql"])
        .unwrap();
    let params = CheckParams::from_matches(&m);

    assert_eq!(params.query_path, Some(PathBuf::from("query.traceql")));
    assert_eq!(params.query_text, None);
    assert_eq!(params.format, OutputFormat::Text);
    assert_eq!(params.column_base, ColumnBase::One);
    assert_eq!(params.fuel, 1_000_000);
    assert_eq!(params.recursion_limit, 512);
    assert_eq!(params.verbose, 0);
    assert_eq!(params.color, ColorChoice::Auto);
}

#[test]
fn check_extracts_report_flags() {
    let m = check_command()
        .try_get_matches_from([
            "check",
            "-q",
            "{ .foo = bar }",
            "--format",
            "json",
            "--column-base",
            "0",
            "--color",
            "never",
            "-vv",
        ])
        .unwrap();
    let params = CheckParams::from_matches(&m);

    assert_eq!(params.query_path, None);
    assert_eq!(params.query_text.as_deref(), Some("{ .foo = bar }"));
    assert_eq!(params.format, OutputFormat::Json);
    assert_eq!(params.column_base, ColumnBase::Zero);
    assert_eq!(params.color, ColorChoice::Never);
    assert_eq!(params.verbose, 2);
}

#[test]
fn check_limits_become_parser_config() {
    let m = check_command()
        .try_get_matches_from([
            "check",
            "-",
            "--fuel",
            "50",
            "--recursion-limit",
            "8",
        ])
        .unwrap();
    let args: CheckArgs = CheckParams::from_matches(&m).into();

    assert_eq!(args.query_path, Some(PathBuf::from("-")));
    assert_eq!(
        args.config,
        ParserConfig::default()
            .with_exec_fuel(Some(50))
            .with_recursion_fuel(Some(8))
    );
}

#[test]
fn check_accepts_tree_flags() {
    let cmd = check_command();
    let result = cmd.try_get_matches_from(["check", "q.traceql", "--spans", "--trivia"]);
    assert!(
        result.is_ok(),
        "check should accept tree flags: {:?}",
        result.err()
    );
}

#[test]
fn tree_accepts_check_flags() {
    let cmd = tree_command();
    let result = cmd.try_get_matches_from([
        "tree",
        "q.traceql",
        "--format",
        "json",
        "--column-base",
        "0",
        "--color",
        "always",
    ]);
    assert!(
        result.is_ok(),
        "tree should accept check flags: {:?}",
        result.err()
    );
}

#[test]
fn tree_extracts_params() {
    let cmd = tree_command();
    let result = cmd.try_get_matches_from(["tree", "-q", "{}", "--spans", "--fuel", "10", "-v"]);
    let m = result.unwrap();
    let params = TreeParams::from_matches(&m);

    assert_eq!(params.query_text.as_deref(), Some("{}"));
    assert!(params.spans);
    assert!(!params.trivia);
    assert_eq!(params.verbose, 1);

    let args: TreeArgs = params.into();
    assert_eq!(args.config.exec_fuel, Some(10));
    assert_eq!(args.config.recursion_fuel, Some(512));
}

#[test]
fn query_text_conflicts_with_path() {
    let cmd = check_command();
    let result = cmd.try_get_matches_from(["check", "q.traceql", "-q", "{}"]);
    assert!(result.is_err());
}

#[test]
fn rejects_unknown_format() {
    let cmd = check_command();
    let result = cmd.try_get_matches_from(["check", "-q", "{}", "--format", "xml"]);
    assert!(result.is_err());
}

#[test]
fn rejects_column_base_other_than_zero_or_one() {
    let cmd = check_command();
    let result = cmd.try_get_matches_from(["check", "-q", "{}", "--column-base", "2"]);
    assert!(result.is_err());
}

#[test]
fn check_help_hides_tree_flags() {
    let help = check_command().render_help().to_string();
    assert!(help.contains("--format"));
    assert!(help.contains("--column-base"));
    assert!(!help.contains("--spans"));
    assert!(!help.contains("--trivia"));
}

#[test]
fn tree_help_hides_report_flags() {
    let help = tree_command().render_help().to_string();
    assert!(help.contains("--spans"));
    assert!(help.contains("--fuel"));
    assert!(!help.contains("--format"));
    assert!(!help.contains("--column-base"));
    assert!(!help.contains("--color"));
}

#[test]
fn cli_lists_both_commands() {
    let cli = build_cli();
    let names: Vec<_> = cli.get_subcommands().map(|c| c.get_name()).collect();
    assert_eq!(names, ["check", "tree"]);
}
