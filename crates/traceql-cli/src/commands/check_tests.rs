use traceql_lib::{ColumnBase, ParserConfig};

use super::check::{CheckArgs, CheckError, check};
use super::query_loader::QuerySource;
use crate::cli::OutputFormat;

fn args(format: OutputFormat, column_base: ColumnBase) -> CheckArgs {
    CheckArgs {
        query_path: None,
        query_text: None,
        format,
        column_base,
        config: ParserConfig::default(),
        color: false,
    }
}

fn query(text: &str) -> QuerySource {
    QuerySource {
        name: "<query>".to_string(),
        text: text.to_string(),
    }
}

#[test]
fn valid_query_is_silent() {
    let check_args = args(OutputFormat::Text, ColumnBase::One);
    let output = check(&query("{ .foo = \"bar\" }"), &check_args).unwrap();

    assert!(!output.failed);
    assert!(output.stdout.is_empty());
    assert!(output.stderr.is_empty());
}

#[test]
fn text_output_renders_snippet_on_stderr() {
    let check_args = args(OutputFormat::Text, ColumnBase::One);
    let output = check(&query("{ .foo = bar }"), &check_args).unwrap();

    assert!(output.failed);
    assert!(output.stdout.is_empty());
    assert!(output.stderr.contains("error: Invalid value after"));
    assert!(output.stderr.contains("<query>"));
    assert!(output.stderr.contains("{ .foo = bar }"));
    assert!(output.stderr.contains("^^^"));
}

#[test]
fn json_output_with_one_based_columns() {
    let check_args = args(OutputFormat::Json, ColumnBase::One);
    let output = check(&query("{ .foo = bar }"), &check_args).unwrap();

    assert!(output.failed);
    assert!(output.stderr.is_empty());
    insta::assert_snapshot!(output.stdout, @r#"
    {
      "source": "<query>",
      "errorCount": 1,
      "diagnostics": [
        {
          "severity": "error",
          "message": "Invalid value after comparison operator.",
          "start": 9,
          "end": 12
        }
      ],
      "markers": [
        {
          "message": "Invalid value after comparison operator.",
          "severity": "error",
          "startLineNumber": 1,
          "startColumn": 10,
          "endLineNumber": 1,
          "endColumn": 13
        }
      ]
    }
    "#);
}

#[test]
fn json_output_with_zero_based_columns() {
    let check_args = args(OutputFormat::Json, ColumnBase::Zero);
    let output = check(&query("foo"), &check_args).unwrap();

    let report: serde_json::Value = serde_json::from_str(&output.stdout).unwrap();
    let marker = &report["markers"][0];
    assert_eq!(marker["message"], "Invalid query.");
    assert_eq!(marker["startColumn"], 0);
    assert_eq!(marker["endColumn"], 3);
}

#[test]
fn json_output_for_valid_query() {
    let check_args = args(OutputFormat::Json, ColumnBase::One);
    let output = check(&query("{}"), &check_args).unwrap();

    assert!(!output.failed);
    let report: serde_json::Value = serde_json::from_str(&output.stdout).unwrap();
    assert_eq!(report["errorCount"], 0);
    assert_eq!(report["diagnostics"], serde_json::json!([]));
    assert_eq!(report["markers"], serde_json::json!([]));
}

#[test]
fn multi_line_query_markers() {
    let text = indoc::indoc! {"
        { .a = 1 }
        && { .b 2 }
    "};
    let check_args = args(OutputFormat::Json, ColumnBase::One);
    let output = check(&query(text), &check_args).unwrap();

    let report: serde_json::Value = serde_json::from_str(&output.stdout).unwrap();
    let marker = &report["markers"][0];
    assert_eq!(marker["startLineNumber"], 2);
    assert_eq!(marker["startColumn"], 9);
    assert_eq!(marker["endLineNumber"], 2);
    assert_eq!(marker["endColumn"], 10);
}

#[test]
fn parser_limits_are_errors() {
    let mut check_args = args(OutputFormat::Text, ColumnBase::One);
    check_args.config = ParserConfig::default().with_recursion_fuel(Some(2));

    let result = check(&query("(((({ .a = 1 }))))"), &check_args);
    let err = result.unwrap_err();
    assert!(matches!(err, CheckError::Highlight(_)));
    assert_eq!(
        err.to_string(),
        "parser unavailable: recursion limit exceeded"
    );
}
