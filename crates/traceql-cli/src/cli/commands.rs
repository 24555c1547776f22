//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.
//! Both commands accept the same flags; those a command ignores are hidden from `--help`.

use clap::Command;

use super::args::*;

/// Query input and parser limits, shared by every command.
fn with_query_args(cmd: Command) -> Command {
    cmd.arg(query_path_arg())
        .arg(query_text_arg())
        .arg(fuel_arg())
        .arg(recursion_limit_arg())
        .arg(verbose_arg())
}

/// Add hidden diagnostics output args (for commands that print trees).
fn with_hidden_report_args(cmd: Command) -> Command {
    cmd.arg(format_arg().hide(true))
        .arg(column_base_arg().hide(true))
        .arg(color_arg().hide(true))
}

/// Add hidden tree args (for commands that print diagnostics).
fn with_hidden_tree_args(cmd: Command) -> Command {
    cmd.arg(spans_arg().hide(true)).arg(trivia_arg().hide(true))
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("traceql")
        .about("Contextual syntax-error highlighting for TraceQL queries")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(check_command())
        .subcommand(tree_command())
}

/// Report syntax errors of a query.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Report syntax errors of a query")
        .override_usage(
            "\
  traceql check <QUERY>
  traceql check -q <TEXT>
  traceql check - < query.traceql",
        )
        .after_help(
            r#"EXAMPLES:
  traceql check query.traceql              # rendered snippets on stderr
  traceql check -q '{ .foo = bar }'        # inline query
  traceql check -q '{ .a 1 }' --format json   # editor markers on stdout
  traceql check -q 'foo' --format json --column-base 0

Exits with status 1 when the query has errors."#,
        )
        .arg(format_arg())
        .arg(column_base_arg())
        .arg(color_arg());

    with_hidden_tree_args(with_query_args(cmd))
}

/// Dump the concrete syntax tree of a query.
pub fn tree_command() -> Command {
    let cmd = Command::new("tree")
        .about("Show the concrete syntax tree of a query")
        .override_usage(
            "\
  traceql tree <QUERY>
  traceql tree -q <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  traceql tree -q '{ .foo = bar }'          # where the Error node lands
  traceql tree -q '{ .a 1 }' --spans        # with byte ranges
  traceql tree query.traceql --trivia       # keep whitespace and comments"#,
        )
        .arg(spans_arg())
        .arg(trivia_arg());

    with_hidden_report_args(with_query_args(cmd))
}
