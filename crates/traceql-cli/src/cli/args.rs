//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.
//! The same definition is reused across commands, hidden where it does not apply.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Query file, or `-` for stdin (positional).
pub fn query_path_arg() -> Arg {
    Arg::new("query_path")
        .value_name("QUERY")
        .value_parser(value_parser!(PathBuf))
        .help("Query file, or - to read stdin")
}

/// Inline query text (-q/--query).
pub fn query_text_arg() -> Arg {
    Arg::new("query_text")
        .short('q')
        .long("query")
        .value_name("TEXT")
        .conflicts_with("query_path")
        .help("Inline query text")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Diagnostics output format (--format).
pub fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .value_name("FORMAT")
        .default_value("text")
        .value_parser(["text", "json"])
        .help("Output format: rendered snippets or JSON editor markers")
}

/// First column number of JSON markers (--column-base).
pub fn column_base_arg() -> Arg {
    Arg::new("column_base")
        .long("column-base")
        .value_name("N")
        .default_value("1")
        .value_parser(["0", "1"])
        .help("Number marker columns from 0 or from 1")
}

/// Show source positions (--spans).
pub fn spans_arg() -> Arg {
    Arg::new("spans")
        .long("spans")
        .action(ArgAction::SetTrue)
        .help("Show byte ranges")
}

/// Keep whitespace and comments in tree dumps (--trivia).
pub fn trivia_arg() -> Arg {
    Arg::new("trivia")
        .long("trivia")
        .action(ArgAction::SetTrue)
        .help("Include whitespace and comment tokens")
}

/// Parser token budget (--fuel).
pub fn fuel_arg() -> Arg {
    Arg::new("fuel")
        .long("fuel")
        .value_name("N")
        .default_value("1000000")
        .value_parser(value_parser!(u32))
        .help("Maximum tokens the parser may consume")
}

/// Parser nesting budget (--recursion-limit).
pub fn recursion_limit_arg() -> Arg {
    Arg::new("recursion_limit")
        .long("recursion-limit")
        .value_name("N")
        .default_value("512")
        .value_parser(value_parser!(u32))
        .help("Maximum nesting depth of the query")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Log verbosity (-v for debug, -vv for trace); RUST_LOG takes precedence")
}
