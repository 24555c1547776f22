//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs that mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors that pull relevant fields (ignoring hidden ones)
//! - `Into<*Args>` impls to bridge dispatch → command handlers

use std::path::PathBuf;

use clap::ArgMatches;
use traceql_lib::parser::{DEFAULT_EXEC_FUEL, DEFAULT_RECURSION_FUEL};
use traceql_lib::{ColumnBase, ParserConfig};

use super::{ColorChoice, OutputFormat};
use crate::commands::check::CheckArgs;
use crate::commands::tree::TreeArgs;

pub struct CheckParams {
    pub query_path: Option<PathBuf>,
    pub query_text: Option<String>,
    pub format: OutputFormat,
    pub column_base: ColumnBase,
    pub fuel: u32,
    pub recursion_limit: u32,
    pub verbose: u8,
    pub color: ColorChoice,
    // Note: spans and trivia are parsed but not extracted (unified flags)
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            query_path: m.get_one::<PathBuf>("query_path").cloned(),
            query_text: m.get_one::<String>("query_text").cloned(),
            format: parse_format(m),
            column_base: parse_column_base(m),
            fuel: parse_fuel(m),
            recursion_limit: parse_recursion_limit(m),
            verbose: m.get_count("verbose"),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            query_path: p.query_path,
            query_text: p.query_text,
            format: p.format,
            column_base: p.column_base,
            config: parser_config(p.fuel, p.recursion_limit),
            color: p.color.should_colorize(),
        }
    }
}

pub struct TreeParams {
    pub query_path: Option<PathBuf>,
    pub query_text: Option<String>,
    pub spans: bool,
    pub trivia: bool,
    pub fuel: u32,
    pub recursion_limit: u32,
    pub verbose: u8,
    // Note: format, column_base, color are parsed but not extracted (unified flags)
}

impl TreeParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            query_path: m.get_one::<PathBuf>("query_path").cloned(),
            query_text: m.get_one::<String>("query_text").cloned(),
            spans: m.get_flag("spans"),
            trivia: m.get_flag("trivia"),
            fuel: parse_fuel(m),
            recursion_limit: parse_recursion_limit(m),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<TreeParams> for TreeArgs {
    fn from(p: TreeParams) -> Self {
        Self {
            query_path: p.query_path,
            query_text: p.query_text,
            spans: p.spans,
            trivia: p.trivia,
            config: parser_config(p.fuel, p.recursion_limit),
        }
    }
}

fn parser_config(fuel: u32, recursion_limit: u32) -> ParserConfig {
    ParserConfig::default()
        .with_exec_fuel(Some(fuel))
        .with_recursion_fuel(Some(recursion_limit))
}

/// Parse --color flag into ColorChoice.
fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

fn parse_format(m: &ArgMatches) -> OutputFormat {
    match m.get_one::<String>("format").map(|s| s.as_str()) {
        Some("json") => OutputFormat::Json,
        _ => OutputFormat::Text,
    }
}

fn parse_column_base(m: &ArgMatches) -> ColumnBase {
    match m.get_one::<String>("column_base").map(|s| s.as_str()) {
        Some("0") => ColumnBase::Zero,
        _ => ColumnBase::One,
    }
}

fn parse_fuel(m: &ArgMatches) -> u32 {
    m.get_one::<u32>("fuel")
        .copied()
        .unwrap_or(DEFAULT_EXEC_FUEL)
}

fn parse_recursion_limit(m: &ArgMatches) -> u32 {
    m.get_one::<u32>("recursion_limit")
        .copied()
        .unwrap_or(DEFAULT_RECURSION_FUEL)
}
