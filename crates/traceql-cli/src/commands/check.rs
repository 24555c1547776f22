use std::path::PathBuf;

use serde::Serialize;
use traceql_lib::{ColumnBase, Diagnostics, Highlighter, Marker, ParserConfig};
use tracing::debug;

use super::query_loader::{LoadError, QuerySource, load_query_source};
use crate::cli::OutputFormat;

pub struct CheckArgs {
    pub query_path: Option<PathBuf>,
    pub query_text: Option<String>,
    pub format: OutputFormat,
    pub column_base: ColumnBase,
    pub config: ParserConfig,
    pub color: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Highlight(#[from] traceql_lib::Error),

    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

/// What `check` prints, and whether it should fail the process.
#[derive(Debug, Default)]
pub struct CheckOutput {
    pub stdout: String,
    pub stderr: String,
    pub failed: bool,
}

/// JSON shape of `check --format json`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Report<'a> {
    source: &'a str,
    error_count: usize,
    diagnostics: &'a Diagnostics,
    markers: Vec<Marker>,
}

pub fn run(args: CheckArgs) {
    let outcome = load_query_source(args.query_path.as_deref(), args.query_text.as_deref())
        .map_err(CheckError::from)
        .and_then(|query| check(&query, &args));

    let output = match outcome {
        Ok(output) => output,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    print!("{}", output.stdout);
    eprint!("{}", output.stderr);

    if output.failed {
        std::process::exit(1);
    }

    // Silent on success (like cargo check)
}

pub fn check(query: &QuerySource, args: &CheckArgs) -> Result<CheckOutput, CheckError> {
    let diagnostics = Highlighter::new(args.config).highlight(&query.text)?;
    debug!(source = %query.name, count = diagnostics.len(), "checked query");

    let failed = diagnostics.has_errors();
    let output = match args.format {
        OutputFormat::Text => {
            let mut stderr = diagnostics
                .printer()
                .source(&query.text)
                .path(&query.name)
                .colored(args.color)
                .render();
            if !stderr.is_empty() {
                stderr.push('\n');
            }
            CheckOutput {
                stdout: String::new(),
                stderr,
                failed,
            }
        }
        OutputFormat::Json => {
            let report = Report {
                source: &query.name,
                error_count: diagnostics.error_count(),
                diagnostics: &diagnostics,
                markers: diagnostics.markers(&query.text, args.column_base),
            };
            let mut stdout = serde_json::to_string_pretty(&report)?;
            stdout.push('\n');
            CheckOutput {
                stdout,
                stderr: String::new(),
                failed,
            }
        }
    };

    Ok(output)
}
