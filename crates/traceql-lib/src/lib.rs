//! Syntax error highlighting for TraceQL queries.
//!
//! The query is parsed by an error-tolerant parser into a concrete syntax tree.
//! Each `Error` node in that tree becomes a diagnostic whose message depends on the
//! node's parent and on what precedes it.
//!
//! # Example
//!
//! ```
//! use traceql_lib::highlight;
//!
//! let query = "{ .foo = bar }";
//! let diagnostics = highlight(query).expect("within parser limits");
//!
//! let first = diagnostics.iter().next().unwrap();
//! assert_eq!(first.message, "Invalid value after comparison operator.");
//! assert_eq!(&query[first.range()], "bar");
//! eprintln!("{}", diagnostics.printer().source(query).render());
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod diagnostics;
pub mod highlight;
pub mod parser;

pub use diagnostics::{
    ColumnBase, Diagnostic, Diagnostics, DiagnosticsPrinter, LineIndex, Marker, Severity,
};
pub use highlight::{Highlighter, highlight};
pub use parser::{ParserConfig, Unavailable};

/// Errors that can occur while highlighting a query.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// The parser could not produce a tree within its limits.
    #[error("parser unavailable: {0}")]
    ParseUnavailable(#[from] Unavailable),
}

/// Result type for highlighting operations.
pub type Result<T> = std::result::Result<T, Error>;
