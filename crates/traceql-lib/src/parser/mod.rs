//! Parser infrastructure for TraceQL.
//!
//! # Architecture
//!
//! This parser produces a lossless concrete syntax tree (CST) via Rowan's green tree builder.
//!
//! - Zero-copy parsing: tokens carry spans, text sliced only when building tree nodes
//! - Trivia buffering: whitespace/comments collected, then attached as leading trivia
//! - Checkpoint-based wrapping: retroactively wrap nodes for binary operators
//! - Explicit recovery sets: per-production sets determine how far an `Error` node reaches
//!
//! # Recovery Strategy
//!
//! The parser is resilient: it always produces a tree, and it reports nothing itself.
//!
//! 1. Unexpected tokens get wrapped in `SyntaxKind::Error` nodes and consumed
//! 2. Missing expected tokens leave an empty `Error` node at the position they were expected
//! 3. Recovery sets define "synchronization points" per production
//!
//! Fuel exhaustion (exec_fuel, recursion_fuel) is the only way parsing fails.

pub mod cst;
pub mod lexer;

mod core;
mod grammar;
mod invariants;
mod printer;


pub use cst::{SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken, TraceQlLang};
pub use printer::CstPrinter;

pub use core::Parser;

use lexer::lex;

/// Default limit on tokens consumed per parse.
pub const DEFAULT_EXEC_FUEL: u32 = 1_000_000;

/// Default limit on nesting depth.
pub const DEFAULT_RECURSION_FUEL: u32 = 512;

/// Why the parser could not produce a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Unavailable {
    /// Execution fuel exhausted (too many parser operations).
    #[error("execution limit exceeded")]
    ExecFuelExhausted,

    /// Recursion fuel exhausted (input nested too deeply).
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,
}

/// Resource limits for one parse. `None` disables a limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    pub exec_fuel: Option<u32>,
    pub recursion_fuel: Option<u32>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            exec_fuel: Some(DEFAULT_EXEC_FUEL),
            recursion_fuel: Some(DEFAULT_RECURSION_FUEL),
        }
    }
}

impl ParserConfig {
    pub fn with_exec_fuel(mut self, limit: Option<u32>) -> Self {
        self.exec_fuel = limit;
        self
    }

    pub fn with_recursion_fuel(mut self, limit: Option<u32>) -> Self {
        self.recursion_fuel = limit;
        self
    }
}

/// Parse result containing the green tree.
///
/// Error nodes in the tree mark every place the input did not fit the grammar.
#[derive(Debug, Clone)]
pub struct Parse {
    pub(crate) green: rowan::GreenNode,
    pub(crate) exec_fuel_consumed: u32,
}

impl Parse {
    /// Creates a typed view over the immutable green tree.
    /// This is cheap: SyntaxNode is a thin wrapper with parent pointers.
    pub fn syntax(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.green.clone())
    }

    /// Tokens consumed while parsing, when exec fuel was limited.
    pub fn exec_fuel_consumed(&self) -> u32 {
        self.exec_fuel_consumed
    }
}

/// Parses with default limits.
pub fn parse(source: &str) -> Result<Parse, Unavailable> {
    parse_with_config(source, ParserConfig::default())
}

pub fn parse_with_config(source: &str, config: ParserConfig) -> Result<Parse, Unavailable> {
    Parser::new(source, lex(source))
        .with_exec_fuel(config.exec_fuel)
        .with_recursion_fuel(config.recursion_fuel)
        .parse()
}
