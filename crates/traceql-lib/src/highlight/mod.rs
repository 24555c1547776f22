//! Syntax error highlighting.
//!
//! One run parses the query, collects the tree's error nodes in source order,
//! classifies each from its local context, and maps it to a [`Diagnostic`] carrying
//! the node's byte range:
//!
//! ```text
//! query → parse → collect → classify → map → Diagnostics
//! ```
//!
//! Runs share nothing, so highlighting the same text twice gives the same result.
//!
//! [`Diagnostic`]: crate::Diagnostic

mod classify;
mod collect;
mod map;
mod tree;

#[cfg(test)]
mod highlight_tests;

pub use classify::{DiagnosticContext, ErrorMessage, classify};
pub use collect::collect;
pub use map::map;
pub use tree::{ERROR_TYPE_ID, NodeRef};

use tracing::{debug, trace};

use crate::Result;
use crate::diagnostics::Diagnostics;
use crate::parser::{Parse, ParserConfig, parse_with_config};

/// Highlighting entry point with its parser limits.
#[derive(Debug, Clone, Copy, Default)]
pub struct Highlighter {
    config: ParserConfig,
}

impl Highlighter {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> ParserConfig {
        self.config
    }

    /// Parses `query` once. Fails only when the parser gives up on its limits.
    pub fn parse(&self, query: &str) -> Result<Parse> {
        let parse = parse_with_config(query, self.config)?;
        debug!(
            query_len = query.len(),
            exec_fuel_consumed = parse.exec_fuel_consumed(),
            "parsed query"
        );
        Ok(parse)
    }

    /// Error nodes of `query`'s tree, in source order.
    pub fn error_nodes(&self, query: &str) -> Result<Vec<NodeRef>> {
        let parse = self.parse(query)?;
        let nodes = collect(&parse.syntax());
        debug!(count = nodes.len(), "collected error nodes");
        Ok(nodes)
    }

    pub fn highlight(&self, query: &str) -> Result<Diagnostics> {
        let nodes = self.error_nodes(query)?;
        Ok(nodes.iter().map(diagnose).collect())
    }
}

fn diagnose(node: &NodeRef) -> crate::Diagnostic {
    let ctx = DiagnosticContext::of(node);
    let message = classify(ctx);
    trace!(
        from = node.from(),
        to = node.to(),
        parent = ?ctx.parent,
        prev_sibling = ?ctx.prev_sibling,
        %message,
        "classified error node"
    );
    map(node, message)
}

/// Highlights `query` with default parser limits.
pub fn highlight(query: &str) -> Result<Diagnostics> {
    Highlighter::default().highlight(query)
}
