//! Grammar productions for TraceQL.
//!
//! This module implements all `parse_*` methods as an extension of `Parser`.
//! Productions never report messages: malformed input ends up in `Error` nodes, and
//! where those nodes sit in the tree is what diagnostics are derived from.

mod fields;
mod pipeline;
mod spansets;
pub(crate) mod words;
