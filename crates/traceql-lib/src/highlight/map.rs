use super::classify::ErrorMessage;
use super::tree::NodeRef;
use crate::diagnostics::Diagnostic;

/// Error diagnostic spanning exactly the node's `[from, to)`.
pub fn map(node: &NodeRef, message: ErrorMessage) -> Diagnostic {
    Diagnostic::error(message.as_str(), node.from(), node.to())
}
