use rowan::WalkEvent;

use super::tree::NodeRef;
use crate::parser::SyntaxNode;

/// Every error node under `root` (inclusive), in pre-order.
///
/// Pre-order keeps the output in source order, with an enclosing error ahead of
/// any error nested inside it.
pub fn collect(root: &SyntaxNode) -> Vec<NodeRef> {
    root.preorder()
        .filter_map(|event| match event {
            WalkEvent::Enter(node) => Some(NodeRef::new(node)),
            WalkEvent::Leave(_) => None,
        })
        .filter(NodeRef::is_error)
        .collect()
}
