//! Read-only view over parser output.
//!
//! A [`NodeRef`] is a cursor into the parser's shared green tree; cloning one never
//! copies the tree, and nothing here can mutate it.

use rowan::{Direction, TextRange};

use crate::parser::{SyntaxElement, SyntaxKind, SyntaxNode};

/// Type id the parser reserves for error nodes.
pub const ERROR_TYPE_ID: u16 = 0;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeRef(SyntaxNode);

impl NodeRef {
    pub fn new(node: SyntaxNode) -> Self {
        Self(node)
    }

    pub fn syntax(&self) -> &SyntaxNode {
        &self.0
    }

    pub fn kind(&self) -> SyntaxKind {
        self.0.kind()
    }

    pub fn type_id(&self) -> u16 {
        self.kind().id()
    }

    pub fn is_error(&self) -> bool {
        self.type_id() == ERROR_TYPE_ID
    }

    pub fn parent(&self) -> Option<NodeRef> {
        self.0.parent().map(NodeRef)
    }

    /// Closest preceding sibling that is not trivia. May be a node or a token,
    /// since operators such as `&&` and `|` sit in the tree as bare tokens.
    pub fn prev_sibling(&self) -> Option<SyntaxElement> {
        self.0
            .siblings_with_tokens(Direction::Prev)
            .skip(1)
            .find(|element| !element.kind().is_trivia())
    }

    pub fn range(&self) -> TextRange {
        self.0.text_range()
    }

    pub fn from(&self) -> usize {
        self.range().start().into()
    }

    pub fn to(&self) -> usize {
        self.range().end().into()
    }
}
