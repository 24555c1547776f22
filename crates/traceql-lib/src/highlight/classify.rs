//! Error messages chosen from where an error node sits in the tree.
//!
//! Only two facts are consulted: the kind of the error's parent, and the kind of the
//! closest non-trivia element before it. The grammar places its error nodes so that
//! this pair is enough to tell what went wrong.

use serde::Serialize;

use super::tree::NodeRef;
use crate::parser::SyntaxKind;

/// Diagnostic categories for malformed TraceQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorMessage {
    InvalidValueAfterComparison,
    InvalidComparisonAfterField,
    InvalidCombiningOperator,
    InvalidAggregationAfterPipe,
    InvalidSpansetAfterCombining,
    InvalidAggregatorExpression,
    InvalidSpansetExpression,
    InvalidComparisonAfterAggregator,
    InvalidQuery,
}

impl ErrorMessage {
    pub const ALL: [ErrorMessage; 9] = [
        ErrorMessage::InvalidValueAfterComparison,
        ErrorMessage::InvalidComparisonAfterField,
        ErrorMessage::InvalidCombiningOperator,
        ErrorMessage::InvalidAggregationAfterPipe,
        ErrorMessage::InvalidSpansetAfterCombining,
        ErrorMessage::InvalidAggregatorExpression,
        ErrorMessage::InvalidSpansetExpression,
        ErrorMessage::InvalidComparisonAfterAggregator,
        ErrorMessage::InvalidQuery,
    ];

    /// User-facing text. Editors match on these strings, so they are kept verbatim.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InvalidValueAfterComparison => "Invalid value after comparison operator.",
            Self::InvalidComparisonAfterField => {
                "Invalid comparison operator after field expression."
            }
            Self::InvalidCombiningOperator => {
                "Invalid spanset combining operator after spanset expression."
            }
            Self::InvalidAggregationAfterPipe => {
                "Invalid aggregation operator after pipepile operator."
            }
            Self::InvalidSpansetAfterCombining => {
                "Invalid spanset expression after spanset combining operator."
            }
            Self::InvalidAggregatorExpression => "Invalid expression for aggregator operator.",
            Self::InvalidSpansetExpression => "Invalid expression for spanset.",
            Self::InvalidComparisonAfterAggregator => {
                "Invalid comparison operator after aggregator operator."
            }
            Self::InvalidQuery => "Invalid query.",
        }
    }
}

impl std::fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `(parent kind, previous sibling kind)` of an error node. `None` means there is none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DiagnosticContext {
    pub parent: Option<SyntaxKind>,
    pub prev_sibling: Option<SyntaxKind>,
}

impl DiagnosticContext {
    pub fn new(parent: Option<SyntaxKind>, prev_sibling: Option<SyntaxKind>) -> Self {
        Self {
            parent,
            prev_sibling,
        }
    }

    pub fn of(node: &NodeRef) -> Self {
        Self {
            parent: node.parent().map(|p| p.kind()),
            prev_sibling: node.prev_sibling().map(|s| s.kind()),
        }
    }

    /// Context from raw type ids. Ids the grammar does not define count as absent.
    pub fn from_type_ids(parent: Option<u16>, prev_sibling: Option<u16>) -> Self {
        Self {
            parent: parent.and_then(SyntaxKind::from_raw),
            prev_sibling: prev_sibling.and_then(SyntaxKind::from_raw),
        }
    }
}

/// Total over every context; shapes outside the table fall back to `InvalidQuery`.
pub fn classify(ctx: DiagnosticContext) -> ErrorMessage {
    use ErrorMessage::*;
    use SyntaxKind::{
        Aggregate, And, AttributeField, ComparisonOp, FieldExpression, FieldOp, IntrinsicField, Or,
        Pipe, ScalarFilter, SpansetFilter, SpansetPipelineExpression,
    };

    match (ctx.parent, ctx.prev_sibling) {
        (Some(FieldExpression), Some(FieldOp | And | Or)) => InvalidValueAfterComparison,
        (Some(FieldExpression), _) => InvalidComparisonAfterField,

        (Some(SpansetFilter), _) => InvalidComparisonAfterField,

        (
            Some(SpansetPipelineExpression),
            Some(SpansetPipelineExpression),
        ) => InvalidCombiningOperator,
        (Some(SpansetPipelineExpression), Some(Pipe)) => InvalidAggregationAfterPipe,
        (Some(SpansetPipelineExpression), _) => InvalidSpansetAfterCombining,

        (Some(IntrinsicField | Aggregate), _) => InvalidAggregatorExpression,

        (Some(AttributeField), _) => InvalidSpansetExpression,

        (Some(ScalarFilter), Some(ComparisonOp)) => InvalidValueAfterComparison,
        (Some(ScalarFilter), _) => InvalidComparisonAfterAggregator,

        _ => InvalidQuery,
    }
}
