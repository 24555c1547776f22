//! Field expressions inside spanset filters.
//!
//! Binary operators are parsed with precedence climbing. Every operand and every
//! operator application gets its own `FieldExpression` node; comparison and arithmetic
//! operators are wrapped in `FieldOp`, while `&&`/`||` stay bare tokens.
//!
//! An operand that cannot be parsed is emitted as a bare `Error` node directly under
//! the enclosing operator application, next to the operator token.

use rowan::Checkpoint;

use super::words::{is_attribute_scope, is_intrinsic, is_static_word, scoped_intrinsics};
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::{FIELD_RECOVERY, LITERALS, LOGICAL_OPS};

/// Binding power of prefix `!` and `-`. Tighter than any infix operator.
const PREFIX_BP: u8 = 13;

/// `(left, right)` binding powers. Right-associative operators bind tighter on the left.
fn infix_binding_power(kind: SyntaxKind) -> Option<(u8, u8)> {
    use SyntaxKind::*;
    let bp = match kind {
        Or => (1, 2),
        And => (3, 4),
        Eq | NotEq | Lt | Lte | Gt | Gte | RegexMatch | RegexNotMatch => (5, 6),
        Plus | Minus => (7, 8),
        Star | Slash | Percent => (9, 10),
        Caret => (12, 11),
        _ => return None,
    };
    Some(bp)
}

impl Parser<'_> {
    pub(crate) fn parse_field_expression(&mut self) {
        self.parse_field_expression_bp(0);
    }

    fn parse_field_expression_bp(&mut self, min_bp: u8) {
        if !self.enter_recursion() {
            return;
        }

        let checkpoint = self.checkpoint();
        if self.parse_field_operand() {
            self.parse_field_infix(checkpoint, min_bp);
        }

        self.exit_recursion();
    }

    fn parse_field_infix(&mut self, checkpoint: Checkpoint, min_bp: u8) {
        while !self.has_fatal_error() {
            let op = self.current();
            let Some((left_bp, right_bp)) = infix_binding_power(op) else {
                break;
            };
            if left_bp < min_bp {
                break;
            }

            self.start_node_at(checkpoint, SyntaxKind::FieldExpression);
            if LOGICAL_OPS.contains(op) {
                self.bump();
            } else {
                self.bump_wrapped(SyntaxKind::FieldOp);
            }
            self.parse_field_expression_bp(right_bp);
            self.finish_node();
        }
    }

    /// Returns `false` if the operand was malformed and an `Error` node was emitted instead.
    fn parse_field_operand(&mut self) -> bool {
        let kind = self.current();
        let word = self.current_text();

        match kind {
            SyntaxKind::ParenOpen => self.parse_field_parenthesized(),
            SyntaxKind::Not | SyntaxKind::Minus => self.parse_field_unary(),
            _ if LITERALS.contains(kind) => self.parse_field_static(),
            SyntaxKind::Identifier if is_static_word(word) => self.parse_field_static(),
            SyntaxKind::AttributeName | SyntaxKind::Dot | SyntaxKind::Identifier => {
                let checkpoint = self.checkpoint();
                if !self.parse_field_reference() {
                    self.bump_as_error();
                    return false;
                }
                self.start_node_at(checkpoint, SyntaxKind::FieldExpression);
                self.finish_node();
            }
            _ => {
                if self.at_end() || self.currently_is_one_of(FIELD_RECOVERY) {
                    self.error_missing();
                } else {
                    self.bump_as_error();
                }
                return false;
            }
        }
        true
    }

    fn parse_field_static(&mut self) {
        self.start_node(SyntaxKind::FieldExpression);
        self.bump_wrapped(SyntaxKind::Static);
        self.finish_node();
    }

    fn parse_field_parenthesized(&mut self) {
        self.start_node(SyntaxKind::FieldExpression);
        self.bump();
        self.parse_field_expression_bp(0);
        self.expect_or_recover(SyntaxKind::ParenClose, FIELD_RECOVERY);
        self.finish_node();
    }

    fn parse_field_unary(&mut self) {
        self.start_node(SyntaxKind::FieldExpression);
        self.bump_wrapped(SyntaxKind::FieldOp);
        self.parse_field_expression_bp(PREFIX_BP);
        self.finish_node();
    }

    /// Attribute or intrinsic reference. Consumes nothing and returns `false` if the
    /// current token cannot start one.
    pub(crate) fn parse_field_reference(&mut self) -> bool {
        match self.current() {
            SyntaxKind::AttributeName => self.bump_wrapped(SyntaxKind::AttributeField),
            SyntaxKind::Dot => {
                self.start_node(SyntaxKind::AttributeField);
                self.bump_as_error();
                self.finish_node();
            }
            SyntaxKind::Identifier => {
                let word = self.current_text();
                let next = self.peek_nth(1);
                let scoped = if next == SyntaxKind::Colon {
                    scoped_intrinsics(word)
                } else {
                    None
                };

                if let Some(names) = scoped {
                    self.parse_scoped_intrinsic(names);
                } else if matches!(next, SyntaxKind::AttributeName | SyntaxKind::Dot)
                    && is_attribute_scope(word)
                {
                    self.parse_scoped_attribute();
                } else if is_intrinsic(word) {
                    self.bump_wrapped(SyntaxKind::IntrinsicField);
                } else {
                    return false;
                }
            }
            _ => return false,
        }
        true
    }

    /// `span:duration`. Unknown names after the colon become `Error`.
    fn parse_scoped_intrinsic(&mut self, names: &[&str]) {
        self.start_node(SyntaxKind::IntrinsicField);
        self.bump();
        self.assert_current(SyntaxKind::Colon);
        self.bump();

        let word = self.current_text();
        if self.currently_is(SyntaxKind::Identifier) && names.contains(&word) {
            self.bump();
        } else if self.at_end() || self.currently_is_one_of(FIELD_RECOVERY) {
            self.error_missing();
        } else {
            self.bump_as_error();
        }
        self.finish_node();
    }

    /// `resource.service.name`, or `span.` with the path missing.
    fn parse_scoped_attribute(&mut self) {
        self.start_node(SyntaxKind::AttributeField);
        self.bump();
        if !self.eat_token(SyntaxKind::AttributeName) {
            self.bump_as_error();
        }
        self.finish_node();
    }
}
