//! Pipeline stages after `|`: scalar filters, `by(...)`, `select(...)`.

use super::words::{KW_BY, KW_COUNT, KW_SELECT, is_static_word};
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::{
    AGGREGATE_RECOVERY, COMPARISON_OPS, FIELD_OPERAND_FIRST, LITERALS, SELECT_RECOVERY,
    STAGE_RECOVERY,
};

impl Parser<'_> {
    /// `count() > 2`, `avg(duration) < 1s`.
    pub(crate) fn parse_scalar_filter(&mut self) {
        self.start_node(SyntaxKind::ScalarFilter);
        self.parse_aggregate();

        if self.currently_is_one_of(COMPARISON_OPS) {
            self.bump_wrapped(SyntaxKind::ComparisonOp);
            self.parse_static_or_error();
        } else {
            self.error_until(STAGE_RECOVERY);
        }

        self.finish_node();
    }

    fn parse_aggregate(&mut self) {
        self.assert_current(SyntaxKind::Identifier);
        let name = self.current_text();
        self.start_node(SyntaxKind::Aggregate);
        self.bump();

        if self.expect_or_recover(SyntaxKind::ParenOpen, AGGREGATE_RECOVERY) {
            if name != KW_COUNT {
                if self.currently_is_one_of(FIELD_OPERAND_FIRST) {
                    self.parse_field_expression();
                } else {
                    self.error_until(AGGREGATE_RECOVERY);
                }
            }
            self.expect_or_recover(SyntaxKind::ParenClose, AGGREGATE_RECOVERY);
        }

        self.finish_node();
    }

    /// Literal or keyword value on the right of a scalar comparison.
    ///
    /// A `-` directly followed by a number is folded into it. Trivia in between is an error.
    fn parse_static_or_error(&mut self) {
        let kind = self.current();
        let word = self.current_text();

        if LITERALS.contains(kind) || (kind == SyntaxKind::Identifier && is_static_word(word)) {
            self.bump_wrapped(SyntaxKind::Static);
        } else if kind == SyntaxKind::Minus
            && matches!(
                self.nth_raw(1),
                SyntaxKind::Integer | SyntaxKind::Float | SyntaxKind::Duration
            )
        {
            self.start_node(SyntaxKind::Static);
            self.bump();
            self.bump();
            self.finish_node();
        } else {
            self.error_until(STAGE_RECOVERY);
        }
    }

    /// `by(resource.service.name)`.
    pub(crate) fn parse_group_operation(&mut self) {
        self.assert_current_word(KW_BY);
        self.start_node(SyntaxKind::GroupOperation);
        self.bump();

        if self.expect_or_recover(SyntaxKind::ParenOpen, STAGE_RECOVERY) {
            if self.currently_is_one_of(FIELD_OPERAND_FIRST) {
                self.parse_field_expression();
            } else {
                self.error_until(STAGE_RECOVERY);
            }
            self.expect_or_recover(SyntaxKind::ParenClose, STAGE_RECOVERY);
        }

        self.finish_node();
    }

    /// `select(.a, span.b, duration)`.
    pub(crate) fn parse_select_operation(&mut self) {
        self.assert_current_word(KW_SELECT);
        self.start_node(SyntaxKind::SelectOperation);
        self.bump();

        if self.expect_or_recover(SyntaxKind::ParenOpen, SELECT_RECOVERY) {
            loop {
                if !self.parse_field_reference() {
                    self.error_until(SELECT_RECOVERY);
                }
                if self.has_fatal_error() || !self.eat_token(SyntaxKind::Comma) {
                    break;
                }
            }
            self.expect_or_recover(SyntaxKind::ParenClose, STAGE_RECOVERY);
        }

        self.finish_node();
    }
}
