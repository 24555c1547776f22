//! Spanset pipeline expressions: filters, grouping parens, combining operators, pipes.

use super::words::{KW_BY, KW_SELECT, is_aggregate};
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::TokenSet;
use crate::parser::cst::token_sets::{
    FIELD_OPERAND_FIRST, FILTER_RECOVERY, ROOT_RECOVERY, SPANSET_FIRST, SPANSET_OPS,
    SPANSET_RECOVERY, STAGE_RECOVERY,
};

impl Parser<'_> {
    pub fn parse_root(&mut self) {
        self.start_node(SyntaxKind::TraceQL);

        while !self.at_end() {
            if self.currently_is_one_of(SPANSET_FIRST) {
                self.parse_spanset_pipeline_expression();
            } else {
                // Stray top-level input, e.g. `foo` or an unmatched `)`.
                self.error_until(ROOT_RECOVERY);
            }
        }

        self.eat_trivia();
        self.finish_node();
    }

    /// `Primary (SpansetOp Primary)*`, left-associative.
    ///
    /// Anything other than a combining operator after a complete expression is wrapped
    /// together with that expression, so the error's previous sibling is the expression.
    pub(crate) fn parse_spanset_pipeline_expression(&mut self) {
        let checkpoint = self.checkpoint();
        self.parse_pipeline_primary();

        while !self.at_end() && !self.currently_is(SyntaxKind::ParenClose) {
            self.start_node_at(checkpoint, SyntaxKind::SpansetPipelineExpression);
            if self.currently_is_one_of(SPANSET_OPS) {
                self.bump();
                if self.currently_is_one_of(SPANSET_FIRST) {
                    self.parse_pipeline_primary();
                } else {
                    self.error_until(SPANSET_RECOVERY);
                }
            } else {
                self.error_until(SPANSET_RECOVERY);
            }
            self.finish_node();
        }
    }

    /// `{ ... }` or `( ... )`, followed by pipeline stages. Caller guarantees `SPANSET_FIRST`.
    fn parse_pipeline_primary(&mut self) {
        if !self.enter_recursion() {
            return;
        }

        self.start_node(SyntaxKind::SpansetPipelineExpression);
        if self.currently_is(SyntaxKind::ParenOpen) {
            self.parse_spanset_group();
        } else {
            self.parse_spanset_filter();
        }
        self.parse_pipeline_stages();
        self.finish_node();

        self.exit_recursion();
    }

    fn parse_spanset_group(&mut self) {
        self.assert_current(SyntaxKind::ParenOpen);
        self.bump();

        if self.currently_is_one_of(SPANSET_FIRST) {
            self.parse_spanset_pipeline_expression();
        } else {
            self.error_until(TokenSet::single(SyntaxKind::ParenClose));
        }

        self.expect_or_recover(SyntaxKind::ParenClose, TokenSet::EMPTY);
    }

    /// `{}` or `{ FieldExpression }`.
    pub(crate) fn parse_spanset_filter(&mut self) {
        self.assert_current(SyntaxKind::BraceOpen);
        self.start_node(SyntaxKind::SpansetFilter);
        self.bump();

        if self.currently_is_one_of(FIELD_OPERAND_FIRST) {
            self.parse_field_expression();
        }

        self.expect_or_recover(SyntaxKind::BraceClose, FILTER_RECOVERY);
        self.finish_node();
    }

    fn parse_pipeline_stages(&mut self) {
        while !self.has_fatal_error() && self.eat_token(SyntaxKind::Pipe) {
            self.parse_pipeline_stage();
        }
    }

    fn parse_pipeline_stage(&mut self) {
        let word = self.current_text();
        match self.current() {
            SyntaxKind::BraceOpen => self.parse_spanset_filter(),
            SyntaxKind::Identifier if is_aggregate(word) => self.parse_scalar_filter(),
            SyntaxKind::Identifier if word == KW_BY => self.parse_group_operation(),
            SyntaxKind::Identifier if word == KW_SELECT => self.parse_select_operation(),
            _ => self.error_until(STAGE_RECOVERY),
        }
    }
}
