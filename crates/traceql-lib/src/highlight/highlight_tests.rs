use rowan::{GreenNodeBuilder, Language};

use super::{DiagnosticContext, ErrorMessage, Highlighter, classify, collect, highlight};
use crate::parser::{ParserConfig, SyntaxKind, SyntaxNode, TraceQlLang, Unavailable};
use crate::{Diagnostics, Error};

#[track_caller]
fn diagnostics(query: &str) -> Diagnostics {
    highlight(query).expect("within parser limits")
}

/// `message @ start..end "covered text"` per diagnostic.
#[track_caller]
fn dump(query: &str) -> String {
    diagnostics(query)
        .iter()
        .map(|d| {
            let text = &query[d.range()];
            format!("{} @ {}..{} {text:?}\n", d.message, d.start, d.end)
        })
        .collect()
}

#[test]
fn invalid_value_after_comparison() {
    insta::assert_snapshot!(dump("{ .foo = bar }"), @r#"Invalid value after comparison operator. @ 9..12 "bar""#);
}

#[test]
fn valid_query_has_no_diagnostics() {
    let query = r#"{ .foo = "bar" && duration > 10ms }"#;
    assert!(diagnostics(query).is_empty());
}

#[test]
fn two_malformed_filters_in_source_order() {
    insta::assert_snapshot!(dump("{ .a 1 } && { .b 2 }"), @r#"
    Invalid comparison operator after field expression. @ 5..6 "1"
    Invalid comparison operator after field expression. @ 17..18 "2"
    "#);
}

#[test]
fn stray_top_level_token() {
    insta::assert_snapshot!(dump("foo"), @r#"Invalid query. @ 0..3 "foo""#);
}

#[test]
fn empty_and_blank_queries() {
    assert!(diagnostics("").is_empty());
    assert!(diagnostics("   \n\t").is_empty());
    assert!(diagnostics("// only a comment").is_empty());
}

#[test]
fn valid_queries() {
    for query in [
        "{}",
        "{ .http.status_code = 200 }",
        "{ resource.service.name =~ \"api.*\" }",
        "{ span:duration > 1.5s && span:status = error }",
        "{ status != ok || kind = server }",
        "{ .a + .b * 2 >= 10 && !(.c = nil) }",
        "{ event:name = `start` } >> { link:traceID != \"\" }",
        "({ .a = 1 } && { .b = 2 }) | count() > 3",
        "{} | avg(duration) < -1ms | by(resource.service.name)",
        "{} | select(.a, span.b, trace:rootService)",
        "{ instrumentation:version = \"1\" } !<< { nestedSetParent = -1 }",
    ] {
        let found = diagnostics(query);
        assert!(found.is_empty(), "{query}: {found:?}");
    }
}

#[test]
fn missing_value_after_logical_operator() {
    insta::assert_snapshot!(dump("{ .a = 1 && }"), @r#"Invalid value after comparison operator. @ 12..12 """#);
}

#[test]
fn missing_combining_operator() {
    insta::assert_snapshot!(dump("{} foo"), @r#"Invalid spanset combining operator after spanset expression. @ 3..6 "foo""#);
}

#[test]
fn invalid_stage_after_pipe() {
    insta::assert_snapshot!(dump("{} | foo"), @r#"Invalid aggregation operator after pipepile operator. @ 5..8 "foo""#);
}

#[test]
fn invalid_spanset_after_combining_operator() {
    insta::assert_snapshot!(dump("{} && foo"), @r#"Invalid spanset expression after spanset combining operator. @ 6..9 "foo""#);
}

#[test]
fn unknown_scoped_intrinsic() {
    insta::assert_snapshot!(dump("{ span:foo = 1 }"), @r#"Invalid expression for aggregator operator. @ 7..10 "foo""#);
}

#[test]
fn missing_aggregate_argument() {
    insta::assert_snapshot!(dump("{} | avg() > 1"), @r#"Invalid expression for aggregator operator. @ 9..9 """#);
}

#[test]
fn scope_without_attribute_path() {
    insta::assert_snapshot!(dump("{ span. = 1 }"), @r#"Invalid expression for spanset. @ 6..7 ".""#);
}

#[test]
fn invalid_value_after_scalar_comparison() {
    insta::assert_snapshot!(dump("{} | count() > bar"), @r#"Invalid value after comparison operator. @ 15..18 "bar""#);
}

#[test]
fn detached_minus_after_scalar_comparison() {
    insta::assert_snapshot!(dump("{} | count() > - 1"), @r#"Invalid value after comparison operator. @ 15..18 "- 1""#);
}

#[test]
fn missing_scalar_comparison() {
    insta::assert_snapshot!(dump("{} | count() 2"), @r#"Invalid comparison operator after aggregator operator. @ 13..14 "2""#);
}

#[test]
fn unmatched_close_paren() {
    insta::assert_snapshot!(dump("{} )"), @r#"Invalid query. @ 3..4 ")""#);
}

#[test]
fn error_inside_group_operation() {
    insta::assert_snapshot!(dump("{} | by(foo)"), @r#"Invalid query. @ 8..11 "foo""#);
}

#[test]
fn several_errors_in_one_query() {
    insta::assert_snapshot!(dump("{ .a = } && { span. = 1 } | count() foo"), @r#"
    Invalid value after comparison operator. @ 7..7 ""
    Invalid expression for spanset. @ 18..19 "."
    Invalid comparison operator after aggregator operator. @ 36..39 "foo"
    "#);
}

#[test]
fn diagnostics_follow_source_order() {
    let queries = [
        "{ .a = x } && { .b = y } | foo",
        "{ .a 1 } && { .b 2 } && { .c 3 }",
        "{ span:x = 1 && span. = 2 && .c = @ }",
    ];
    for query in queries {
        let found = diagnostics(query);
        assert!(found.len() >= 2, "{query}");
        let starts: Vec<usize> = found.iter().map(|d| d.start).collect();
        let mut sorted = starts.clone();
        sorted.sort();
        assert_eq!(starts, sorted, "{query}");
    }
}

#[test]
fn ranges_equal_error_node_ranges() {
    let highlighter = Highlighter::default();
    for query in [
        "{ .foo = bar }",
        "{ .a 1 } && { .b 2 }",
        "foo | bar ) {",
        "{} | count( > x",
        "({ .a = } ~ ",
    ] {
        let nodes = highlighter.error_nodes(query).unwrap();
        let found = highlighter.highlight(query).unwrap();
        assert_eq!(nodes.len(), found.len());
        for (node, diag) in nodes.iter().zip(found.iter()) {
            assert_eq!((diag.start, diag.end), (node.from(), node.to()));
            assert!(diag.start <= diag.end && diag.end <= query.len());
        }
    }
}

#[test]
fn highlighting_is_idempotent() {
    let query = "{ .a = } && foo | bar";
    let first = serde_json::to_string(&diagnostics(query)).unwrap();
    let second = serde_json::to_string(&diagnostics(query)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn all_diagnostics_are_errors() {
    let found = diagnostics("{ .a = } foo )");
    assert!(!found.is_empty());
    assert_eq!(found.error_count(), found.len());
}

#[test]
fn context_skips_trivia() {
    let nodes = Highlighter::default().error_nodes("{}   &&   foo").unwrap();
    let ctx = DiagnosticContext::of(&nodes[0]);
    assert_eq!(ctx.parent, Some(SyntaxKind::SpansetPipelineExpression));
    assert_eq!(ctx.prev_sibling, Some(SyntaxKind::And));
}

#[test]
fn parser_limits_surface_as_errors() {
    let config = ParserConfig::default().with_exec_fuel(Some(1));
    let highlighter = Highlighter::new(config);
    assert_eq!(highlighter.config(), config);
    assert_eq!(Highlighter::default().config(), ParserConfig::default());

    let result = highlighter.highlight("{ .a = 1 }");
    assert!(matches!(
        result,
        Err(Error::ParseUnavailable(Unavailable::ExecFuelExhausted))
    ));
}

fn raw(kind: SyntaxKind) -> rowan::SyntaxKind {
    TraceQlLang::kind_to_raw(kind)
}

#[test]
fn collector_visits_nested_errors_outer_first() {
    let mut builder = GreenNodeBuilder::new();
    builder.start_node(raw(SyntaxKind::TraceQL));
    builder.start_node(raw(SyntaxKind::Error));
    builder.token(raw(SyntaxKind::Identifier), "a");
    builder.start_node(raw(SyntaxKind::Error));
    builder.token(raw(SyntaxKind::Identifier), "b");
    builder.finish_node();
    builder.finish_node();
    builder.start_node(raw(SyntaxKind::Error));
    builder.finish_node();
    builder.finish_node();
    let root = SyntaxNode::new_root(builder.finish());

    let nodes = collect(&root);
    let ranges: Vec<_> = nodes.iter().map(|n| (n.from(), n.to())).collect();
    assert_eq!(ranges, [(0, 2), (1, 2), (2, 2)]);

    let messages: Vec<_> = nodes
        .iter()
        .map(|n| classify(DiagnosticContext::of(n)))
        .collect();
    assert_eq!(messages, [ErrorMessage::InvalidQuery; 3]);
}

#[test]
fn collector_on_clean_tree() {
    let parse = crate::parser::parse("{ .a = 1 }").unwrap();
    assert!(collect(&parse.syntax()).is_empty());
}
