//! Reserved words. The lexer emits all of them as `Identifier`; the parser tells them apart by text.

/// Unscoped intrinsics: `{ duration > 1s }`.
pub(crate) const INTRINSICS: &[&str] = &[
    "duration",
    "name",
    "status",
    "statusMessage",
    "kind",
    "rootName",
    "rootServiceName",
    "traceDuration",
    "childCount",
    "nestedSetLeft",
    "nestedSetRight",
    "nestedSetParent",
];

/// Scopes that prefix an attribute path: `resource.service.name`.
pub(crate) const ATTRIBUTE_SCOPES: &[&str] = &[
    "span",
    "resource",
    "parent",
    "event",
    "link",
    "instrumentation",
];

/// Literal keywords usable as comparison values.
pub(crate) const STATIC_WORDS: &[&str] = &[
    "true",
    "false",
    "nil",
    "ok",
    "error",
    "unset",
    "unspecified",
    "internal",
    "server",
    "client",
    "producer",
    "consumer",
];

/// Aggregate functions of a scalar filter: `| count() > 2`.
pub(crate) const AGGREGATES: &[&str] = &["count", "avg", "min", "max", "sum"];

pub(crate) const KW_COUNT: &str = "count";
pub(crate) const KW_BY: &str = "by";
pub(crate) const KW_SELECT: &str = "select";

/// Intrinsics reachable through `scope:name`, e.g. `span:duration`.
pub(crate) fn scoped_intrinsics(scope: &str) -> Option<&'static [&'static str]> {
    let names: &'static [&'static str] = match scope {
        "span" => &[
            "duration",
            "name",
            "kind",
            "status",
            "statusMessage",
            "id",
            "parentID",
        ],
        "trace" => &["duration", "rootName", "rootService", "id"],
        "event" => &["name", "timeSinceStart"],
        "link" => &["traceID", "spanID"],
        "instrumentation" => &["name", "version"],
        _ => return None,
    };
    Some(names)
}

pub(crate) fn is_intrinsic(word: &str) -> bool {
    INTRINSICS.contains(&word)
}

pub(crate) fn is_attribute_scope(word: &str) -> bool {
    ATTRIBUTE_SCOPES.contains(&word)
}

pub(crate) fn is_static_word(word: &str) -> bool {
    STATIC_WORDS.contains(&word)
}

pub(crate) fn is_aggregate(word: &str) -> bool {
    AGGREGATES.contains(&word)
}
