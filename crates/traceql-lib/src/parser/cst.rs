//! Syntax kinds for TraceQL.
//!
//! `SyntaxKind` serves dual roles: token kinds (from lexer) and node kinds (from parser).
//! Logos derives token recognition; node kinds lack token/regex attributes.
//! `TraceQlLang` implements Rowan's `Language` trait for tree construction.
//!
//! The raw id of every kind is stable. `Error` is pinned to `0`, the id consumers
//! use to recognise parse-error nodes.

use logos::Logos;
use rowan::Language;

/// All token and node kinds. `Error` first, then tokens, then nodes, then `__LAST` sentinel.
/// `#[repr(u16)]` enables safe transmute in `from_raw`.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    /// Parse-error node. Wraps unexpected tokens, or stands empty where something is missing.
    Error = 0,

    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    #[token("(")]
    ParenOpen,

    #[token(")")]
    ParenClose,

    #[token(",")]
    Comma,

    #[token(":")]
    Colon,

    /// Lone dot, e.g. `span.` with the attribute name missing.
    #[token(".")]
    Dot,

    #[token("|")]
    Pipe,

    #[token("&&")]
    And,

    #[token("||")]
    Or,

    #[token("!")]
    Not,

    #[token("=")]
    Eq,

    #[token("!=")]
    NotEq,

    #[token("<")]
    Lt,

    #[token("<=")]
    Lte,

    #[token(">")]
    Gt,

    #[token(">=")]
    Gte,

    #[token("=~")]
    RegexMatch,

    #[token("!~")]
    RegexNotMatch,

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("*")]
    Star,

    #[token("/")]
    Slash,

    #[token("%")]
    Percent,

    #[token("^")]
    Caret,

    /// Sibling spanset operator.
    #[token("~")]
    Tilde,

    /// Descendant spanset operator.
    #[token(">>")]
    GtGt,

    /// Ancestor spanset operator.
    #[token("<<")]
    LtLt,

    #[token("!>")]
    NotGt,

    #[token("!<")]
    NotLt,

    #[token("!>>")]
    NotGtGt,

    #[token("!<<")]
    NotLtLt,

    #[regex(r"[0-9]+")]
    Integer,

    #[regex(r"[0-9]+\.[0-9]+")]
    Float,

    /// Number with a time unit suffix. Longer than `Integer` so Logos prefers it.
    #[regex(r"[0-9]+(?:\.[0-9]+)?(?:ns|us|µs|ms|s|m|h)")]
    Duration,

    #[regex(r#""(?:[^"\\]|\\.)*""#)]
    #[regex(r"`[^`]*`")]
    Str,

    /// Bare word. Keywords (intrinsics, scopes, aggregates) are recognised by the parser.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,

    /// Attribute path including its leading dot: `.http.status_code`.
    #[regex(r"\.[a-zA-Z_][a-zA-Z0-9_.]*")]
    AttributeName,

    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    #[regex(r"//[^\n]*", allow_greedy = true)]
    LineComment,

    /// Coalesced unrecognized characters
    Garbage,

    // --- Node kinds (non-terminals) ---
    TraceQL,
    SpansetPipelineExpression,
    SpansetFilter,
    FieldExpression,
    FieldOp,
    AttributeField,
    IntrinsicField,
    Static,
    ScalarFilter,
    Aggregate,
    ComparisonOp,
    GroupOperation,
    SelectOperation,

    // Must be last - used for bounds checking in `from_raw`
    #[doc(hidden)]
    __LAST,
}

use SyntaxKind::*;

impl SyntaxKind {
    /// Stable numeric id of this kind.
    #[inline]
    pub fn id(self) -> u16 {
        self as u16
    }

    /// Inverse of [`SyntaxKind::id`]. `None` for ids outside the grammar.
    pub fn from_raw(raw: u16) -> Option<SyntaxKind> {
        if raw >= __LAST as u16 {
            return None;
        }
        // SAFETY: We've verified the value is in bounds, and SyntaxKind is repr(u16)
        Some(unsafe { std::mem::transmute::<u16, SyntaxKind>(raw) })
    }

    /// Looks a kind up by its grammar name, e.g. `"FieldExpression"`.
    pub fn from_name(name: &str) -> Option<SyntaxKind> {
        (0..__LAST as u16)
            .filter_map(SyntaxKind::from_raw)
            .find(|kind| kind.name() == name)
    }

    /// Grammar name of this kind.
    pub fn name(self) -> &'static str {
        match self {
            Error => "Error",
            BraceOpen => "BraceOpen",
            BraceClose => "BraceClose",
            ParenOpen => "ParenOpen",
            ParenClose => "ParenClose",
            Comma => "Comma",
            Colon => "Colon",
            Dot => "Dot",
            Pipe => "Pipe",
            And => "And",
            Or => "Or",
            Not => "Not",
            Eq => "Eq",
            NotEq => "NotEq",
            Lt => "Lt",
            Lte => "Lte",
            Gt => "Gt",
            Gte => "Gte",
            RegexMatch => "RegexMatch",
            RegexNotMatch => "RegexNotMatch",
            Plus => "Plus",
            Minus => "Minus",
            Star => "Star",
            Slash => "Slash",
            Percent => "Percent",
            Caret => "Caret",
            Tilde => "Tilde",
            GtGt => "GtGt",
            LtLt => "LtLt",
            NotGt => "NotGt",
            NotLt => "NotLt",
            NotGtGt => "NotGtGt",
            NotLtLt => "NotLtLt",
            Integer => "Integer",
            Float => "Float",
            Duration => "Duration",
            Str => "Str",
            Identifier => "Identifier",
            AttributeName => "AttributeName",
            Whitespace => "Whitespace",
            LineComment => "LineComment",
            Garbage => "Garbage",
            TraceQL => "TraceQL",
            SpansetPipelineExpression => "SpansetPipelineExpression",
            SpansetFilter => "SpansetFilter",
            FieldExpression => "FieldExpression",
            FieldOp => "FieldOp",
            AttributeField => "AttributeField",
            IntrinsicField => "IntrinsicField",
            Static => "Static",
            ScalarFilter => "ScalarFilter",
            Aggregate => "Aggregate",
            ComparisonOp => "ComparisonOp",
            GroupOperation => "GroupOperation",
            SelectOperation => "SelectOperation",
            __LAST => "__LAST",
        }
    }

    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, Whitespace | LineComment)
    }

    #[inline]
    pub fn is_error(self) -> bool {
        self == Error
    }

    /// Node kinds are produced by the parser, never by the lexer.
    #[inline]
    pub fn is_node(self) -> bool {
        self == Error || (self >= TraceQL && self < __LAST)
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    #[inline]
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// Language tag for Rowan's tree types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TraceQlLang {}

impl Language for TraceQlLang {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        SyntaxKind::from_raw(raw.0).expect("raw syntax kind out of range")
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for Rowan types parameterized by our language.
pub type SyntaxNode = rowan::SyntaxNode<TraceQlLang>;
pub type SyntaxToken = rowan::SyntaxToken<TraceQlLang>;
pub type SyntaxElement = rowan::NodeOrToken<SyntaxNode, SyntaxToken>;

/// 64-bit bitset of `SyntaxKind`s for O(1) membership testing.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TokenSet(u64);

impl TokenSet {
    /// Creates an empty token set.
    pub const EMPTY: TokenSet = TokenSet(0);

    /// Panics at compile time if any kind's discriminant >= 64.
    #[inline]
    pub const fn new(kinds: &[SyntaxKind]) -> Self {
        let mut bits = 0u64;
        let mut i = 0;
        while i < kinds.len() {
            let kind = kinds[i] as u16;
            assert!(kind < 64, "SyntaxKind value exceeds TokenSet capacity");
            bits |= 1 << kind;
            i += 1;
        }
        TokenSet(bits)
    }

    #[inline]
    pub const fn single(kind: SyntaxKind) -> Self {
        let kind = kind as u16;
        assert!(kind < 64, "SyntaxKind value exceeds TokenSet capacity");
        TokenSet(1 << kind)
    }

    #[inline]
    pub const fn contains(&self, kind: SyntaxKind) -> bool {
        let kind = kind as u16;
        if kind >= 64 {
            return false;
        }
        self.0 & (1 << kind) != 0
    }

    #[inline]
    pub const fn union(self, other: TokenSet) -> TokenSet {
        TokenSet(self.0 | other.0)
    }
}

impl std::fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut list = f.debug_set();
        for i in 0..64u16 {
            if self.0 & (1 << i) != 0
                && let Some(kind) = SyntaxKind::from_raw(i)
            {
                list.entry(&kind);
            }
        }
        list.finish()
    }
}

/// Pre-defined token sets for the parser.
pub mod token_sets {
    use super::*;

    /// Operators combining two spanset expressions.
    pub const SPANSET_OPS: TokenSet = TokenSet::new(&[
        And,
        Or,
        Gt,
        GtGt,
        Lt,
        LtLt,
        Tilde,
        NotGt,
        NotLt,
        NotGtGt,
        NotLtLt,
        RegexNotMatch,
    ]);

    /// FIRST set of a spanset pipeline expression.
    pub const SPANSET_FIRST: TokenSet = TokenSet::new(&[BraceOpen, ParenOpen]);

    /// Binary operators inside a spanset filter that get wrapped in `FieldOp`.
    pub const FIELD_OPS: TokenSet = TokenSet::new(&[
        Eq,
        NotEq,
        Lt,
        Lte,
        Gt,
        Gte,
        RegexMatch,
        RegexNotMatch,
        Plus,
        Minus,
        Star,
        Slash,
        Percent,
        Caret,
    ]);

    pub const LOGICAL_OPS: TokenSet = TokenSet::new(&[And, Or]);

    /// Operators of a scalar filter: `count() > 2`.
    pub const COMPARISON_OPS: TokenSet = TokenSet::new(&[Eq, NotEq, Lt, Lte, Gt, Gte]);

    pub const LITERALS: TokenSet = TokenSet::new(&[Integer, Float, Duration, Str]);

    /// FIRST set of a field expression operand. Identifiers are validated by text.
    pub const FIELD_OPERAND_FIRST: TokenSet = TokenSet::new(&[
        ParenOpen,
        Not,
        Minus,
        Dot,
        AttributeName,
        Identifier,
        Integer,
        Float,
        Duration,
        Str,
    ]);

    pub const TRIVIA: TokenSet = TokenSet::new(&[Whitespace, LineComment]);

    pub const ROOT_RECOVERY: TokenSet = SPANSET_FIRST;

    pub const SPANSET_RECOVERY: TokenSet = SPANSET_OPS.union(TokenSet::single(ParenClose));

    pub const STAGE_RECOVERY: TokenSet = SPANSET_RECOVERY.union(TokenSet::single(Pipe));

    pub const AGGREGATE_RECOVERY: TokenSet = STAGE_RECOVERY.union(COMPARISON_OPS);

    pub const SELECT_RECOVERY: TokenSet = STAGE_RECOVERY.union(TokenSet::single(Comma));

    pub const FILTER_RECOVERY: TokenSet = TokenSet::single(BraceClose);

    pub const FIELD_RECOVERY: TokenSet = TokenSet::new(&[BraceClose, ParenClose, Pipe, Comma])
        .union(FIELD_OPS)
        .union(LOGICAL_OPS);
}
