use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// One reported problem with a half-open byte range `[start, end)` into the query.
///
/// Offsets are exactly those of the syntax node the diagnostic was made from; any
/// editor-specific shift is applied by [`Marker`](super::Marker) instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub start: usize,
    pub end: usize,
}

impl Diagnostic {
    pub fn new(severity: Severity, message: impl Into<String>, start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "diagnostic range is reversed");
        Self {
            severity,
            message: message.into(),
            start,
            end,
        }
    }

    pub fn error(message: impl Into<String>, start: usize, end: usize) -> Self {
        Self::new(Severity::Error, message, start, end)
    }

    pub fn warning(message: impl Into<String>, start: usize, end: usize) -> Self {
        Self::new(Severity::Warning, message, start, end)
    }

    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}..{}: {}",
            self.severity, self.start, self.end, self.message
        )
    }
}
