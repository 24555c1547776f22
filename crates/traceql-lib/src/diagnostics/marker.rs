//! Editor markers: diagnostics resolved to line/column positions.
//!
//! Diagnostics carry plain byte offsets. Editors want lines and columns, usually
//! one-based, so the conversion lives here at the boundary.

use serde::Serialize;

use super::collection::Diagnostics;
use super::message::{Diagnostic, Severity};

/// Where column numbering starts. Lines are always one-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnBase {
    Zero,
    #[default]
    One,
}

impl ColumnBase {
    fn offset(self) -> usize {
        match self {
            ColumnBase::Zero => 0,
            ColumnBase::One => 1,
        }
    }
}

/// Line starts of a text, for offset to line/column lookups.
#[derive(Debug, Clone)]
pub struct LineIndex<'a> {
    text: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(text.match_indices('\n').map(|(i, _)| i + 1));
        Self { text, line_starts }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Zero-based line and column of a byte offset. Offsets past the end clamp to it.
    ///
    /// Columns count UTF-16 code units, as Monaco and LSP clients do.
    pub fn line_col(&self, offset: usize) -> (usize, usize) {
        let offset = offset.min(self.text.len());
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let line_start = self.line_starts[line];
        let column = self.text[line_start..offset].encode_utf16().count();
        (line, column)
    }
}

/// Diagnostic positioned for an editor, serialized in Monaco's marker shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
    pub message: String,
    pub severity: Severity,
    #[serde(rename = "startLineNumber")]
    pub start_line: usize,
    pub start_column: usize,
    #[serde(rename = "endLineNumber")]
    pub end_line: usize,
    pub end_column: usize,
}

impl Marker {
    pub fn from_diagnostic(
        diagnostic: &Diagnostic,
        index: &LineIndex<'_>,
        base: ColumnBase,
    ) -> Self {
        let (start_line, start_col) = index.line_col(diagnostic.start);
        let (end_line, end_col) = index.line_col(diagnostic.end);
        Self {
            message: diagnostic.message.clone(),
            severity: diagnostic.severity,
            start_line: start_line + 1,
            start_column: start_col + base.offset(),
            end_line: end_line + 1,
            end_column: end_col + base.offset(),
        }
    }
}

impl Diagnostics {
    /// Resolves every diagnostic against `source`, the text it was produced from.
    pub fn markers(&self, source: &str, base: ColumnBase) -> Vec<Marker> {
        let index = LineIndex::new(source);
        self.iter()
            .map(|d| Marker::from_diagnostic(d, &index, base))
            .collect()
    }
}
