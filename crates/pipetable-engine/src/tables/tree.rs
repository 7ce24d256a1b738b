use crate::inline::InlineNode;
use crate::rope::span::Span;

use super::align::Alignment;

/// Which part of the table a section represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Head,
    Separator,
    Body,
}

/// One table section owning its rows.
///
/// The separator section owns no rows: the separator line is consumed for
/// alignment only.
#[derive(Debug, Clone)]
pub struct Section {
    pub kind: SectionKind,
    /// Covered source span; `Span::EMPTY` for a section with no rows.
    pub span: Span,
    pub rows: Vec<Row>,
}

impl Section {
    pub(crate) fn new(kind: SectionKind) -> Self {
        Section {
            kind,
            span: Span::EMPTY,
            rows: Vec::new(),
        }
    }
}

/// One table row, corresponding to one source line (EOL excluded).
#[derive(Debug, Clone)]
pub struct Row {
    pub span: Span,
    pub cells: Vec<Cell>,
}

/// A single table cell.
#[derive(Debug, Clone)]
pub struct Cell {
    /// Raw content span between markers, whitespace included.
    /// `Span::EMPTY` for a synthesized cell.
    pub span: Span,
    /// Trimmed text span handed to inline resolution.
    pub text: Span,
    /// Inline-resolved child nodes.
    pub children: Vec<InlineNode>,
    /// Alignment declared by the separator column at this index.
    pub alignment: Option<Alignment>,
    /// True for cells in rows before the separator.
    pub header: bool,
    /// Opening `|` marker span, possibly empty.
    pub opening_marker: Span,
    /// Closing marker span; may merge several consecutive `|` characters
    /// when the cell spans columns. Possibly empty.
    pub closing_marker: Span,
    /// Number of columns this cell occupies (>= 1).
    pub col_span: usize,
}

/// A parsed pipe table.
///
/// Structurally always Head + Separator + Body, in that order; the body may
/// be empty. Built once at block close and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Table {
    /// Full source span of the table block, trailing EOL included.
    pub span: Span,
    /// One alignment per column declared by the separator line.
    pub alignments: Vec<Option<Alignment>>,
    pub head: Section,
    pub separator: Section,
    pub body: Section,
}

impl Table {
    /// The declared column count (authoritative target for reconciliation).
    #[must_use]
    pub fn separator_columns(&self) -> usize {
        self.alignments.len()
    }

    /// Sections in source order, for generic traversal.
    #[must_use]
    pub fn sections(&self) -> [&Section; 3] {
        [&self.head, &self.separator, &self.body]
    }

    /// All cell-bearing rows in source order (head rows then body rows).
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.head.rows.iter().chain(self.body.rows.iter())
    }
}
