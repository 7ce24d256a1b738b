use crate::blocks::classify::LineClass;
use crate::inline::InlineResolver;
use crate::rope::span::Span;

use super::align::parse_alignments;
use super::cursor::SegmentCursor;
use super::options::TableOptions;
use super::segment::{count_cells, split};
use super::tree::{Cell, Row, Section, SectionKind, Table};

/// One buffered source line, EOL excluded from the span.
#[derive(Debug, Clone)]
struct RowLine {
    span: Span,
    text: String,
    eol_len: usize,
}

/// Accumulates table lines and assembles the [`Table`] tree at block close.
///
/// Created by the trigger, pre-seeded with any paragraph-lookback lines as
/// header rows. Continuation is deliberately permissive: any line containing
/// a pipe extends the block; the first line consumed after
/// `mark_next_separator` is tagged as the separator line.
#[derive(Debug)]
pub struct TableParser {
    options: TableOptions,
    rows: Vec<RowLine>,
    separator_row: usize,
    next_is_separator: bool,
}

impl TableParser {
    pub(crate) fn new(options: TableOptions) -> Self {
        TableParser {
            options,
            rows: Vec::new(),
            separator_row: 0,
            next_is_separator: false,
        }
    }

    /// Seeds one paragraph-lookback line as an already-consumed header row.
    pub(crate) fn seed_header_line(&mut self, span: Span, text: String, eol_len: usize) {
        self.rows.push(RowLine {
            span,
            text,
            eol_len,
        });
    }

    /// Tags the next consumed line as the separator line.
    pub(crate) fn mark_next_separator(&mut self) {
        self.next_is_separator = true;
    }

    /// Whether `line` continues this table block.
    #[must_use]
    pub fn try_continue(&self, line: &LineClass) -> bool {
        line.text.contains('|')
    }

    /// Appends a consumed line verbatim.
    pub fn add_line(&mut self, line: &LineClass) {
        if self.next_is_separator {
            self.next_is_separator = false;
            self.separator_row = self.rows.len();
        }
        self.rows.push(RowLine {
            span: line.text_span(),
            text: line.text.clone(),
            eol_len: line.eol_len,
        });
    }

    /// Assembles the table tree in a single pass over the buffered lines.
    ///
    /// Head rows precede the separator index, body rows follow it; the
    /// separator line itself produces alignments only. An empty body section
    /// is still appended so the structural shape is always
    /// Head + Separator + Body.
    pub fn close(self, resolver: &mut dyn InlineResolver) -> Table {
        let separator = &self.rows[self.separator_row];
        let alignments = parse_alignments(&separator.text, separator.span.start);
        let separator_columns = alignments.len();

        let mut head = Section::new(SectionKind::Head);
        let mut separator_section = Section::new(SectionKind::Separator);
        separator_section.span = separator.span;
        let mut body = Section::new(SectionKind::Body);

        for (row_index, line) in self.rows.iter().enumerate() {
            if row_index == self.separator_row {
                continue;
            }

            let row = self.assemble_row(
                line,
                row_index,
                &alignments,
                separator_columns,
                resolver,
            );

            let section = if row_index < self.separator_row {
                &mut head
            } else {
                &mut body
            };
            section.span = if section.rows.is_empty() {
                row.span
            } else {
                section.span.cover(row.span)
            };
            section.rows.push(row);
        }

        let first = &self.rows[0];
        let last = &self.rows[self.rows.len() - 1];
        Table {
            span: Span {
                start: first.span.start,
                end: last.span.end + last.eol_len,
            },
            alignments,
            head,
            separator: separator_section,
            body,
        }
    }

    fn assemble_row(
        &self,
        line: &RowLine,
        row_index: usize,
        alignments: &[Option<super::align::Alignment>],
        separator_columns: usize,
        resolver: &mut dyn InlineResolver,
    ) -> Row {
        let segments = split(
            &line.text,
            line.span.start,
            self.options.column_spans,
            true,
        );
        let row_cells = count_cells(&segments);

        // Per-row column count, reconciled against the separator's target.
        let mut max_columns = row_cells;
        if self.options.discard_extra_columns && max_columns > separator_columns {
            max_columns = separator_columns;
        }
        if row_index >= self.separator_row
            && self.options.append_missing_columns
            && max_columns < separator_columns
        {
            max_columns = separator_columns;
        }

        let header = row_index < self.separator_row;
        let mut cursor = SegmentCursor::new(&segments);
        let mut cells = Vec::with_capacity(max_columns);

        for i in 0..max_columns {
            let alignment = alignments.get(i).copied().flatten();

            if i >= row_cells {
                // Synthesized trailing cell: empty-span sentinel, no markers.
                cells.push(Cell {
                    span: Span::EMPTY,
                    text: Span::EMPTY,
                    children: resolver.resolve(Span::EMPTY, ""),
                    alignment,
                    header,
                    opening_marker: Span::EMPTY,
                    closing_marker: Span::EMPTY,
                    col_span: 1,
                });
                continue;
            }

            let opening_marker = cursor.take_opening_marker();
            let span = cursor.take_cell().unwrap_or(Span::EMPTY);
            let markers = cursor.absorb_closing_markers(self.options.column_spans);

            let closing_marker = match (markers.first(), markers.last()) {
                (Some(first), Some(last)) => first.cover(*last),
                _ => Span::EMPTY,
            };
            let col_span = markers.len().max(1);

            let text = trim_span(&line.text, line.span.start, span);
            let content = if text.is_empty() {
                ""
            } else {
                &line.text[text.start - line.span.start..text.end - line.span.start]
            };

            cells.push(Cell {
                span,
                text,
                children: resolver.resolve(text, content),
                alignment,
                header,
                opening_marker,
                closing_marker,
                col_span,
            });
        }

        Row {
            span: line.span,
            cells,
        }
    }
}

/// Shrinks `span` to its whitespace-trimmed core within the row's text.
fn trim_span(text: &str, base: usize, span: Span) -> Span {
    if span == Span::EMPTY {
        return Span::EMPTY;
    }
    let raw = &text[span.start - base..span.end - base];
    let leading = raw.len() - raw.trim_start().len();
    let trailing = raw.len() - raw.trim_end().len();
    let start = span.start + leading;
    let end = span.end - trailing;
    if start >= end {
        // whitespace-only content
        Span { start, end: start }
    } else {
        Span { start, end }
    }
}
