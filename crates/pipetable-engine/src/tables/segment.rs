use crate::rope::span::Span;

/// One piece of a segmented table line: either cell content or a single
/// literal `|` marker. Spans are absolute byte ranges into the rope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Cell(Span),
    Pipe(Span),
}

impl Segment {
    #[must_use]
    pub fn span(self) -> Span {
        match self {
            Segment::Cell(sp) | Segment::Pipe(sp) => sp,
        }
    }

    #[must_use]
    pub fn is_cell(self) -> bool {
        matches!(self, Segment::Cell(_))
    }
}

/// Splits one raw line into cell and (optionally) pipe-marker segments.
///
/// `base` is the absolute byte offset of `text` in the rope. The line is
/// trimmed first; a leading `|` is consumed (and emitted as a marker when
/// `want_pipes`). A backslash-escaped character, including `\|`, is ordinary
/// content and never closes a cell; the escape itself stays in the cell
/// because unescaping happens during inline resolution.
///
/// With `column_spans` set, an empty run between two pipes emits no cell
/// segment, so `||` collapses into consecutive markers instead of an empty
/// column. A trailing bare pipe contributes nothing further.
///
/// The same routine serves full splitting (`want_pipes = true`) and plain
/// segment counting for alignment and column-count purposes
/// (`want_pipes = false`, `column_spans = false`).
pub fn split(text: &str, base: usize, column_spans: bool, want_pipes: bool) -> Vec<Segment> {
    let trim_start = text.len() - text.trim_start().len();
    let line = text.trim();
    let base = base + trim_start;
    let bytes = line.as_bytes();
    let mut segments = Vec::new();

    let mut pos = 0;
    if bytes.first() == Some(&b'|') {
        if want_pipes {
            segments.push(Segment::Pipe(Span {
                start: base,
                end: base + 1,
            }));
        }
        pos = 1;
    }

    let mut escape = false;
    let mut last_pos = pos;
    let mut cell_chars = 0usize;
    for i in pos..bytes.len() {
        let c = bytes[i];
        if escape {
            escape = false;
            cell_chars += 1;
        } else {
            match c {
                b'\\' => {
                    escape = true;
                    cell_chars += 1;
                }
                b'|' => {
                    if !column_spans || last_pos < i {
                        segments.push(Segment::Cell(Span {
                            start: base + last_pos,
                            end: base + i,
                        }));
                    }
                    if want_pipes {
                        segments.push(Segment::Pipe(Span {
                            start: base + i,
                            end: base + i + 1,
                        }));
                    }
                    last_pos = i + 1;
                    cell_chars = 0;
                }
                _ => cell_chars += 1,
            }
        }
    }

    if cell_chars > 0 {
        segments.push(Segment::Cell(Span {
            start: base + last_pos,
            end: base + bytes.len(),
        }));
    }

    segments
}

/// Counts true cell segments, markers excluded.
#[must_use]
pub fn count_cells(segments: &[Segment]) -> usize {
    segments.iter().filter(|s| s.is_cell()).count()
}
