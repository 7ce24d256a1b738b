use crate::rope::span::Span;

use super::classify::LineClass;

/// One accumulated paragraph line, EOL excluded from the span.
#[derive(Debug, Clone)]
pub struct ParaLine {
    pub span: Span,
    pub text: String,
    pub eol_len: usize,
}

/// Transient paragraph accumulation state.
///
/// Doubles as the table trigger's lookback: its lines become header rows if
/// a separator line follows, and `non_table` memoizes a confirmed negative
/// trigger outcome so the lookback is not re-examined on every later line.
#[derive(Debug, Clone)]
pub struct ParagraphState {
    pub lines: Vec<ParaLine>,
    /// Set once the trigger has proven this paragraph can never head a table.
    pub non_table: bool,
    content_start: usize,
    last_line_end: usize,
}

impl ParagraphState {
    pub fn new(c: &LineClass) -> Self {
        ParagraphState {
            lines: vec![ParaLine {
                span: c.text_span(),
                text: c.text.clone(),
                eol_len: c.eol_len,
            }],
            non_table: false,
            content_start: c.line.start + c.scan,
            last_line_end: c.line.end,
        }
    }

    pub fn push_line(&mut self, c: &LineClass) {
        self.lines.push(ParaLine {
            span: c.text_span(),
            text: c.text.clone(),
            eol_len: c.eol_len,
        });
        self.last_line_end = c.line.end;
    }

    /// Full span of the paragraph, trailing EOL included.
    #[must_use]
    pub fn span(&self) -> Span {
        Span {
            start: self.lines[0].span.start,
            end: self.last_line_end,
        }
    }

    /// Content span (excludes leading indent of the first line).
    #[must_use]
    pub fn content_span(&self) -> Span {
        Span {
            start: self.content_start,
            end: self.last_line_end,
        }
    }
}
