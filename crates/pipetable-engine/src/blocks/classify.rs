use crate::rope::{lines::LineRef, span::Span};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context.
#[derive(Debug, Clone)]
pub struct LineClass {
    /// Full byte span of this line in the rope, EOL included.
    pub line: Span,
    /// Length in bytes of the line terminator (0 for the last line).
    pub eol_len: usize,
    /// Whether the line is blank (whitespace only).
    pub is_blank: bool,
    /// Byte offset into `text` where content starts (past leading indent).
    pub scan: usize,
    /// The line text with the EOL stripped.
    pub text: String,
}

impl LineClass {
    /// Span of the line without its EOL.
    #[must_use]
    pub fn text_span(&self) -> Span {
        Span {
            start: self.line.start,
            end: self.line.end - self.eol_len,
        }
    }
}

/// Classifies individual lines for the block parsing phase.
pub struct LineClassifier;

impl LineClassifier {
    /// Classifies a line into a [`LineClass`] containing local facts.
    pub fn classify(&self, lr: &LineRef) -> LineClass {
        let trimmed = lr.text.trim_end_matches(['\r', '\n']);
        let eol_len = lr.text.len() - trimmed.len();
        let is_blank = trimmed.trim().is_empty();
        let scan = trimmed.len() - trimmed.trim_start().len();

        LineClass {
            line: lr.span,
            eol_len,
            is_blank,
            scan,
            text: trimmed.to_string(),
        }
    }
}
