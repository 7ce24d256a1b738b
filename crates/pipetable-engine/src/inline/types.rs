use crate::rope::span::Span;

/// A parsed inline node with byte spans into the rope.
///
/// All variants store spans rather than text, enabling lossless round-trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    /// Plain text that isn't part of any special construct.
    Text(Span),
    /// A code span (backtick-delimited). This is a "raw zone" - no parsing inside.
    CodeSpan {
        /// Full span including backticks.
        full: Span,
        /// Inner span (content between backticks).
        inner: Span,
    },
    /// A backslash-escaped punctuation character such as `\|`.
    Escaped {
        /// Full span including the backslash.
        full: Span,
        /// Span of the escaped character itself.
        inner: Span,
    },
}

impl InlineNode {
    /// Full span of the node.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            InlineNode::Text(sp) => *sp,
            InlineNode::CodeSpan { full, .. } | InlineNode::Escaped { full, .. } => *full,
        }
    }
}
