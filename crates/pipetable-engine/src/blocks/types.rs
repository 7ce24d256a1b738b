use crate::rope::span::Span;
use crate::tables::tree::Table;

/// A paragraph block: the default leaf when no other block opener matches.
#[derive(Debug, Clone)]
pub struct ParagraphBlock {
    /// Full byte span of the block including trailing EOL.
    pub span: Span,
    /// Content span (excludes leading indent of the first line).
    pub content_span: Span,
}

/// A parsed top-level block.
#[derive(Debug, Clone)]
pub enum Block {
    Paragraph(ParagraphBlock),
    Table(Table),
}

impl Block {
    /// Full byte span of the block.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Block::Paragraph(p) => p.span,
            Block::Table(t) => t.span,
        }
    }
}
