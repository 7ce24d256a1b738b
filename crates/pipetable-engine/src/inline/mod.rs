//! # Inline Resolution
//!
//! Cursor-based inline parsing with explicit raw zones.
//!
//! ## Architecture
//!
//! Inline resolution is separate from block parsing: the table assembler
//! hands each cell's trimmed text span to an [`InlineResolver`] once the
//! cell's span is finalized. [`MarkdownInline`] is the default resolver;
//! hosts with their own inline pipeline implement the trait instead.
//!
//! The parser uses a cursor over the cell text:
//! - Code spans are raw zones suppressing all other parsing inside them
//! - Backslash escapes (such as the `\|` the segmenter left intact) become
//!   explicit `Escaped` nodes so renderers can drop the backslash
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` enum (Text, CodeSpan, Escaped)
//! - **`kinds`**: inline-specific types owning their syntax delimiters
//! - **`cursor`**: `Cursor` for byte-wise parsing with position tracking
//! - **`parser`**: `parse_inline()` entry point with `try_parse_*` helpers

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::InlineNode;

use crate::rope::span::Span;

/// Collaborator producing a cell's child nodes from its trimmed text.
///
/// `text` is the absolute span of `source` in the rope; implementations must
/// emit nodes whose spans fall inside it. Called once per cell.
pub trait InlineResolver {
    fn resolve(&mut self, text: Span, source: &str) -> Vec<InlineNode>;
}

/// Default resolver: the built-in markdown inline parser.
#[derive(Debug, Default)]
pub struct MarkdownInline;

impl InlineResolver for MarkdownInline {
    fn resolve(&mut self, text: Span, source: &str) -> Vec<InlineNode> {
        parse_inline(text.start, source)
    }
}
