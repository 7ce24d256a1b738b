//! Pipe table block parsing with lossless source spans.
//!
//! The engine scans a document line by line, accumulating paragraphs until a
//! table separator line confirms a pipe table; the paragraph folds into the
//! table's header rows and the table tree (head/separator/body sections,
//! rows, cells with alignment, column spans and pipe-marker spans) is
//! assembled in one pass at block close. Everything carries byte spans into
//! the rope, so any node slices back to its exact source text.

pub mod blocks;
pub mod inline;
pub mod rope;
pub mod tables;

#[cfg(test)]
mod tests;

pub use blocks::{Block, ParagraphBlock};
pub use inline::{InlineNode, InlineResolver, MarkdownInline};
pub use rope::Span;
pub use tables::{Alignment, Cell, Row, Section, SectionKind, Table, TableOptions};

use pipetable_config::Config;
use xi_rope::Rope;

use blocks::{BlockBuilder, LineClassifier};
use rope::lines_with_spans;

/// A parsed document: paragraphs and tables in source order.
#[derive(Debug)]
pub struct ParsedDoc {
    pub blocks: Vec<Block>,
}

impl ParsedDoc {
    /// Convenience accessor over just the tables.
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Table(t) => Some(t),
            _ => None,
        })
    }
}

/// Parses a document with options derived from the configuration store and
/// the built-in markdown inline resolver.
pub fn parse_document(rope: &Rope, config: &Config) -> ParsedDoc {
    let options = TableOptions::from(&config.tables);
    let mut resolver = MarkdownInline;
    parse_document_with(rope, options, &mut resolver)
}

/// Parses a document with explicit options and a custom inline collaborator.
///
/// `options` is an immutable snapshot for the whole parse; it is never
/// consulted mutably once parsing has begun.
pub fn parse_document_with(
    rope: &Rope,
    options: TableOptions,
    resolver: &mut dyn InlineResolver,
) -> ParsedDoc {
    let classifier = LineClassifier;
    let mut builder = BlockBuilder::new(options, resolver);

    for lr in lines_with_spans(rope) {
        let lc = classifier.classify(&lr);
        builder.push(&lc);
    }

    ParsedDoc {
        blocks: builder.finish(),
    }
}
