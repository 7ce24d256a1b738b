use crate::inline::InlineResolver;
use crate::tables::{options::TableOptions, parser::TableParser, trigger};

use super::{
    classify::LineClass,
    paragraph::ParagraphState,
    types::{Block, ParagraphBlock},
};

#[derive(Debug)]
enum LeafState {
    None,
    Paragraph(ParagraphState),
    Table(TableParser),
}

/// State machine over classified lines emitting [`Block`]s.
///
/// Tables open through the trigger, which may fold an in-progress paragraph
/// into the table header (the paragraph is replaced, not emitted). An open
/// table consumes any line containing a pipe; the first non-continuing line
/// closes it and is then re-examined as a fresh block candidate.
pub struct BlockBuilder<'r> {
    options: TableOptions,
    resolver: &'r mut dyn InlineResolver,
    leaf: LeafState,
    out: Vec<Block>,
}

impl<'r> BlockBuilder<'r> {
    pub fn new(options: TableOptions, resolver: &'r mut dyn InlineResolver) -> Self {
        Self {
            options,
            resolver,
            leaf: LeafState::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass) {
        if let LeafState::Table(table) = &mut self.leaf {
            if table.try_continue(c) {
                table.add_line(c);
                return;
            }
            // Block over; fall through and re-examine this line.
            self.flush_table();
        }

        if c.is_blank {
            self.flush_paragraph();
            return;
        }

        let lookback = match &mut self.leaf {
            LeafState::Paragraph(p) => Some(p),
            _ => None,
        };
        if let Some(mut table) = trigger::try_start(c, lookback, self.options) {
            // Replaces any in-progress paragraph: its lines are already
            // seeded into the table parser as header rows. The current line
            // is the separator and is consumed at the same index.
            table.add_line(c);
            self.leaf = LeafState::Table(table);
            return;
        }

        self.extend_paragraph(c);
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush
        self.flush_paragraph();
        self.flush_table();
        self.out
    }

    fn extend_paragraph(&mut self, c: &LineClass) {
        match &mut self.leaf {
            LeafState::Paragraph(p) => p.push_line(c),
            _ => self.leaf = LeafState::Paragraph(ParagraphState::new(c)),
        }
    }

    fn flush_paragraph(&mut self) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        if let LeafState::Paragraph(p) = prev {
            self.out.push(Block::Paragraph(ParagraphBlock {
                span: p.span(),
                content_span: p.content_span(),
            }));
        } else {
            self.leaf = prev; // put back non-paragraph leaf (e.g. table)
        }
    }

    fn flush_table(&mut self) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        if let LeafState::Table(table) = prev {
            self.out.push(Block::Table(table.close(&mut *self.resolver)));
        } else {
            self.leaf = prev;
        }
    }
}
