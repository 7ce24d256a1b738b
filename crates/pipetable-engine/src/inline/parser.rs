use crate::rope::span::Span;

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Escape},
    types::InlineNode,
};

/// Parses inline content into a sequence of [`InlineNode`]s.
///
/// # Arguments
/// - `base`: Byte offset in the rope where `s` begins (for absolute span positions)
/// - `s`: The string content to parse (typically a cell's trimmed text span)
///
/// # Raw Zone Precedence
/// Code spans are checked first and suppress all other parsing inside them:
/// `` `a\|b` `` is a code span containing a literal backslash.
///
/// # Returns
/// A vector of inline nodes covering the entire input. Text between special
/// constructs is emitted as `InlineNode::Text`.
pub fn parse_inline(base: usize, s: &str) -> Vec<InlineNode> {
    let mut cur = Cursor::new(s, base);
    let mut out = vec![];
    let mut text_start = cur.pos();

    // Helper to flush accumulated text as a Text node
    fn flush_text(out: &mut Vec<InlineNode>, start: usize, end: usize) {
        if end > start {
            out.push(InlineNode::Text(Span { start, end }));
        }
    }

    while !cur.eof() {
        // Try constructs in precedence order (code spans first = raw zone)
        if let Some(node) = try_parse_code_span(&mut cur) {
            flush_text(&mut out, text_start, node.span().start);
            text_start = node.span().end;
            out.push(node);
            continue;
        }
        if let Some(node) = try_parse_escape(&mut cur) {
            flush_text(&mut out, text_start, node.span().start);
            text_start = node.span().end;
            out.push(node);
            continue;
        }
        cur.bump();
    }

    flush_text(&mut out, text_start, cur.pos());
    out
}

/// Attempts to parse a code span starting at the current position.
///
/// Returns `None` if not at a backtick or if the code span isn't closed.
/// On failure, cursor position is restored.
fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.peek() != Some(CodeSpan::TICK) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump(); // `
    let inner_start = cur.pos();

    while !cur.eof() {
        if cur.peek() == Some(CodeSpan::TICK) {
            break;
        }
        cur.bump();
    }
    let inner_end = cur.pos();

    if cur.peek() != Some(CodeSpan::TICK) {
        // Not closed, restore cursor
        *cur = saved;
        return None;
    }
    cur.bump(); // closing `
    let end = cur.pos();

    Some(InlineNode::CodeSpan {
        full: Span { start, end },
        inner: Span {
            start: inner_start,
            end: inner_end,
        },
    })
}

/// Attempts to parse a backslash escape starting at the current position.
///
/// Only ASCII punctuation can be escaped; anything else leaves the
/// backslash as plain text.
fn try_parse_escape(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.peek() != Some(Escape::BACKSLASH) {
        return None;
    }
    let escaped = cur.peek_next()?;
    if !Escape::escapable(escaped) {
        return None;
    }

    let start = cur.pos();
    cur.bump_n(2); // backslash + escaped byte
    let end = cur.pos();

    Some(InlineNode::Escaped {
        full: Span { start, end },
        inner: Span {
            start: start + 1,
            end,
        },
    })
}
