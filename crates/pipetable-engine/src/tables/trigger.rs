use std::sync::OnceLock;

use regex::Regex;

use crate::blocks::classify::LineClass;
use crate::blocks::paragraph::ParagraphState;

use super::options::TableOptions;
use super::parser::TableParser;
use super::segment::{count_cells, split};

/// One separator column spec: optional whitespace, 3+ dash/colon characters,
/// with optional alignment colons at either end.
const COL: &str = r"(?:\s*-{3,}\s*|\s*:-{2,}\s*|\s*-{2,}:\s*|\s*:-{1,}:\s*)";

fn separator_regex() -> &'static Regex {
    static SEPARATOR: OnceLock<Regex> = OnceLock::new();
    SEPARATOR.get_or_init(|| {
        // For a single column, require at least one pipe, otherwise the line
        // is ambiguous with a setext heading underline.
        let pattern =
            format!(r"^(?:\|{COL}\|?\s*|{COL}\|\s*|\|?(?:{COL}\|)+{COL}\|?\s*)$");
        Regex::new(&pattern).expect("invalid separator regex")
    })
}

/// Returns true if `text` matches the header-separator grammar.
#[must_use]
pub fn is_separator_line(text: &str) -> bool {
    separator_regex().is_match(text)
}

/// Decides whether a table starts at the current line.
///
/// `lookback` is the in-progress paragraph whose lines would become the
/// table's header rows. Checks short-circuit in order: memoized negative,
/// header-row count bounds, pipe presence, separator grammar from the scan
/// index, non-degenerate split, and per-lookback-line header validation.
///
/// On success the returned parser is pre-seeded with the lookback lines as
/// already-consumed rows and expects the separator line next; the caller
/// replaces the paragraph with it. A lookback that matched the separator
/// grammar but failed header validation is memoized as confirmed non-table
/// so later lines skip it in O(1). Earlier failures are not memoized: a
/// valid separator can still arrive on a later line.
pub fn try_start(
    line: &LineClass,
    lookback: Option<&mut ParagraphState>,
    options: TableOptions,
) -> Option<TableParser> {
    if let Some(paragraph) = &lookback
        && paragraph.non_table
    {
        return None;
    }

    let header_rows = lookback.as_ref().map_or(0, |p| p.lines.len());
    if header_rows < options.min_header_rows || header_rows > options.max_header_rows {
        return None;
    }

    if !line.text.contains('|') {
        return None;
    }

    let separator_text = &line.text[line.scan..];
    if !is_separator_line(separator_text) {
        return None;
    }

    let separator_base = line.line.start + line.scan;
    let separator_parts = split(separator_text, separator_base, false, false);
    let separator_columns = count_cells(&separator_parts);
    if separator_columns == 0 {
        return None;
    }

    let mut parser = TableParser::new(options);

    if let Some(paragraph) = lookback {
        let all_headers = paragraph.lines.iter().all(|header| {
            if !header.text.contains('|') {
                return false;
            }
            if options.header_separator_columns {
                // separator must declare at least as many columns as any header row
                let header_parts = split(&header.text, header.span.start, false, false);
                if separator_columns < count_cells(&header_parts) {
                    return false;
                }
            }
            true
        });

        if !all_headers {
            // Remember the outcome so this paragraph isn't re-checked on
            // every subsequent line.
            paragraph.non_table = true;
            return None;
        }

        for header in &paragraph.lines {
            parser.seed_header_line(header.span, header.text.clone(), header.eol_len);
        }
    }

    parser.mark_next_separator();
    Some(parser)
}
