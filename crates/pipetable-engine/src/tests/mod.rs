//! Integration tests for table detection and assembly.
//!
//! Each test parses a small document end to end and asserts on the resulting
//! block list; `invariants::check` runs over every parse.


use pretty_assertions::assert_eq;
use rstest::rstest;
use xi_rope::Rope;

use crate::blocks::Block;
use crate::inline::{InlineNode, MarkdownInline};
use crate::rope::{slice_to_string, span::Span};
use crate::tables::{Alignment, Row, Table, TableOptions};
use crate::{ParsedDoc, parse_document_with};

fn parse(md: &str, options: TableOptions) -> ParsedDoc {
    let rope = Rope::from(md);
    let mut resolver = MarkdownInline;
    let doc = parse_document_with(&rope, options, &mut resolver);
    invariants::check(&rope, &doc);
    doc
}

fn only_table(doc: &ParsedDoc) -> &Table {
    let tables: Vec<&Table> = doc.tables().collect();
    assert_eq!(tables.len(), 1, "expected exactly one table");
    tables[0]
}

fn cell_texts<'a>(md: &'a str, row: &Row) -> Vec<&'a str> {
    row.cells
        .iter()
        .map(|c| &md[c.text.start..c.text.end])
        .collect()
}

// Scenario: plain two-column table

#[test]
fn header_separator_and_empty_body() {
    let md = "A | B\n--- | ---:\n";
    let doc = parse(md, TableOptions::default());
    let table = only_table(&doc);

    assert_eq!(table.head.rows.len(), 1);
    assert_eq!(cell_texts(md, &table.head.rows[0]), vec!["A", "B"]);
    assert!(table.head.rows[0].cells.iter().all(|c| c.header));
    assert_eq!(table.alignments, vec![None, Some(Alignment::Right)]);
    // body present but empty
    assert!(table.body.rows.is_empty());
}

// Scenario: single-column disambiguation against setext underlines

#[test]
fn single_column_with_pipes_is_a_table() {
    let md = "|A|\n|---|\n";
    let doc = parse(md, TableOptions::default());
    let table = only_table(&doc);
    assert_eq!(table.separator_columns(), 1);
    assert_eq!(cell_texts(md, &table.head.rows[0]), vec!["A"]);
}

#[test]
fn single_column_without_pipes_is_not_a_table() {
    let md = "A\n---\n";
    let doc = parse(md, TableOptions::default());
    assert_eq!(doc.tables().count(), 0);
    assert_eq!(doc.blocks.len(), 1);
    assert!(matches!(doc.blocks[0], Block::Paragraph(_)));
}

// Scenario: column spans

#[test]
fn adjacent_pipes_become_a_column_span() {
    let md = "a | b | c\n---|---|---\nA || B\n";
    let doc = parse(md, TableOptions::default());
    let table = only_table(&doc);

    let row = &table.body.rows[0];
    assert_eq!(cell_texts(md, row), vec!["A", "B"]);

    let a = &row.cells[0];
    assert_eq!(a.col_span, 2);
    // merged closing marker covers exactly the "||" pair
    assert_eq!(&md[a.closing_marker.start..a.closing_marker.end], "||");
    assert_eq!(a.closing_marker.len(), a.col_span);

    let b = &row.cells[1];
    assert_eq!(b.col_span, 1);
}

#[test]
fn spans_disabled_keep_empty_cells() {
    let options = TableOptions {
        column_spans: false,
        ..TableOptions::default()
    };
    let md = "a | b | c\n---|---|---\nA || B\n";
    let doc = parse(md, options);
    let table = only_table(&doc);

    let row = &table.body.rows[0];
    assert_eq!(cell_texts(md, row), vec!["A", "", "B"]);
    assert!(row.cells.iter().all(|c| c.col_span == 1));
}

// Scenario: column reconciliation policies

#[test]
fn append_missing_columns_synthesizes_empty_cells() {
    let options = TableOptions {
        append_missing_columns: true,
        ..TableOptions::default()
    };
    let md = "a | b | c\n---|---|---\nX | Y\n";
    let doc = parse(md, options);
    let table = only_table(&doc);

    let row = &table.body.rows[0];
    assert_eq!(row.cells.len(), 3);
    assert_eq!(cell_texts(md, row), vec!["X", "Y", ""]);
    // synthesized cell carries the empty-span sentinel and no markers
    let synthesized = &row.cells[2];
    assert_eq!(synthesized.span, Span::EMPTY);
    assert_eq!(synthesized.opening_marker, Span::EMPTY);
    assert_eq!(synthesized.closing_marker, Span::EMPTY);
    assert!(synthesized.children.is_empty());
}

#[test]
fn discard_extra_columns_clamps_long_rows() {
    let options = TableOptions {
        discard_extra_columns: true,
        ..TableOptions::default()
    };
    let md = "a | b\n--- | ---\nX | Y | Z | W\n";
    let doc = parse(md, options);
    let table = only_table(&doc);

    let row = &table.body.rows[0];
    assert_eq!(cell_texts(md, row), vec!["X", "Y"]);
}

#[rstest]
#[case::short_row_kept("X | Y\n", false, false, 2)]
#[case::short_row_padded("X | Y\n", false, true, 3)]
#[case::long_row_kept("a|b|c|d|e\n", false, false, 5)]
#[case::long_row_clamped("a|b|c|d|e\n", true, false, 3)]
#[case::clamp_and_pad_agree("a|b|c|d|e\n", true, true, 3)]
#[case::exact_row_untouched("x|y|z\n", true, true, 3)]
fn per_row_column_count_follows_policy(
    #[case] body_row: &str,
    #[case] discard_extra_columns: bool,
    #[case] append_missing_columns: bool,
    #[case] expected: usize,
) {
    let options = TableOptions {
        discard_extra_columns,
        append_missing_columns,
        ..TableOptions::default()
    };
    let md = format!("h | h | h\n---|---|---\n{body_row}");
    let doc = parse(&md, options);
    let table = only_table(&doc);
    assert_eq!(table.body.rows[0].cells.len(), expected);
}

#[test]
fn header_rows_are_never_padded() {
    let options = TableOptions {
        append_missing_columns: true,
        ..TableOptions::default()
    };
    let md = "just | one\n---|---|---\nX\n";
    let doc = parse(md, options);
    let table = only_table(&doc);

    // padding applies to body rows only
    assert_eq!(table.head.rows[0].cells.len(), 2);
    assert_eq!(table.body.rows[0].cells.len(), 3);
}

// Scenario: escaped pipes

#[test]
fn escaped_pipe_stays_in_one_cell() {
    let md = "a | b\n--- | ---\nA\\|B | C\n";
    let doc = parse(md, TableOptions::default());
    let table = only_table(&doc);

    let row = &table.body.rows[0];
    assert_eq!(cell_texts(md, row), vec!["A\\|B", "C"]);

    // the escape resolves during inline parsing
    let children = &row.cells[0].children;
    assert!(
        children
            .iter()
            .any(|n| matches!(n, InlineNode::Escaped { .. })),
        "expected an Escaped node, got {children:?}"
    );
}

#[test]
fn doubled_backslash_does_not_escape_the_pipe() {
    let md = "a | b\n--- | ---\nA\\\\|B\n";
    let doc = parse(md, TableOptions::default());
    let table = only_table(&doc);
    assert_eq!(cell_texts(md, &table.body.rows[0]), vec!["A\\\\", "B"]);
}

// Alignment

#[test]
fn alignment_is_positional_with_none_overflow() {
    let md = "a | b | c\n:--- | :---: | ---:\np | q | r | s | t\n";
    let doc = parse(md, TableOptions::default());
    let table = only_table(&doc);

    let row = &table.body.rows[0];
    assert_eq!(row.cells.len(), 5);
    let alignments: Vec<Option<Alignment>> = row.cells.iter().map(|c| c.alignment).collect();
    assert_eq!(
        alignments,
        vec![
            Some(Alignment::Left),
            Some(Alignment::Center),
            Some(Alignment::Right),
            None,
            None,
        ]
    );
}

// Source reconstruction (markers + raw content reproduce the trimmed line)

#[test]
fn markers_and_content_reproduce_source_lines() {
    let options = TableOptions {
        column_spans: false,
        ..TableOptions::default()
    };
    let md = "| A | B |\n|---|---|\n| C \\| D | E |\nX|Y\n|| F |\n";
    let doc = parse(md, options);
    let table = only_table(&doc);

    for row in table.rows() {
        let mut rebuilt = String::new();
        for cell in &row.cells {
            for sp in [cell.opening_marker, cell.span, cell.closing_marker] {
                rebuilt.push_str(&md[sp.start..sp.end]);
            }
        }
        let source = md[row.span.start..row.span.end].trim();
        assert_eq!(rebuilt, source, "row did not round-trip");
    }
}

// Trigger behavior through the whole engine

#[test]
fn paragraph_folds_into_table_header() {
    let md = "before\n\nA | B\n--- | ---\n1 | 2\n";
    let doc = parse(md, TableOptions::default());

    // the "A | B" paragraph must not be emitted separately
    assert_eq!(doc.blocks.len(), 2);
    assert!(matches!(doc.blocks[0], Block::Paragraph(_)));
    assert!(matches!(doc.blocks[1], Block::Table(_)));
}

#[test]
fn multi_row_headers_when_allowed() {
    let options = TableOptions {
        max_header_rows: 3,
        ..TableOptions::default()
    };
    let md = "A | B\nC | D\n--- | ---\n1 | 2\n";
    let doc = parse(md, options);
    let table = only_table(&doc);
    assert_eq!(table.head.rows.len(), 2);
    assert_eq!(table.body.rows.len(), 1);
}

#[test]
fn pipeless_header_line_blocks_the_table() {
    let md = "no pipes here\n--- | ---\nstill | paragraph\n";
    let doc = parse(md, TableOptions::default());
    assert_eq!(doc.tables().count(), 0);
}

#[test]
fn line_without_pipe_ends_the_block() {
    let md = "A | B\n--- | ---\n1 | 2\nplain text\n";
    let doc = parse(md, TableOptions::default());

    assert_eq!(doc.blocks.len(), 2);
    let table = only_table(&doc);
    assert_eq!(table.body.rows.len(), 1);
    assert!(matches!(doc.blocks[1], Block::Paragraph(_)));
}

#[test]
fn blank_line_ends_the_block() {
    let md = "A | B\n--- | ---\n\n1 | 2\n";
    let doc = parse(md, TableOptions::default());

    let table = only_table(&doc);
    assert!(table.body.rows.is_empty());
    // the trailing row becomes a paragraph of its own
    assert!(matches!(doc.blocks[1], Block::Paragraph(_)));
}

#[test]
fn arbitrary_trailing_content_never_fails_assembly() {
    let md = "a | b\n--- | ---\n| x | unbalanced ||| \\| junk\n";
    let doc = parse(md, TableOptions::default());
    let table = only_table(&doc);
    assert_eq!(table.body.rows.len(), 1);
}

// Spans and inline resolution

#[test]
fn table_span_covers_all_lines() {
    let md = "A | B\n--- | ---\n1 | 2\n";
    let doc = parse(md, TableOptions::default());
    let table = only_table(&doc);
    assert_eq!(table.span, Span {
        start: 0,
        end: md.len()
    });
    // row spans exclude the EOL
    assert_eq!(&md[table.head.rows[0].span.start..table.head.rows[0].span.end], "A | B");
}

#[test]
fn cell_content_resolves_inline_markup() {
    let md = "a | b\n--- | ---\n`code` | plain\n";
    let doc = parse(md, TableOptions::default());
    let table = only_table(&doc);

    let cell = &table.body.rows[0].cells[0];
    assert_eq!(cell.children.len(), 1);
    match cell.children[0] {
        InlineNode::CodeSpan { inner, .. } => {
            assert_eq!(slice_to_string(&Rope::from(md), inner), "code");
        }
        ref other => panic!("expected a code span, got {other:?}"),
    }
}

#[test]
fn empty_document_has_no_blocks() {
    let doc = parse("", TableOptions::default());
    assert!(doc.blocks.is_empty());
}
