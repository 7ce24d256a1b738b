use crate::rope::span::Span;

use super::segment::split;

/// Cell alignment declared by colons in the separator line.
///
/// `None` (no colons) is represented as `Option::None` at use sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
}

/// Derives one alignment per declared column from the separator line.
///
/// Computed once per table and indexed positionally against every row;
/// columns beyond the separator's count resolve to `None`.
pub fn parse_alignments(separator_text: &str, base: usize) -> Vec<Option<Alignment>> {
    split(separator_text, base, false, false)
        .iter()
        .map(|seg| {
            let sp = seg.span();
            let part = separator_text[sp.start - base..sp.end - base].trim();
            alignment_of(part.starts_with(':'), part.ends_with(':'))
        })
        .collect()
}

fn alignment_of(left: bool, right: bool) -> Option<Alignment> {
    match (left, right) {
        (true, true) => Some(Alignment::Center),
        (true, false) => Some(Alignment::Left),
        (false, true) => Some(Alignment::Right),
        (false, false) => None,
    }
}
