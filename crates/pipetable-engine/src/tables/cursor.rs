use crate::rope::span::Span;

use super::segment::Segment;

/// Forward cursor over a segmented line.
///
/// Cell assembly walks strictly left to right: an optional opening marker
/// run, the cell's content segment, then a run of closing-marker candidates.
/// Absorbed marker lists are returned as immutable snapshots; the cursor
/// itself never backtracks.
pub struct SegmentCursor<'a> {
    segments: &'a [Segment],
    idx: usize,
}

impl<'a> SegmentCursor<'a> {
    pub fn new(segments: &'a [Segment]) -> Self {
        Self { segments, idx: 0 }
    }

    fn peek(&self) -> Option<Segment> {
        self.segments.get(self.idx).copied()
    }

    /// Consumes a run of pipe markers sitting where content is expected and
    /// merges them into one opening-marker span. Empty when the cell starts
    /// directly with content (every cell but the first, in practice).
    pub fn take_opening_marker(&mut self) -> Span {
        let mut marker = Span::EMPTY;
        while let Some(Segment::Pipe(sp)) = self.peek() {
            marker = if marker.is_empty() { sp } else { marker.cover(sp) };
            self.idx += 1;
        }
        marker
    }

    /// Consumes the next segment if it is cell content.
    pub fn take_cell(&mut self) -> Option<Span> {
        match self.peek() {
            Some(Segment::Cell(sp)) => {
                self.idx += 1;
                Some(sp)
            }
            _ => None,
        }
    }

    /// Consumes consecutive pipe markers following a cell's content.
    ///
    /// With `multi` unset, at most one marker is absorbed (the ordinary
    /// closing pipe); with it set, the whole run is absorbed, which is how
    /// collapsed `||` runs become column spans.
    pub fn absorb_closing_markers(&mut self, multi: bool) -> Vec<Span> {
        let mut markers = Vec::new();
        while let Some(Segment::Pipe(sp)) = self.peek() {
            self.idx += 1;
            markers.push(sp);
            if !multi {
                break;
            }
        }
        markers
    }
}
