//! # Pipe Tables
//!
//! GitHub-style pipe table recognition and assembly.
//!
//! ## Pipeline
//!
//! - **`trigger`**: decides from the current line and the paragraph lookback
//!   whether a table starts (separator grammar, header checks, memoization)
//! - **`parser`**: consumes pipe-bearing lines while the block stays
//!   table-like, then assembles the whole [`tree::Table`] in one pass at
//!   block close
//! - **`segment`**: splits one raw line into cell-content and pipe-marker
//!   spans, honoring backslash escapes and empty-cell collapsing
//! - **`align`**: derives one alignment per declared column from the
//!   separator line
//! - **`cursor`**: forward cursor over a segmented line with explicit
//!   marker-run absorption
//!
//! ## Column Reconciliation
//!
//! Each row's cell count is reconciled against the separator's declared
//! column count by three independent options: `discard_extra_columns` clamps
//! long rows, `append_missing_columns` pads short body rows with synthesized
//! empty cells, and neither policy ever fails: arbitrary content past the
//! last pipe is valid trailing cell text.

pub mod align;
pub mod cursor;
pub mod options;
pub mod parser;
pub mod segment;
pub mod tree;
pub mod trigger;

pub use align::Alignment;
pub use options::TableOptions;
pub use parser::TableParser;
pub use tree::{Cell, Row, Section, SectionKind, Table};
