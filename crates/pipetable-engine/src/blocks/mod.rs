//! # Block Scanning
//!
//! A minimal line-driven block engine: the host side of the table extension.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified into a
//!    `LineClass` containing local facts (span, EOL length, blank status,
//!    scan index past leading indent)
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` accumulates
//!    paragraph lines, consults the table trigger on every non-blank line,
//!    and drives an open table parser's continuation protocol
//!
//! ## Key Invariants
//!
//! - A table start folds the in-progress paragraph into the table header
//!   (the paragraph block is never emitted)
//! - The paragraph's `non_table` flag memoizes a confirmed negative trigger
//!   outcome so repeated lookback checks stay O(1)
//! - All block nodes store byte spans into the rope

pub mod builder;
pub mod classify;
pub mod paragraph;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LineClassifier};
pub use paragraph::ParagraphState;
pub use types::{Block, ParagraphBlock};
