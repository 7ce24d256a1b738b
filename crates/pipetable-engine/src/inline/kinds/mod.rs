//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! All delimiter constants live here, not scattered in parser code: the
//! parser calls these constants and never hardcodes `` ` `` or `\`.

pub mod code_span;
pub mod escape;

pub use code_span::CodeSpan;
pub use escape::Escape;
