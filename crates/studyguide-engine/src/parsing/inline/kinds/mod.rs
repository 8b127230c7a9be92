//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Emphasis`**: `BOLD = "**"`, `ITALIC_UNDERSCORE = "_"`, `ITALIC_STAR = "*"`
//! - **`CodeSpan`**: `TICK = "\`"`
//! - **`Link`**: `OPEN = "["`, `MIDDLE = "]("`, `CLOSE = ")"`
//!
//! The parser calls these constants; it never hardcodes a delimiter.

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use link::Link;
