//! # Block Kinds
//!
//! Block-specific types that own their syntax delimiters. The classifier
//! asks these types; it never hardcodes `#`, `>` or a fence itself.

pub mod block_quote;
pub mod code_fence;
pub mod front_matter;
pub mod heading;
pub mod list_marker;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use front_matter::FrontMatter;
pub use heading::Heading;
pub use list_marker::{ListKind, ListMarker};
