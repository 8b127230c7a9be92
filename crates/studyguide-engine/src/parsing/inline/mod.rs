//! # Inline Parsing
//!
//! Cursor-based tokenizing of a single block's text into [`InlineNode`]s.
//!
//! ## Architecture
//!
//! Inline parsing is separate from block parsing: the block builder calls
//! [`tokenize`] on heading, blockquote, paragraph and list item text. Code
//! block text never reaches this module.
//!
//! The tokenizer tries five span parsers at each position, in a fixed
//! priority order: bold, underscore italic, asterisk italic, code, link.
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` enum (Text, Bold, Italic, Code, Link)
//! - **`kinds`**: Inline-specific types with owned delimiters
//! - **`cursor`**: `Cursor` for character-by-character scanning
//! - **`parser`**: `tokenize()` main entry point with `try_parse_*` helpers
//!
//! ## One Level Only
//!
//! Span content is kept verbatim: `**a _b_**` is a single `Bold("a _b_")`.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::tokenize;
pub use types::InlineNode;
