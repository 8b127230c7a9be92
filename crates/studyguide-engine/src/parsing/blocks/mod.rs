//! # Block Parsing
//!
//! Line-oriented segmentation of a document into [`BlockNode`]s.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified into a
//!    `LineClass` from local facts only (fence, heading, quote, list marker)
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` walks a line cursor,
//!    skips front matter, and groups fence and list lines into single blocks
//!
//! ## Modules
//!
//! - **`types`**: Render tree types (`BlockNode`, `SourceBlock`)
//! - **`kinds`**: Block-specific types with owned delimiters
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`builder`**: `BlockBuilder` forward pass over the lines
//!
//! ## Key Invariants
//!
//! - Blocks appear in document order
//! - Fenced code blocks are raw zones: no block/inline parsing inside
//! - A list never mixes ordered and unordered items

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
pub use kinds::ListKind;
pub use types::{BlockNode, SourceBlock};
