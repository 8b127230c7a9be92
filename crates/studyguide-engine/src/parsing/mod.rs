pub mod blocks;
pub mod inline;
pub mod lines;
pub mod snapshot;
pub mod span;

#[cfg(test)]
mod tests;

use serde::Serialize;

pub use blocks::{BlockNode, SourceBlock};
pub use inline::InlineNode;
pub use span::Span;

use blocks::BlockBuilder;

/// The render tree of one document plus the source spans behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedDoc {
    /// Span of the leading front-matter block, delimiters included.
    pub front_matter: Option<Span>,
    pub blocks: Vec<SourceBlock>,
}

impl ParsedDoc {
    pub fn into_nodes(self) -> Vec<BlockNode> {
        self.blocks.into_iter().map(|b| b.node).collect()
    }
}

/// Parses a document, keeping the source span of every block.
///
/// Never fails: malformed markup degrades to plain text, an unterminated
/// fence runs to the end of the document, and unterminated front matter
/// swallows the whole document.
pub fn parse_document(document: &str) -> ParsedDoc {
    BlockBuilder::new(document).finish()
}

/// Segments a document into its render tree.
pub fn segment(document: &str) -> Vec<BlockNode> {
    parse_document(document).into_nodes()
}
