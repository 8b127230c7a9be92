use serde::Serialize;

use crate::parsing::{inline::InlineNode, span::Span};

/// A block of the render tree.
///
/// Closed set: a presentation layer matching on this enum is checked for
/// exhaustiveness by the compiler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum BlockNode {
    /// `#` through `####` heading.
    Heading {
        /// 1 through 4.
        level: u8,
        inline: Vec<InlineNode>,
    },
    /// Fenced code, raw: no inline parsing inside.
    CodeBlock {
        /// Info string of the opening fence, if any.
        lang: Option<String>,
        /// Lines between the fences joined with `\n`.
        text: String,
    },
    /// A single `>` line.
    Blockquote { inline: Vec<InlineNode> },
    /// Consecutive item lines of one list kind.
    List {
        ordered: bool,
        /// One inline sequence per item line.
        items: Vec<Vec<InlineNode>>,
    },
    /// Any other non-blank line.
    Paragraph { inline: Vec<InlineNode> },
}

/// A block node paired with the byte span of the source lines it consumed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceBlock {
    pub node: BlockNode,
    /// From the start of the first consumed line to the end of the last.
    pub span: Span,
}
