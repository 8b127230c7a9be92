use serde::Serialize;

/// A run of inline content.
///
/// One level only: the content of a styled span is plain text and is never
/// tokenized again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum InlineNode {
    /// Plain text that isn't part of any span.
    Text(String),
    /// `**bold**`
    Bold(String),
    /// `_italic_` or `*italic*`
    Italic(String),
    /// `` `code` ``
    Code(String),
    /// `[text](href)`
    Link { text: String, href: String },
}
