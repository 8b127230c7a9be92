use super::kinds::{BlockQuote, CodeFence, Heading, ListKind, ListMarker};

/// Classification of a single line containing only local facts.
///
/// Variants borrow the part of the line that becomes block content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Opening fence; carries the info string.
    Fence { info: &'a str },
    Heading { level: u8, text: &'a str },
    Quote { text: &'a str },
    ListItem { kind: ListKind, text: &'a str },
    Text { text: &'a str },
    Blank,
}

/// Classifies individual lines for the block segmenter.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line outside a code fence; first match wins.
    ///
    /// Precedence: fence, heading, blockquote, list item, text, blank.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        if let Some(info) = CodeFence::sig(line) {
            return LineClass::Fence { info };
        }
        if let Some((level, text)) = Heading::strip(line) {
            return LineClass::Heading { level, text };
        }
        if BlockQuote::matches(line) {
            return LineClass::Quote {
                text: BlockQuote::strip(line),
            };
        }
        if let Some(kind) = ListMarker::kind(line) {
            return LineClass::ListItem {
                kind,
                text: ListMarker::strip(line),
            };
        }
        if line.trim().is_empty() {
            return LineClass::Blank;
        }
        LineClass::Text { text: line }
    }

    /// Returns the item text if `line` is a list item of `kind`.
    pub fn list_item_of<'a>(&self, line: &'a str, kind: ListKind) -> Option<&'a str> {
        match self.classify(line) {
            LineClass::ListItem { kind: k, text } if k == kind => Some(text),
            _ => None,
        }
    }
}
