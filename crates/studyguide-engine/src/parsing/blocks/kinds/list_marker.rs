use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

/// Which kind of list a marker line opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ListKind {
    /// `- item` or `* item`
    Unordered,
    /// `1. item`
    Ordered,
}

impl ListKind {
    pub fn is_ordered(self) -> bool {
        matches!(self, ListKind::Ordered)
    }
}

/// List item marker type with owned delimiter constants.
pub struct ListMarker;

impl ListMarker {
    pub const BULLETS: [&'static str; 2] = ["- ", "* "];

    fn ordered_regex() -> &'static Regex {
        static ORDERED_REGEX: OnceLock<Regex> = OnceLock::new();
        ORDERED_REGEX
            .get_or_init(|| Regex::new(r"^\s*[0-9]+\.\s").expect("Invalid ordered list regex"))
    }

    fn marker_regex() -> &'static Regex {
        static MARKER_REGEX: OnceLock<Regex> = OnceLock::new();
        MARKER_REGEX.get_or_init(|| {
            Regex::new(r"^\s*(?:-|\*|[0-9]+\.)\s").expect("Invalid list marker regex")
        })
    }

    /// Classifies `line` as a list item line, unordered taking precedence.
    pub fn kind(line: &str) -> Option<ListKind> {
        let trimmed = line.trim();
        if Self::BULLETS.iter().any(|b| trimmed.starts_with(b)) {
            Some(ListKind::Unordered)
        } else if Self::ordered_regex().is_match(line) {
            Some(ListKind::Ordered)
        } else {
            None
        }
    }

    /// Strips leading whitespace, the marker and one whitespace character.
    pub fn strip(line: &str) -> &str {
        match Self::marker_regex().find(line) {
            Some(m) => &line[m.end()..],
            None => line,
        }
    }
}
