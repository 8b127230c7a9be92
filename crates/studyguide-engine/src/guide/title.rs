use std::sync::OnceLock;

use regex::Regex;

fn title_regex() -> &'static Regex {
    static TITLE_REGEX: OnceLock<Regex> = OnceLock::new();
    TITLE_REGEX.get_or_init(|| {
        Regex::new(r"(?m)^title:[^\S\n]*(.*)$").expect("Invalid title regex")
    })
}

/// Display title for a generated guide.
///
/// Takes the first `title:` line anywhere in the text (normally inside the
/// front matter), trimmed and unquoted. Falls back to `fallback` when no
/// non-empty title exists.
pub fn guide_title(guide: &str, fallback: &str) -> String {
    title_regex()
        .captures(guide)
        .and_then(|c| c.get(1))
        .map(|m| unquote(m.as_str().trim()))
        .filter(|t| !t.is_empty())
        .unwrap_or(fallback.trim())
        .to_string()
}

fn unquote(s: &str) -> &str {
    ['"', '\'']
        .iter()
        .find_map(|q| s.strip_prefix(*q).and_then(|rest| rest.strip_suffix(*q)))
        .unwrap_or(s)
}
