use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis, Link},
    types::InlineNode,
};

type SpanParser = fn(&mut Cursor<'_>) -> Option<InlineNode>;

/// Span parsers in priority order. At each position the first parser that
/// matches wins, so bold shadows single-asterisk italic.
const SPAN_PARSERS: [SpanParser; 5] = [
    try_parse_bold,
    try_parse_italic_underscore,
    try_parse_italic_star,
    try_parse_code_span,
    try_parse_link,
];

/// Tokenizes inline content into a sequence of [`InlineNode`]s.
///
/// Scans left to right; the earliest position where any span matches starts
/// the next node, text before it becomes a `Text` run. Unterminated markup
/// never matches and stays in the surrounding text.
///
/// # Returns
/// Nodes covering the entire input in order. Empty input yields no nodes and
/// no `Text` node is ever empty.
pub fn tokenize(s: &str) -> Vec<InlineNode> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = cur.pos();

    fn flush_text(out: &mut Vec<InlineNode>, text: &str) {
        if !text.is_empty() {
            out.push(InlineNode::Text(text.to_string()));
        }
    }

    while !cur.eof() {
        let start = cur.pos();
        if let Some(node) = SPAN_PARSERS.iter().find_map(|parse| parse(&mut cur)) {
            flush_text(&mut out, &s[text_start..start]);
            text_start = cur.pos();
            out.push(node);
            continue;
        }
        cur.bump();
    }

    flush_text(&mut out, &s[text_start..]);
    out
}

/// Scans `open`, then the shortest non-empty content followed by `close`,
/// all on the current line.
///
/// Returns the content and advances past `close`; on failure the cursor is
/// left untouched.
fn scan_delimited<'a>(cur: &mut Cursor<'a>, open: &str, close: &str) -> Option<&'a str> {
    if !cur.starts_with(open) {
        return None;
    }
    let body = &cur.rest_of_line()[open.len()..];
    let first = body.chars().next()?;
    let from = first.len_utf8();
    let end = from + body[from..].find(close)?;

    cur.bump_n(open.len() + end + close.len());
    Some(&body[..end])
}

fn try_parse_bold(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    scan_delimited(cur, Emphasis::BOLD, Emphasis::BOLD).map(|s| InlineNode::Bold(s.to_string()))
}

fn try_parse_italic_underscore(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    scan_delimited(cur, Emphasis::ITALIC_UNDERSCORE, Emphasis::ITALIC_UNDERSCORE)
        .map(|s| InlineNode::Italic(s.to_string()))
}

fn try_parse_italic_star(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    scan_delimited(cur, Emphasis::ITALIC_STAR, Emphasis::ITALIC_STAR)
        .map(|s| InlineNode::Italic(s.to_string()))
}

fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    scan_delimited(cur, CodeSpan::TICK, CodeSpan::TICK).map(|s| InlineNode::Code(s.to_string()))
}

/// Attempts to parse `[text](href)` at the current position.
///
/// Text ends at the first `](` and href at the first `)` after it; either
/// may be empty.
fn try_parse_link(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if !cur.starts_with(Link::OPEN) {
        return None;
    }
    let body = &cur.rest_of_line()[Link::OPEN.len()..];
    let mid = body.find(Link::MIDDLE)?;
    let after = &body[mid + Link::MIDDLE.len()..];
    let close = after.find(Link::CLOSE)?;

    let node = InlineNode::Link {
        text: body[..mid].to_string(),
        href: after[..close].to_string(),
    };
    cur.bump_n(Link::OPEN.len() + mid + Link::MIDDLE.len() + close + Link::CLOSE.len());
    Some(node)
}
