use super::span::Span;

/// A reference to a single line of the document with its byte span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRef<'a> {
    /// Byte span of the line text (excludes the line terminator).
    pub span: Span,
    /// The line text without its `\n` or `\r\n` terminator.
    pub text: &'a str,
}

/// Returns an iterator over lines with their byte spans.
///
/// Splits on `\n` only, so the empty document yields one empty line and a
/// trailing newline yields a final empty line. A `\r` left at the end of a
/// line is dropped from both text and span.
pub fn lines_with_spans(document: &str) -> impl Iterator<Item = LineRef<'_>> {
    let mut offset = 0usize;
    document.split('\n').map(move |raw| {
        let start = offset;
        offset += raw.len() + 1;
        let text = raw.strip_suffix('\r').unwrap_or(raw);
        LineRef {
            span: Span {
                start,
                end: start + text.len(),
            },
            text,
        }
    })
}

/// A forward-only cursor over the lines of a document.
///
/// Block loops peek at the next line to decide whether it belongs to the
/// block under construction and only then bump past it.
#[derive(Debug, Clone)]
pub struct LineCursor<'a> {
    lines: Vec<LineRef<'a>>,
    i: usize,
}

impl<'a> LineCursor<'a> {
    pub fn new(document: &'a str) -> Self {
        Self {
            lines: lines_with_spans(document).collect(),
            i: 0,
        }
    }

    /// Peeks at the current line without advancing.
    pub fn peek(&self) -> Option<LineRef<'a>> {
        self.lines.get(self.i).copied()
    }

    /// Advances by one line, returning the consumed line.
    pub fn bump(&mut self) -> Option<LineRef<'a>> {
        let line = self.peek()?;
        self.i += 1;
        Some(line)
    }

    /// Consumes the current line only if it satisfies `pred`.
    pub fn bump_if(&mut self, pred: impl FnOnce(&LineRef<'a>) -> bool) -> Option<LineRef<'a>> {
        match self.peek() {
            Some(line) if pred(&line) => self.bump(),
            _ => None,
        }
    }
}
