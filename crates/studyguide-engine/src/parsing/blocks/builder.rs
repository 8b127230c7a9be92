use crate::parsing::{
    ParsedDoc,
    inline::tokenize,
    lines::{LineCursor, LineRef},
    span::Span,
};

use super::{
    classify::{LineClass, MarkdownLineClassifier},
    kinds::{CodeFence, FrontMatter, ListKind},
    types::{BlockNode, SourceBlock},
};

/// Single forward pass over the lines of a document.
///
/// Every loop works on the shared [`LineCursor`]: a block peeks at the next
/// line and bumps past it only when the line belongs to that block.
pub struct BlockBuilder<'a> {
    classifier: MarkdownLineClassifier,
    cursor: LineCursor<'a>,
    front_matter: Option<Span>,
    out: Vec<SourceBlock>,
}

impl<'a> BlockBuilder<'a> {
    pub fn new(document: &'a str) -> Self {
        Self {
            classifier: MarkdownLineClassifier,
            cursor: LineCursor::new(document),
            front_matter: None,
            out: vec![],
        }
    }

    pub fn finish(mut self) -> ParsedDoc {
        self.skip_front_matter();
        while let Some(line) = self.cursor.bump() {
            self.push(line);
        }
        ParsedDoc {
            front_matter: self.front_matter,
            blocks: self.out,
        }
    }

    fn skip_front_matter(&mut self) {
        let Some(open) = self.cursor.bump_if(|l| FrontMatter::is_delimiter(l.text)) else {
            return;
        };
        let mut span = open.span;
        while let Some(line) = self.cursor.bump() {
            span = span.cover(line.span);
            if FrontMatter::is_delimiter(line.text) {
                self.front_matter = Some(span);
                return;
            }
        }
        // Unterminated: the whole document was front matter.
        log::debug!("unterminated front matter, dropping {} bytes", span.len());
        self.front_matter = Some(span);
    }

    fn push(&mut self, line: LineRef<'a>) {
        match self.classifier.classify(line.text) {
            LineClass::Fence { info } => self.consume_fence(line, info),
            LineClass::Heading { level, text } => self.emit(
                BlockNode::Heading {
                    level,
                    inline: tokenize(text),
                },
                line.span,
            ),
            LineClass::Quote { text } => self.emit(
                BlockNode::Blockquote {
                    inline: tokenize(text),
                },
                line.span,
            ),
            LineClass::ListItem { kind, text } => self.consume_list(line, kind, text),
            LineClass::Text { text } => self.emit(
                BlockNode::Paragraph {
                    inline: tokenize(text),
                },
                line.span,
            ),
            LineClass::Blank => {}
        }
    }

    fn emit(&mut self, node: BlockNode, span: Span) {
        self.out.push(SourceBlock { node, span });
    }

    /// Raw zone: lines are taken verbatim until a closing fence or EOF.
    fn consume_fence(&mut self, open: LineRef<'a>, info: &str) {
        let mut span = open.span;
        let mut body = vec![];

        while let Some(line) = self.cursor.bump_if(|l| !CodeFence::closes(l.text)) {
            span = span.cover(line.span);
            body.push(line.text);
        }

        match self.cursor.bump() {
            Some(close) => span = span.cover(close.span),
            None => log::debug!("unterminated code fence at byte {}", open.span.start),
        }

        self.emit(
            BlockNode::CodeBlock {
                lang: CodeFence::lang(info),
                text: body.join("\n"),
            },
            span,
        );
    }

    /// Absorbs following item lines of the same kind; a blank line or a
    /// line of another kind ends the list without being consumed.
    fn consume_list(&mut self, first: LineRef<'a>, kind: ListKind, text: &str) {
        let mut span = first.span;
        let mut items = vec![tokenize(text)];

        while let Some(line) = self.cursor.peek() {
            let Some(item) = self.classifier.list_item_of(line.text, kind) else {
                break;
            };
            self.cursor.bump();
            span = span.cover(line.span);
            items.push(tokenize(item));
        }

        self.emit(
            BlockNode::List {
                ordered: kind.is_ordered(),
                items,
            },
            span,
        );
    }
}
