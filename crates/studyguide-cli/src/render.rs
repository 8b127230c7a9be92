//! Maps the render tree onto styled terminal lines.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use studyguide_engine::{BlockNode, InlineNode};

const HEADING_COLORS: [Color; 4] = [
    Color::Rgb(0xCB, 0xA6, 0xF7),
    Color::Rgb(0x89, 0xB4, 0xFA),
    Color::Rgb(0x94, 0xE2, 0xD5),
    Color::Rgb(0xFA, 0xB3, 0x87),
];
const QUOTE_BAR: Color = Color::Rgb(0x58, 0x5B, 0x70);
const QUOTE_TEXT: Color = Color::Rgb(0xA6, 0xAD, 0xC8);
const CODE_BLOCK: Color = Color::Rgb(0xA6, 0xE3, 0xA1);
const INLINE_CODE_FG: Color = Color::Rgb(0xF5, 0xC2, 0xE7);
const INLINE_CODE_BG: Color = Color::Rgb(0x45, 0x47, 0x5A);
const LINK: Color = Color::Rgb(0x94, 0xE2, 0xD5);

/// Renders blocks to lines, one blank line after each block.
pub fn render_blocks(blocks: &[BlockNode]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for block in blocks {
        match block {
            BlockNode::Heading { level, inline } => {
                lines.push(Line::from(inline_spans(inline, heading_style(*level))));
            }
            BlockNode::Paragraph { inline } => {
                lines.push(Line::from(inline_spans(inline, Style::default())));
            }
            BlockNode::Blockquote { inline } => {
                let quote = Style::default()
                    .fg(QUOTE_TEXT)
                    .add_modifier(Modifier::ITALIC);
                let mut spans = vec![Span::styled("│ ", Style::default().fg(QUOTE_BAR))];
                spans.extend(inline_spans(inline, quote));
                lines.push(Line::from(spans));
            }
            BlockNode::List { ordered, items } => {
                for (i, item) in items.iter().enumerate() {
                    let marker = if *ordered {
                        format!("{}. ", i + 1)
                    } else {
                        "• ".to_string()
                    };
                    let mut spans = vec![Span::raw(format!("  {marker}"))];
                    spans.extend(inline_spans(item, Style::default()));
                    lines.push(Line::from(spans));
                }
            }
            BlockNode::CodeBlock { lang, text } => {
                let dim = Style::default().add_modifier(Modifier::DIM);
                lines.push(Line::from(Span::styled(
                    format!("── {}", lang.as_deref().unwrap_or("code")),
                    dim,
                )));
                for code_line in text.split('\n') {
                    lines.push(Line::from(Span::styled(
                        format!("  {code_line}"),
                        Style::default().fg(CODE_BLOCK),
                    )));
                }
            }
        }
        lines.push(Line::default());
    }

    lines
}

fn heading_style(level: u8) -> Style {
    let idx = usize::from(level.clamp(1, 4)) - 1;
    let style = Style::default()
        .fg(HEADING_COLORS[idx])
        .add_modifier(Modifier::BOLD);
    if level == 1 {
        style.add_modifier(Modifier::UNDERLINED)
    } else {
        style
    }
}

fn inline_spans(nodes: &[InlineNode], base: Style) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(nodes.len());
    for node in nodes {
        match node {
            InlineNode::Text(s) => spans.push(Span::styled(s.clone(), base)),
            InlineNode::Bold(s) => {
                spans.push(Span::styled(s.clone(), base.add_modifier(Modifier::BOLD)))
            }
            InlineNode::Italic(s) => {
                spans.push(Span::styled(s.clone(), base.add_modifier(Modifier::ITALIC)))
            }
            InlineNode::Code(s) => spans.push(Span::styled(
                s.clone(),
                Style::default().fg(INLINE_CODE_FG).bg(INLINE_CODE_BG),
            )),
            InlineNode::Link { text, href } => {
                spans.push(Span::styled(
                    text.clone(),
                    base.fg(LINK).add_modifier(Modifier::UNDERLINED),
                ));
                // In-document anchors (table of contents) carry no useful target
                if !href.is_empty() && !href.starts_with('#') {
                    spans.push(Span::styled(
                        format!(" ({href})"),
                        Style::default().add_modifier(Modifier::DIM),
                    ));
                }
            }
        }
    }
    spans
}

/// Flattens styled lines to their text content.
pub fn plain_lines(lines: &[Line<'_>]) -> Vec<String> {
    lines
        .iter()
        .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
        .collect()
}
