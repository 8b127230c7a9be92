//! Behaviour tests for the block segmenter and its use of the tokenizer.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

use crate::parsing::{
    BlockNode, InlineNode, parse_document, segment, snapshot, span::Span,
};

fn text(s: &str) -> InlineNode {
    InlineNode::Text(s.into())
}

fn heading(level: u8, s: &str) -> BlockNode {
    BlockNode::Heading {
        level,
        inline: vec![text(s)],
    }
}

fn para(s: &str) -> BlockNode {
    BlockNode::Paragraph {
        inline: vec![text(s)],
    }
}

fn list(ordered: bool, items: &[&str]) -> BlockNode {
    BlockNode::List {
        ordered,
        items: items.iter().map(|s| vec![text(s)]).collect(),
    }
}

fn code(lang: Option<&str>, body: &str) -> BlockNode {
    BlockNode::CodeBlock {
        lang: lang.map(str::to_string),
        text: body.into(),
    }
}

#[test]
fn empty_document() {
    assert!(segment("").is_empty());
}

#[test]
fn blank_lines_only() {
    assert!(segment("\n\n  \n\t\n").is_empty());
}

#[test]
fn front_matter_is_skipped() {
    assert_eq!(
        segment("---\ntitle: t\n---\n# H\npara"),
        vec![heading(1, "H"), para("para")]
    );
}

#[test]
fn front_matter_span_covers_delimiters() {
    let doc = parse_document("---\ntitle: t\n---\n# H");
    assert_eq!(doc.front_matter, Some(Span { start: 0, end: 16 }));
}

#[test]
fn indented_front_matter_delimiters() {
    assert_eq!(segment("  ---  \nk: v\n---\nbody"), vec![para("body")]);
}

#[test]
fn unterminated_front_matter_drops_everything() {
    let src = "---\ntitle: x\n# Heading\nmore text";
    let doc = parse_document(src);
    assert!(doc.blocks.is_empty());
    assert_eq!(
        doc.front_matter,
        Some(Span {
            start: 0,
            end: src.len()
        })
    );
}

#[test]
fn delimiter_after_first_line_is_a_paragraph() {
    assert_eq!(
        segment("intro\n---\nx\n---"),
        vec![para("intro"), para("---"), para("x"), para("---")]
    );
}

#[test]
fn fenced_block_is_not_inline_parsed() {
    assert_eq!(segment("```\nx\ny\n```"), vec![code(None, "x\ny")]);
    assert_eq!(segment("```\n**x**\n```"), vec![code(None, "**x**")]);
}

#[test]
fn fence_keeps_language() {
    assert_eq!(
        segment("```javascript\nlet a = 1;\n```"),
        vec![code(Some("javascript"), "let a = 1;")]
    );
}

#[test]
fn blank_lines_inside_fence_are_preserved() {
    assert_eq!(segment("```\na\n\nb\n```"), vec![code(None, "a\n\nb")]);
}

#[test]
fn empty_fence() {
    assert_eq!(segment("```\n```\nafter"), vec![code(None, ""), para("after")]);
}

#[test]
fn unterminated_fence_runs_to_end() {
    assert_eq!(
        segment("text\n```rust\nfn x()\n\n# not heading"),
        vec![para("text"), code(Some("rust"), "fn x()\n\n# not heading")]
    );
}

#[test]
fn closing_fence_with_info_string_still_closes() {
    assert_eq!(
        segment("```\na\n```rust\nb"),
        vec![code(None, "a"), para("b")]
    );
}

#[rstest]
#[case("# X", 1)]
#[case("## X", 2)]
#[case("### X", 3)]
#[case("#### X", 4)]
fn heading_levels(#[case] src: &str, #[case] level: u8) {
    assert_eq!(segment(src), vec![heading(level, "X")]);
}

#[test]
fn five_hashes_is_a_paragraph() {
    assert_eq!(segment("##### X"), vec![para("##### X")]);
}

#[test]
fn blockquote_is_inline_parsed() {
    assert_eq!(
        segment("> **q** said"),
        vec![BlockNode::Blockquote {
            inline: vec![InlineNode::Bold("q".into()), text(" said")],
        }]
    );
}

#[test]
fn each_quote_line_is_its_own_block() {
    assert_eq!(
        segment("> a\n> b"),
        vec![
            BlockNode::Blockquote {
                inline: vec![text("a")]
            },
            BlockNode::Blockquote {
                inline: vec![text("b")]
            },
        ]
    );
}

#[test]
fn mixed_list_kinds_split() {
    assert_eq!(
        segment("- a\n1. b"),
        vec![list(false, &["a"]), list(true, &["b"])]
    );
    assert_eq!(
        segment("1. a\n- b"),
        vec![list(true, &["a"]), list(false, &["b"])]
    );
}

#[test]
fn dash_and_star_bullets_share_a_list() {
    assert_eq!(segment("- a\n* b"), vec![list(false, &["a", "b"])]);
}

#[test]
fn blank_line_ends_list() {
    assert_eq!(
        segment("- a\n- b\n\n- c"),
        vec![list(false, &["a", "b"]), list(false, &["c"])]
    );
}

#[test]
fn paragraph_ends_list() {
    assert_eq!(
        segment("1. a\n2. b\ntext"),
        vec![list(true, &["a", "b"]), para("text")]
    );
}

#[test]
fn list_items_are_inline_parsed() {
    assert_eq!(
        segment("- [Intro](#intro)\n- `code`"),
        vec![BlockNode::List {
            ordered: false,
            items: vec![
                vec![InlineNode::Link {
                    text: "Intro".into(),
                    href: "#intro".into(),
                }],
                vec![InlineNode::Code("code".into())],
            ],
        }]
    );
}

#[test]
fn paragraph_keeps_full_line() {
    assert_eq!(segment("  indented # text"), vec![para("  indented # text")]);
}

#[test]
fn crlf_matches_lf() {
    assert_eq!(segment("# H\r\n- a\r\n- b\r\n"), segment("# H\n- a\n- b\n"));
}

#[test]
fn idempotent_across_calls() {
    let src = "---\ntitle: t\n---\n# H\n- a\n1. b\n```\nc\n```\n> q\np **b**";
    assert_eq!(segment(src), segment(src));
}

/// Lines a parse must consume, in order: everything after the front matter
/// except blank lines outside code fences.
fn consumed_lines(src: &str) -> String {
    let lines: Vec<&str> = src
        .split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .collect();
    let body_start = if lines[0].trim() == "---" {
        lines[1..]
            .iter()
            .position(|l| l.trim() == "---")
            .map_or(lines.len(), |i| i + 2)
    } else {
        0
    };

    let mut in_fence = false;
    let mut kept = vec![];
    for line in &lines[body_start..] {
        let fence = line.starts_with("```");
        if in_fence || fence || !line.trim().is_empty() {
            kept.push(*line);
        }
        if fence {
            in_fence = !in_fence;
        }
    }
    kept.join("\n")
}

fn rebuilt_from_spans(src: &str) -> String {
    parse_document(src)
        .blocks
        .iter()
        .map(|b| b.span.slice(src))
        .collect::<Vec<_>>()
        .join("\n")
}

#[rstest]
#[case("# T\n\n- a\n- b\n\n```\ncode\n```\n> q\npara")]
#[case("# T\n```\na\n\nb\n```\npara")]
#[case("```\n\n\n")]
#[case("---\nk: v\n---\n\n# After\n\n")]
#[case("---\nnever closed\n# H")]
fn source_spans_reconstruct_document(#[case] src: &str) {
    assert_eq!(rebuilt_from_spans(src), consumed_lines(src));
}

#[test]
fn blank_lines_inside_fence_belong_to_its_span() {
    let src = "# T\n```\na\n\nb\n```\npara";
    let doc = parse_document(src);
    assert_eq!(doc.blocks[1].span.slice(src), "```\na\n\nb\n```");
}

#[test]
fn source_spans_skip_front_matter() {
    let src = "---\na: b\n---\nbody";
    let doc = parse_document(src);
    assert_eq!(doc.blocks.len(), 1);
    assert_eq!(doc.blocks[0].span.slice(src), "body");
}

#[rstest]
#[case("")]
#[case("---")]
#[case("```")]
#[case("\n```\n")]
#[case("- ")]
#[case("1.")]
#[case(">")]
#[case("#")]
#[case("# ")]
#[case("**")]
#[case("[](")]
#[case("é\r\n\r\n**ü")]
#[case("---\n---\n---\n---")]
#[case("> > > nested")]
#[case("- a\n\t\n1. b\n```x\n- c")]
fn degenerate_input_is_total(#[case] src: &str) {
    let doc = parse_document(src);
    snapshot::invariants(src, &doc);
}

const MARKDOWN_PIECES: &[&str] = &[
    "# ", "## ", "#### ", "##### ", "```", "```rust", "---", "- ", "* ", "1. ", "42.", "> ",
    ">", "**", "*", "_", "`", "[", "](", ")", "a", "word", "é", " ", "\t", "\n", "\n", "\n",
];

fn markdown() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(MARKDOWN_PIECES), 0..48).prop_map(|p| p.concat())
}

proptest! {
    #[test]
    fn parse_is_total_and_consumes_every_content_line(src in markdown()) {
        let doc = parse_document(&src);
        snapshot::invariants(&src, &doc);
        prop_assert_eq!(rebuilt_from_spans(&src), consumed_lines(&src));
    }

    #[test]
    fn segment_is_repeatable(src in markdown()) {
        prop_assert_eq!(segment(&src), segment(&src));
        prop_assert_eq!(segment(&src), parse_document(&src).into_nodes());
    }
}
