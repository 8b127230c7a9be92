use crate::parsing::{ParsedDoc, blocks::BlockNode};

/// Validates parser output invariants.
///
/// Asserts that:
/// - All block spans are non-empty and within document bounds
/// - Block spans are in document order and do not overlap
/// - Front matter, when present, starts the document and precedes every block
/// - Heading levels are 1 through 4 and lists are never empty
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(document: &str, doc: &ParsedDoc) {
    let n = document.len();
    let mut prev_end = 0usize;

    if let Some(fm) = doc.front_matter {
        assert_eq!(fm.start, 0, "front matter must start the document: {fm:?}");
        assert!(fm.end <= n, "front matter out of bounds: {fm:?} (len: {n})");
        prev_end = fm.end;
    }

    for (i, b) in doc.blocks.iter().enumerate() {
        assert!(
            b.span.start <= b.span.end && b.span.end <= n,
            "block span out of bounds: {:?} (document len: {})",
            b.span,
            n
        );
        assert!(!b.span.is_empty(), "empty block span: {:?}", b.span);
        assert!(
            (i == 0 && doc.front_matter.is_none()) || b.span.start > prev_end,
            "block span overlaps or precedes previous: {:?} after {}",
            b.span,
            prev_end
        );
        assert!(
            document.is_char_boundary(b.span.start) && document.is_char_boundary(b.span.end),
            "block span splits a char: {:?}",
            b.span
        );
        match &b.node {
            BlockNode::Heading { level, .. } => {
                assert!((1..=4).contains(level), "heading level {level} out of range")
            }
            BlockNode::List { items, .. } => assert!(!items.is_empty(), "empty list"),
            _ => {}
        }
        prev_end = b.span.end;
    }
}
