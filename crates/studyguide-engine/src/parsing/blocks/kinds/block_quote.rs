/// Blockquote block type with owned delimiter constant.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Returns true if the trimmed line starts with `>`.
    pub fn matches(line: &str) -> bool {
        line.trim().starts_with(Self::PREFIX)
    }

    /// Strips a single leading `>` and at most one following whitespace character.
    ///
    /// Only a `>` in the first column is stripped; an indented quote keeps its
    /// text verbatim.
    pub fn strip(line: &str) -> &str {
        let Some(rest) = line.strip_prefix(Self::PREFIX) else {
            return line;
        };
        let mut chars = rest.chars();
        match chars.next() {
            Some(c) if c.is_whitespace() => chars.as_str(),
            _ => rest,
        }
    }
}
