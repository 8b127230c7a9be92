/// ATX heading type with owned delimiter table.
pub struct Heading;

impl Heading {
    /// Heading prefixes, longest first so `#### x` never reads as `# ` plus leftover.
    pub const PREFIXES: [(u8, &'static str); 4] = [(4, "#### "), (3, "### "), (2, "## "), (1, "# ")];

    /// Returns the heading level and the text after the prefix.
    ///
    /// Prefixes are matched against the untrimmed line.
    pub fn strip(line: &str) -> Option<(u8, &str)> {
        Self::PREFIXES
            .iter()
            .find_map(|(level, prefix)| line.strip_prefix(prefix).map(|rest| (*level, rest)))
    }
}
