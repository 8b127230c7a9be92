/// Front-matter block type with owned delimiter constant.
///
/// Front matter is only located, never parsed: its key/value contents are
/// dropped along with the delimiters.
pub struct FrontMatter;

impl FrontMatter {
    /// The delimiter line, compared after trimming.
    pub const DELIMITER: &'static str = "---";

    /// Returns true if `line` opens or closes a front-matter block.
    pub fn is_delimiter(line: &str) -> bool {
        line.trim() == Self::DELIMITER
    }
}
