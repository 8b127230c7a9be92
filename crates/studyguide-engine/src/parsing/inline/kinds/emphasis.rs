/// Emphasis inline types with owned delimiter constants.
///
/// Bold must be tried before single-asterisk italic at the same position,
/// otherwise `**a**` would read as two empty italics.
pub struct Emphasis;

impl Emphasis {
    pub const BOLD: &'static str = "**";
    pub const ITALIC_UNDERSCORE: &'static str = "_";
    pub const ITALIC_STAR: &'static str = "*";
}
