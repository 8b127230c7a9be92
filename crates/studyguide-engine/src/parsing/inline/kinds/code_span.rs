/// Code span inline type with owned delimiter constant.
///
/// Code spans are "raw zones": their content is never scanned for other
/// markup.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick that delimits code spans.
    pub const TICK: &'static str = "`";
}
