pub struct Link;

impl Link {
    pub const OPEN: &'static str = "[";
    /// Closes the text and opens the href: `](`.
    pub const MIDDLE: &'static str = "](";
    pub const CLOSE: &'static str = ")";
}
