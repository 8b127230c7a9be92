pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Returns the info string if `line` is a fence line.
    ///
    /// The fence must start the line; indentation disqualifies it.
    pub fn sig(line: &str) -> Option<&str> {
        line.strip_prefix(Self::BACKTICKS)
    }

    /// Language tag taken from the opening fence's info string.
    pub fn lang(info: &str) -> Option<String> {
        let info = info.trim();
        (!info.is_empty()).then(|| info.to_string())
    }

    pub fn closes(line: &str) -> bool {
        Self::sig(line).is_some()
    }
}
