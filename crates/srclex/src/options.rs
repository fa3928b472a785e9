use serde::Deserialize;

/// Caller-facing switches for one tokenizer run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TokenizerOptions {
    /// Yield comments as [`TokenKind::Comment`](crate::TokenKind::Comment)
    /// tokens instead of discarding them.
    pub emit_comments: bool,
    /// Columns per tab stop. Only affects reported columns; `0` acts as `1`.
    pub tab_width: u32,
}

impl TokenizerOptions {
    pub const DEFAULT_TAB_WIDTH: u32 = 8;

    pub fn with_comments(mut self) -> Self {
        self.emit_comments = true;
        self
    }

    pub fn with_tab_width(mut self, tab_width: u32) -> Self {
        self.tab_width = tab_width;
        self
    }
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self {
            emit_comments: false,
            tab_width: Self::DEFAULT_TAB_WIDTH,
        }
    }
}
