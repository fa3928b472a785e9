use std::fmt;

use serde::Serialize;

/// 1-based line and column of a character in the source.
///
/// Columns count characters, not bytes. A tab moves the column to the next
/// tab stop, so the same text reports different columns for different tab
/// widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub const START: Position = Position { line: 1, column: 1 };

    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// Move past `text`. `\n`, `\r\n` and a lone `\r` each end a line.
    pub fn advance(&mut self, text: &str, tab_width: u32) {
        let tab_width = tab_width.max(1);
        let mut chars = text.chars().peekable();
        while let Some(ch) = chars.next() {
            match ch {
                '\r' if chars.peek() == Some(&'\n') => {}
                '\n' | '\r' => {
                    self.line += 1;
                    self.column = 1;
                }
                '\t' => {
                    self.column = ((self.column - 1) / tab_width + 1) * tab_width + 1;
                }
                _ => self.column += 1,
            }
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Number of line breaks in `text`, counting `\r\n` once.
pub fn count_line_breaks(text: &str) -> u32 {
    let bytes = text.as_bytes();
    let mut count = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => count += 1,
            b'\r' => {
                count += 1;
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }
    count
}
