use std::collections::BTreeSet;

/// Number of lines in raw text. `\r\n`, `\r` and `\n` all separate lines,
/// and a trailing separator opens one more (empty) line.
pub fn lines_of_code(source: &str) -> u32 {
    srclex::count_line_breaks(source) + 1
}

/// Distinct lines touched by program text.
#[derive(Debug, Default, Clone)]
pub struct CodeLines {
    lines: BTreeSet<u32>,
}

impl CodeLines {
    pub fn record(&mut self, start_line: u32, end_line: u32) {
        self.lines.extend(start_line..=end_line);
    }

    pub fn count(&self) -> u32 {
        self.lines.len() as u32
    }
}
