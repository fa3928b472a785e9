use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref COMMENT_KEYWORDS: Regex =
        Regex::new(r"(?i)(?-u:\b)(bug|wtf|todo|hack)(?-u:\b)")
            .expect("comment keyword pattern is valid");
}

/// Counts the lines covered by comments, each line at most once.
///
/// Comments must be recorded in source order.
#[derive(Debug, Default, Clone)]
pub struct CommentLines {
    count: u32,
    last_line: u32,
}

impl CommentLines {
    pub fn record(&mut self, start_line: u32, end_line: u32) {
        if self.last_line != start_line {
            self.count += end_line - start_line + 1;
            self.last_line = end_line;
        } else if self.last_line < end_line {
            // Starts on a line already counted but runs past it.
            self.count += end_line - start_line;
            self.last_line = end_line;
        }
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}

/// Whole-word, case-insensitive occurrences of `bug`, `wtf`, `todo` and
/// `hack`. Word boundaries are ASCII: `todoé` still counts.
pub fn count_comment_keywords(comment: &str) -> u32 {
    COMMENT_KEYWORDS.find_iter(comment).count() as u32
}
