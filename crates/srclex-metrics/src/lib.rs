pub mod comments;
pub mod lines;

use serde::Serialize;
use srclex::{count_line_breaks, LanguageProfile, LexError, LexErrorKind, TokenKind, TokenizerOptions};
use tracing::debug;

pub use comments::{count_comment_keywords, CommentLines};
pub use lines::{lines_of_code, CodeLines};

/// Line metrics for one source file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FileMetrics {
    pub lines_of_code: u32,
    pub comment_lines: u32,
    pub real_lines_of_code: u32,
    pub keywords_in_comments: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricResult {
    pub metric_name: &'static str,
    pub metric_value: u32,
}

impl FileMetrics {
    pub fn results(&self) -> [MetricResult; 4] {
        [
            MetricResult {
                metric_name: "lines_of_code",
                metric_value: self.lines_of_code,
            },
            MetricResult {
                metric_name: "comment_lines",
                metric_value: self.comment_lines,
            },
            MetricResult {
                metric_name: "real_lines_of_code",
                metric_value: self.real_lines_of_code,
            },
            MetricResult {
                metric_name: "keywords_in_comments",
                metric_value: self.keywords_in_comments,
            },
        ]
    }
}

pub struct MeasureResult {
    pub metrics: FileMetrics,
    pub errors: Vec<LexError>,
}

/// Compute all line metrics in a single tokenizer pass.
///
/// Lexical errors do not abort measuring: a bad character or an unclosed
/// literal still counts as code, an unclosed block comment counts as comment
/// through the end of the file.
pub fn measure(source: &str, profile: &LanguageProfile) -> MeasureResult {
    let options = TokenizerOptions::default().with_comments();
    let mut comment_lines = CommentLines::default();
    let mut code_lines = CodeLines::default();
    let mut keywords_in_comments = 0;
    let mut errors = Vec::new();

    for item in srclex::tokenize(source, profile, options) {
        match item {
            Ok(token) if token.kind.is_code() => {
                code_lines.record(token.position.line, token.end_line());
            }
            Ok(token) if token.kind == TokenKind::Comment => {
                comment_lines.record(token.position.line, token.end_line());
                keywords_in_comments += count_comment_keywords(token.text);
            }
            Ok(_) => {}
            Err(err) => {
                let text = err.span.slice(source).trim_end_matches(['\r', '\n']);
                let end_line = err.position.line + count_line_breaks(text);
                if err.kind == LexErrorKind::UnterminatedComment {
                    comment_lines.record(err.position.line, end_line);
                    keywords_in_comments += count_comment_keywords(text);
                } else {
                    code_lines.record(err.position.line, end_line);
                }
                errors.push(err);
            }
        }
    }

    let metrics = FileMetrics {
        lines_of_code: lines_of_code(source),
        comment_lines: comment_lines.count(),
        real_lines_of_code: code_lines.count(),
        keywords_in_comments,
    };
    for result in metrics.results() {
        debug!(
            profile = profile.name(),
            metric = result.metric_name,
            value = result.metric_value,
            "metric computed"
        );
    }

    MeasureResult { metrics, errors }
}
