#![allow(dead_code)]

use srclex::{LanguageProfile, LexItem, TokenizerOptions};

pub fn options_with_comments() -> TokenizerOptions {
    TokenizerOptions::default().with_comments()
}

pub fn collect<'src>(
    source: &'src str,
    profile: &LanguageProfile,
    options: TokenizerOptions,
) -> Vec<LexItem<'src>> {
    srclex::tokenize(source, profile, options).collect()
}

/// One line per item: `Kind "text" line:col`, errors prefixed with `error`.
pub fn render(source: &str, items: &[LexItem<'_>]) -> String {
    items
        .iter()
        .map(|item| match item {
            Ok(token) => format!("{:?} {:?} {}", token.kind, token.text, token.position),
            Err(err) => format!(
                "error {:?} {:?} {}",
                err.kind,
                err.span.slice(source),
                err.position
            ),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Rebuild the source from token texts, error spans and the whitespace gaps
/// between them. Panics if a gap holds anything but whitespace (or a leading
/// byte-order mark) or if two items overlap.
pub fn reconstruct(source: &str, items: &[LexItem<'_>]) -> String {
    let mut out = String::with_capacity(source.len());
    let mut cursor = 0usize;
    for item in items {
        let span = match item {
            Ok(token) => token.span,
            Err(err) => err.span,
        };
        let start = span.start as usize;
        assert!(start >= cursor, "item at {start} overlaps previous end {cursor}");
        let gap = &source[cursor..start];
        let body = if cursor == 0 { gap.strip_prefix('\u{feff}').unwrap_or(gap) } else { gap };
        assert!(
            body.chars().all(|c| matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0C')),
            "non-whitespace gap {gap:?} before offset {start}"
        );
        out.push_str(gap);
        out.push_str(span.slice(source));
        cursor = span.end as usize;
    }
    out.push_str(&source[cursor..]);
    out
}
