#![no_main]

use libfuzzer_sys::fuzz_target;
use srclex::{Language, TokenKind, TokenizerOptions};

fuzz_target!(|data: &[u8]| {
    let Ok(source) = std::str::from_utf8(data) else {
        return;
    };
    let options = TokenizerOptions::default().with_comments();
    for language in Language::ALL {
        let profile = language.profile();
        let mut end = 0;
        let mut saw_eof = false;
        for item in srclex::tokenize(source, &profile, options) {
            assert!(!saw_eof, "item after Eof");
            let span = match item {
                Ok(token) => {
                    saw_eof = token.kind == TokenKind::Eof;
                    token.span
                }
                Err(err) => err.span,
            };
            assert!(span.start as usize >= end, "overlapping spans");
            let gap = &source[end..span.start as usize];
            let gap = if end == 0 { gap.trim_start_matches('\u{feff}') } else { gap };
            assert!(gap.trim().is_empty());
            end = span.end as usize;
        }
        assert!(end <= source.len());
    }
});
