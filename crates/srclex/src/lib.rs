pub mod diagnostics;
pub mod language;
pub mod lexer;
pub mod options;
pub mod token;

pub use diagnostics::{LexError, LexErrorKind, ProfileError};
pub use language::{Language, LanguageProfile};
pub use lexer::{LexItem, Token, TokenizeResult, Tokenizer};
pub use options::TokenizerOptions;
pub use srclex_span::{count_line_breaks, Position, Span};
pub use token::TokenKind;

/// Start a lazy tokenizer over `source`.
///
/// Nothing is scanned until the returned iterator is pulled. To tokenize the
/// same text again, call this again; a tokenizer cannot be rewound.
pub fn tokenize<'src, 'p>(
    source: &'src str,
    profile: &'p LanguageProfile,
    options: TokenizerOptions,
) -> Tokenizer<'src, 'p> {
    Tokenizer::new(source, profile, options)
}
