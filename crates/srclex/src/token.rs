use std::fmt;

use logos::Logos;
use serde::Serialize;

/// Per-profile switches the raw scanner consults from inside its callbacks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanRules {
    /// `"` and `'` literals may run across line breaks.
    pub multiline_strings: bool,
    /// `"""` opens a raw block string (Java text blocks, Kotlin raw strings).
    pub triple_quote_strings: bool,
    /// `@"` opens a C# verbatim string, where `""` is an escaped quote.
    pub verbatim_strings: bool,
}

fn lex_quoted(lex: &mut logos::Lexer<RawToken>, quote: char) -> bool {
    let multiline = lex.extras.multiline_strings;
    let remainder = lex.remainder();
    let mut chars = remainder.chars();
    loop {
        match chars.next() {
            Some('\\') => {
                chars.next(); // skip escaped char
            }
            Some(c) if c == quote => {
                let consumed = remainder.len() - chars.as_str().len();
                lex.bump(consumed);
                return true;
            }
            Some('\n' | '\r') if !multiline => return false,
            Some(_) => {}
            None => return false,
        }
    }
}

fn lex_double_quoted(lex: &mut logos::Lexer<RawToken>) -> bool {
    lex_quoted(lex, '"')
}

fn lex_single_quoted(lex: &mut logos::Lexer<RawToken>) -> bool {
    lex_quoted(lex, '\'')
}

/// Raw strings: no escapes, may span lines.
fn lex_backtick(lex: &mut logos::Lexer<RawToken>) -> bool {
    match memchr::memchr(b'`', lex.remainder().as_bytes()) {
        Some(close) => {
            lex.bump(close + 1);
            true
        }
        None => false,
    }
}

/// Block strings close at the first `"""`. Quotes right after it still
/// belong to the literal, so `"""a""""` ends with `a"`.
fn lex_triple_quoted(lex: &mut logos::Lexer<RawToken>) -> bool {
    if !lex.extras.triple_quote_strings {
        return true;
    }
    let remainder = lex.remainder().as_bytes();
    match memchr::memmem::find(remainder, b"\"\"\"") {
        Some(close) => {
            let trailing = remainder[close + 3..].iter().take_while(|&&b| b == b'"').count();
            lex.bump(close + 3 + trailing);
            true
        }
        None => false,
    }
}

fn lex_verbatim(lex: &mut logos::Lexer<RawToken>) -> bool {
    if !lex.extras.verbatim_strings {
        return true;
    }
    let remainder = lex.remainder().as_bytes();
    let mut offset = 0;
    while let Some(quote) = memchr::memchr(b'"', &remainder[offset..]) {
        let after = offset + quote + 1;
        if remainder.get(after) == Some(&b'"') {
            offset = after + 1;
        } else {
            lex.bump(after);
            return true;
        }
    }
    false
}

/// Longest-match scanner for a single token. Whitespace, hash comments,
/// `$` identifiers and unterminated block comments are handled by the
/// [`Tokenizer`](crate::Tokenizer) before this runs.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(extras = ScanRules)]
pub enum RawToken {
    #[regex(r"//[^\r\n]*")]
    LineComment,

    #[regex(r"/\*[^*]*\*+(?:[^/*][^*]*\*+)*/")]
    BlockComment,

    #[regex(r"[0-9]([0-9a-zA-Z_]|[eEpP][+-])*(\.[0-9]([0-9a-zA-Z_]|[eEpP][+-])*)?")]
    Number,

    #[token("\"", lex_double_quoted)]
    DoubleQuoted,

    #[token("'", lex_single_quoted)]
    SingleQuoted,

    #[token("`", lex_backtick)]
    Backtick,

    /// Matched regardless of profile; when block strings are off the
    /// tokenizer keeps only the leading `""`.
    #[token("\"\"\"", lex_triple_quoted)]
    TripleQuoted,

    /// Matched regardless of profile, like [`RawToken::TripleQuoted`].
    #[token("@\"", lex_verbatim)]
    #[token("@$\"", lex_verbatim)]
    Verbatim,

    #[regex(r"[_\p{L}][_\p{L}\p{M}\p{Nd}]*")]
    Identifier,

    // Arithmetic and bitwise
    #[token("+")]
    #[token("-")]
    #[token("*")]
    #[token("/")]
    #[token("%")]
    #[token("**")]
    #[token("&")]
    #[token("|")]
    #[token("^")]
    #[token("~")]
    #[token("&^")]
    #[token("<<")]
    #[token(">>")]
    #[token(">>>")]
    #[token("++")]
    #[token("--")]
    // Assignment
    #[token("=")]
    #[token(":=")]
    #[token("+=")]
    #[token("-=")]
    #[token("*=")]
    #[token("/=")]
    #[token("%=")]
    #[token("**=")]
    #[token("&=")]
    #[token("|=")]
    #[token("^=")]
    #[token("&^=")]
    #[token("<<=")]
    #[token(">>=")]
    #[token(">>>=")]
    #[token("??=")]
    #[token(".=")]
    // Comparison and logic
    #[token("==")]
    #[token("!=")]
    #[token("===")]
    #[token("!==")]
    #[token("<")]
    #[token(">")]
    #[token("<=")]
    #[token(">=")]
    #[token("<=>")]
    #[token("&&")]
    #[token("||")]
    #[token("!")]
    #[token("!!")]
    #[token("?")]
    #[token("??")]
    #[token("?:")]
    #[token("?.")]
    // Access, ranges and arrows
    #[token(".")]
    #[token("..")]
    #[token("...")]
    #[token("..<")]
    #[token(":")]
    #[token("::")]
    #[token("->")]
    #[token("=>")]
    #[token("<-")]
    Operator,

    #[token("(")]
    #[token(")")]
    #[token("[")]
    #[token("]")]
    #[token("{")]
    #[token("}")]
    #[token(",")]
    #[token(";")]
    Punctuation,
}

/// Classification of an emitted token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    Keyword,
    Identifier,
    Number,
    String,
    Char,
    Operator,
    Punctuation,
    Comment,
    Eof,
}

impl TokenKind {
    /// Tokens that belong to the program text rather than to trivia.
    pub fn is_code(self) -> bool {
        !matches!(self, TokenKind::Comment | TokenKind::Eof)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Keyword => write!(f, "keyword"),
            TokenKind::Identifier => write!(f, "identifier"),
            TokenKind::Number => write!(f, "number"),
            TokenKind::String => write!(f, "string literal"),
            TokenKind::Char => write!(f, "character literal"),
            TokenKind::Operator => write!(f, "operator"),
            TokenKind::Punctuation => write!(f, "punctuation"),
            TokenKind::Comment => write!(f, "comment"),
            TokenKind::Eof => write!(f, "end of input"),
        }
    }
}
