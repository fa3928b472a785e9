use std::iter::FusedIterator;

use logos::Logos;
use memchr::memmem;
use serde::Serialize;
use srclex_span::{count_line_breaks, Position, Span};
use tracing::{debug, trace};

use crate::diagnostics::{LexError, LexErrorKind};
use crate::language::LanguageProfile;
use crate::options::TokenizerOptions;
use crate::token::{RawToken, ScanRules, TokenKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
    pub span: Span,
    pub position: Position,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, text: &'src str, span: Span, position: Position) -> Self {
        Self {
            kind,
            text,
            span,
            position,
        }
    }

    pub fn eof(offset: u32, position: Position) -> Self {
        Self {
            kind: TokenKind::Eof,
            text: "",
            span: Span::new(offset, offset),
            position,
        }
    }

    /// Line of the token's last character. Differs from `position.line`
    /// only for block comments and raw strings spanning lines.
    pub fn end_line(&self) -> u32 {
        self.position.line + count_line_breaks(self.text)
    }
}

/// One element of the token stream.
pub type LexItem<'src> = Result<Token<'src>, LexError>;

/// Everything a tokenizer produced, split into tokens and errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizeResult<'src> {
    pub tokens: Vec<Token<'src>>,
    pub errors: Vec<LexError>,
}

impl TokenizeResult<'_> {
    /// `true` when the pass ran to the end-of-input token, `false` when a
    /// fatal error stopped it.
    pub fn reached_eof(&self) -> bool {
        self.tokens.last().is_some_and(|t| t.kind == TokenKind::Eof)
    }
}

/// Lazy, pull-based tokenizer over one source text.
///
/// Yields `Ok` tokens and `Err` lexical errors in source order, then a single
/// [`TokenKind::Eof`] token, then `None`. An unterminated block comment ends
/// the stream without an `Eof`. Nothing is scanned ahead of the consumer
/// except the one item held by [`peek`](Self::peek).
pub struct Tokenizer<'src, 'p> {
    source: &'src str,
    profile: &'p LanguageProfile,
    options: TokenizerOptions,
    pos: usize,
    position: Position,
    peeked: Option<LexItem<'src>>,
    finished: bool,
}

impl<'src, 'p> Tokenizer<'src, 'p> {
    /// A leading byte-order mark is skipped without moving the column.
    ///
    /// Offsets are `u32`, so `source` must be shorter than 4 GiB.
    pub fn new(source: &'src str, profile: &'p LanguageProfile, options: TokenizerOptions) -> Self {
        Self {
            source,
            profile,
            options,
            pos: if source.starts_with(BOM) { BOM.len_utf8() } else { 0 },
            position: Position::START,
            peeked: None,
            finished: false,
        }
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    pub fn profile(&self) -> &'p LanguageProfile {
        self.profile
    }

    pub fn options(&self) -> TokenizerOptions {
        self.options
    }

    pub fn peek(&mut self) -> Option<&LexItem<'src>> {
        if self.peeked.is_none() {
            self.peeked = self.read_next_item();
        }
        self.peeked.as_ref()
    }

    /// Drain the remaining stream.
    pub fn into_result(self) -> TokenizeResult<'src> {
        let mut result = TokenizeResult {
            tokens: Vec::new(),
            errors: Vec::new(),
        };
        for item in self {
            match item {
                Ok(token) => result.tokens.push(token),
                Err(err) => result.errors.push(err),
            }
        }
        result
    }

    fn read_next_item(&mut self) -> Option<LexItem<'src>> {
        if self.finished {
            return None;
        }

        loop {
            self.skip_whitespace();

            if self.pos >= self.source.len() {
                self.finished = true;
                return Some(Ok(Token::eof(self.pos as u32, self.position)));
            }

            let item = self.lex_one();
            match &item {
                Ok(token) if token.kind == TokenKind::Comment && !self.options.emit_comments => {
                    continue;
                }
                Ok(token) => {
                    trace!(kind = %token.kind, offset = token.span.start, text = token.text, "token");
                }
                Err(err) => {
                    debug!(
                        kind = %err.kind,
                        offset = err.span.start,
                        line = err.position.line,
                        column = err.position.column,
                        "lexical error"
                    );
                }
            }
            return Some(item);
        }
    }

    fn lex_one(&mut self) -> LexItem<'src> {
        let source = self.source;
        let remaining = &source[self.pos..];

        // Logos only matches closed comments, so an unclosed one is caught here.
        // There is no way to tell where it was meant to end: stop the stream.
        if remaining.starts_with("/*") && memmem::find(&remaining.as_bytes()[2..], b"*/").is_none() {
            self.finished = true;
            debug!(offset = self.pos, "block comment never closed; halting");
            return Err(self.error(LexErrorKind::UnterminatedComment, remaining.len()));
        }

        // `#[` opens a PHP attribute, not a comment.
        if self.profile.hash_comments && remaining.starts_with('#') && !remaining.starts_with("#[") {
            return Ok(self.token(TokenKind::Comment, line_end(remaining)));
        }

        if self.profile.dollar_identifiers && remaining.starts_with('$') {
            let mut inner = RawToken::lexer(&remaining[1..]);
            let len = match inner.next() {
                Some(Ok(RawToken::Identifier)) => 1 + inner.span().end,
                _ => 1,
            };
            return Ok(self.token(TokenKind::Identifier, len));
        }

        let rules = ScanRules {
            multiline_strings: self.profile.multiline_strings,
            triple_quote_strings: self.profile.triple_quote_strings,
            verbatim_strings: self.profile.verbatim_strings,
        };
        let mut inner = RawToken::lexer_with_extras(remaining, rules);

        match inner.next() {
            Some(Ok(RawToken::TripleQuoted)) if !self.profile.triple_quote_strings => {
                Ok(self.token(TokenKind::String, 2))
            }
            Some(Ok(RawToken::Verbatim)) if !self.profile.verbatim_strings => {
                self.recover(remaining)
            }
            Some(Ok(raw)) => {
                let len = inner.span().end;
                let kind = match raw {
                    RawToken::LineComment | RawToken::BlockComment => TokenKind::Comment,
                    RawToken::Number => TokenKind::Number,
                    RawToken::DoubleQuoted
                    | RawToken::Backtick
                    | RawToken::TripleQuoted
                    | RawToken::Verbatim => TokenKind::String,
                    RawToken::SingleQuoted if self.profile.single_quote_strings => TokenKind::String,
                    RawToken::SingleQuoted => TokenKind::Char,
                    RawToken::Identifier if self.profile.is_keyword(&remaining[..len]) => {
                        TokenKind::Keyword
                    }
                    RawToken::Identifier => TokenKind::Identifier,
                    RawToken::Operator => TokenKind::Operator,
                    RawToken::Punctuation => TokenKind::Punctuation,
                };
                Ok(self.token(kind, len))
            }
            Some(Err(())) => self.recover(remaining),
            None => {
                self.finished = true;
                Ok(Token::eof(self.pos as u32, self.position))
            }
        }
    }

    /// Turn a scanner failure into a positioned error and skip past it so the
    /// next call resumes on fresh input.
    fn recover(&mut self, remaining: &str) -> LexItem<'src> {
        let Some(ch) = remaining.chars().next() else {
            self.finished = true;
            return Ok(Token::eof(self.pos as u32, self.position));
        };

        let block_string = (self.profile.triple_quote_strings && remaining.starts_with("\"\"\""))
            || (self.profile.verbatim_strings
                && (remaining.starts_with("@\"") || remaining.starts_with("@$\"")));

        match ch {
            _ if block_string => Err(self.error(LexErrorKind::UnterminatedLiteral, remaining.len())),
            '"' | '\'' | '`' => {
                let len = if ch == '`' || self.profile.multiline_strings {
                    remaining.len()
                } else {
                    line_end(remaining)
                };
                Err(self.error(LexErrorKind::UnterminatedLiteral, len))
            }
            c if self.profile.extra_symbols.contains(&c) => {
                Ok(self.token(TokenKind::Punctuation, c.len_utf8()))
            }
            c => Err(self.error(LexErrorKind::UnrecognizedCharacter(c), c.len_utf8())),
        }
    }

    fn skip_whitespace(&mut self) {
        let source = self.source;
        let remaining = &source[self.pos..];
        let trimmed =
            remaining.trim_start_matches(|c: char| matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0C'));
        self.advance(remaining.len() - trimmed.len());
    }

    fn token(&mut self, kind: TokenKind, len: usize) -> Token<'src> {
        let source = self.source;
        let start = self.pos;
        let position = self.position;
        self.advance(len);
        Token::new(
            kind,
            &source[start..self.pos],
            Span::from_range(start..self.pos),
            position,
        )
    }

    fn error(&mut self, kind: LexErrorKind, len: usize) -> LexError {
        let start = self.pos;
        let position = self.position;
        self.advance(len);
        LexError::new(kind, Span::from_range(start..self.pos), position)
    }

    fn advance(&mut self, len: usize) {
        let end = self.pos + len;
        self.position
            .advance(&self.source[self.pos..end], self.options.tab_width);
        self.pos = end;
    }
}

impl<'src> Iterator for Tokenizer<'src, '_> {
    type Item = LexItem<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(item) = self.peeked.take() {
            return Some(item);
        }
        self.read_next_item()
    }
}

impl FusedIterator for Tokenizer<'_, '_> {}

const BOM: char = '\u{feff}';

/// Length of the first line of `text`, excluding its line break.
fn line_end(text: &str) -> usize {
    memchr::memchr2(b'\n', b'\r', text.as_bytes()).unwrap_or(text.len())
}
