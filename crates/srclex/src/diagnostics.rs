use std::fmt;

use miette::{Diagnostic, LabeledSpan};
use srclex_span::{Position, Span};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum LexErrorKind {
    #[error("unterminated block comment")]
    UnterminatedComment,

    #[error("unterminated literal")]
    UnterminatedLiteral,

    #[error("unrecognized character {0:?}")]
    UnrecognizedCharacter(char),
}

impl LexErrorKind {
    pub fn code(self) -> &'static str {
        match self {
            LexErrorKind::UnterminatedComment => "srclex::unterminated_comment",
            LexErrorKind::UnterminatedLiteral => "srclex::unterminated_literal",
            LexErrorKind::UnrecognizedCharacter(_) => "srclex::unrecognized_character",
        }
    }
}

/// A lexical error at a precise source location.
///
/// `span` covers the offending construct: the single bad character, the
/// literal up to the end of its line, or the whole unclosed comment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at {position}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
    pub position: Position,
}

impl LexError {
    pub fn new(kind: LexErrorKind, span: Span, position: Position) -> Self {
        Self {
            kind,
            span,
            position,
        }
    }

    pub fn offset(&self) -> u32 {
        self.span.start
    }

    /// Whether tokenization stopped at this error.
    pub fn is_fatal(&self) -> bool {
        self.kind == LexErrorKind::UnterminatedComment
    }
}

impl Diagnostic for LexError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.kind.code()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.kind {
            LexErrorKind::UnterminatedComment => "close the comment with `*/`",
            LexErrorKind::UnterminatedLiteral => "add the closing quote",
            LexErrorKind::UnrecognizedCharacter(_) => return None,
        };
        Some(Box::new(help))
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let label = match self.kind {
            LexErrorKind::UnterminatedComment => "comment opened here",
            LexErrorKind::UnterminatedLiteral => "literal opened here",
            LexErrorKind::UnrecognizedCharacter(_) => "not valid here",
        };
        Some(Box::new(std::iter::once(LabeledSpan::new(
            Some(label.to_string()),
            self.span.start as usize,
            self.span.len() as usize,
        ))))
    }
}

/// Errors raised while resolving or loading a [`LanguageProfile`](crate::LanguageProfile).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("unknown language {0:?}")]
    UnknownLanguage(String),

    #[error("no language registered for file extension {0:?}")]
    UnknownExtension(String),
}
