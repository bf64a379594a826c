use std::fmt;
use std::ops::Range;

use codespan::{ByteIndex, Span};
use lalrpop_util::ParseError as LalrpopError;

use crate::lexer::{span_of, LexicalError, Token};

// Owned parse failure, detached from the source lifetime so that it can
// travel through the core's error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    span: Span,
    message: String
}

impl ParseError {
    pub fn new(span: Span, message: impl Into<String>) -> Self {
        ParseError { span, message: message.into() }
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Byte range of the offending input.
    pub fn range(&self) -> Range<usize> {
        let ByteIndex(start) = self.span.start();
        let ByteIndex(end) = self.span.end();
        start as usize..end as usize
    }
}

fn expecting(expected: &[String]) -> String {
    match expected.len() {
        0 => String::new(),
        1 => format!(", expected {}", expected[0]),
        _ => format!(", expected one of {}", expected.join(", "))
    }
}

impl<'src> From<LalrpopError<usize, Token<'src>, LexicalError>> for ParseError {
    fn from(err: LalrpopError<usize, Token<'src>, LexicalError>) -> Self {
        match err {
            LalrpopError::InvalidToken { location } =>
                ParseError::new(span_of(location..location), "invalid token"),
            LalrpopError::UnrecognizedEOF { location, expected } =>
                ParseError::new(span_of(location..location),
                    format!("unexpected end of input{}", expecting(&expected))),
            LalrpopError::UnrecognizedToken { token: (start, tok, end), expected } =>
                ParseError::new(span_of(start..end),
                    format!("unexpected token `{}`{}", tok, expecting(&expected))),
            LalrpopError::ExtraToken { token: (start, tok, end) } =>
                ParseError::new(span_of(start..end), format!("extra token `{}`", tok)),
            LalrpopError::User { error } =>
                ParseError::new(error.span(), error.to_string())
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let range = self.range();
        write!(f, "{} at {}..{}", self.message, range.start, range.end)
    }
}

impl std::error::Error for ParseError {}
