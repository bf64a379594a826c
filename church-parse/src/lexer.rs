use std::fmt;
use std::ops::Range;

use codespan::{ByteIndex, Span};
use logos::Logos;

// Identifiers are maximal runs of anything that is not whitespace,
// a parenthesis, a lambda sign or the dot.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token<'src> {
    #[regex(r"\s+", logos::skip)]
    Whitespace,

    #[token(":debug")]
    Debug,
    #[token(":i")]
    AsInteger,
    #[token(":b")]
    AsBoolean,
    #[token(":l")]
    AsList,

    #[token("\\")]
    #[token("λ")]
    Lambda,
    #[token(".")]
    Dot,
    #[token("=")]
    Equals,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,

    #[regex(r"[^\s()\\.λ]+")]
    Identifier(&'src str),

    #[error]
    Error
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Whitespace => write!(f, "whitespace"),
            Token::Debug => write!(f, ":debug"),
            Token::AsInteger => write!(f, ":i"),
            Token::AsBoolean => write!(f, ":b"),
            Token::AsList => write!(f, ":l"),
            Token::Lambda => write!(f, "λ"),
            Token::Dot => write!(f, "."),
            Token::Equals => write!(f, "="),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::Identifier(name) => write!(f, "{}", name),
            Token::Error => write!(f, "<error>"),
        }
    }
}

pub type Spanned<Tok, Loc, Error> = Result<(Loc, Tok, Loc), Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexicalError {
    InvalidToken(Span)
}

impl LexicalError {
    pub fn span(&self) -> Span {
        match self {
            LexicalError::InvalidToken(span) => *span
        }
    }
}

impl fmt::Display for LexicalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexicalError::InvalidToken(_) => write!(f, "invalid token"),
        }
    }
}

pub(crate) fn span_of(range: Range<usize>) -> Span {
    Span::new(ByteIndex(range.start as u32), ByteIndex(range.end as u32))
}

use logos::Lexer as LogosLexer;

pub struct Lexer<'src> {
    logos_lex : LogosLexer<'src, Token<'src>>,
}

impl<'src> Lexer<'src> {
    pub fn new(src: &'src str) -> Lexer<'src> {
        Lexer {
            logos_lex: Token::lexer(src)
        }
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Spanned<Token<'src>, usize, LexicalError>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.logos_lex.next()?;
        let range = self.logos_lex.span();
        Some(match token {
            Token::Error => Err(LexicalError::InvalidToken(span_of(range))),
            token => Ok((range.start, token, range.end))
        })
    }
}
