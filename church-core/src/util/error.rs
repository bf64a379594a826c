use std::fmt;

use church_parse::ParseError;

use crate::reify::DecodeError;

#[derive(Debug)]
pub struct Error(Repr);

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Parse,
    Decode,
    IO
}

impl Error {
    pub fn with_kind<E>(kind: ErrorKind, error: E) -> Error
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Error(Repr::Custom(kind, error.into()))
    }

    pub fn kind(&self) -> ErrorKind {
        match &self.0 {
            Repr::Parse(_) => ErrorKind::Parse,
            Repr::Decode(_) => ErrorKind::Decode,
            Repr::Custom(c, _) => *c
        }
    }

    pub fn parse_error(&self) -> Option<&ParseError> {
        match &self.0 {
            Repr::Parse(e) => Some(e),
            _ => None
        }
    }

    pub fn decode_error(&self) -> Option<&DecodeError> {
        match &self.0 {
            Repr::Decode(e) => Some(e),
            _ => None
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::with_kind(ErrorKind::IO, e)
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Error(Repr::Parse(e))
    }
}

impl From<DecodeError> for Error {
    fn from(e: DecodeError) -> Self {
        Error(Repr::Decode(e))
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Parse => "parse error",
            ErrorKind::Decode => "decode error",
            ErrorKind::IO => "i/o error"
        };
        f.write_str(name)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Repr::Parse(e) => write!(f, "{}: {}", ErrorKind::Parse, e),
            Repr::Decode(e) => write!(f, "{}", e),
            Repr::Custom(kind, e) => write!(f, "{}: {}", kind, e)
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.0 {
            Repr::Parse(e) => Some(e),
            Repr::Decode(e) => Some(e),
            Repr::Custom(_, e) => Some(e.as_ref())
        }
    }
}

#[derive(Debug)]
enum Repr {
    Parse(ParseError),
    // Decode failures carry the offending term, which is not Send
    Decode(DecodeError),
    Custom(ErrorKind, Box<dyn std::error::Error + Send + Sync>)
}
