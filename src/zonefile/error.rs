//! Errors that can happen while formatting a zonefile.
//!
//! There are two classes of errors. A [`RecordError`] only affects a single
//! record line: the line is dropped and processing continues. An [`Error`]
//! aborts processing of the whole file.

use crate::base::ParseDurationError;
use core::fmt;
use std::io;

//------------ RecordError ---------------------------------------------------

/// A record line could not be parsed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RecordError(&'static str);

impl RecordError {
    pub(super) fn leading_space() -> Self {
        RecordError("line starts with white space")
    }

    pub(super) fn missing_fields() -> Self {
        RecordError("expected owner, class, type, and data")
    }

    pub(super) fn bad_ttl() -> Self {
        RecordError("TTL out of range")
    }
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl std::error::Error for RecordError {}

//------------ DirectiveError ------------------------------------------------

/// A directive line could not be processed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DirectiveError {
    /// A directive requiring an argument didn’t have one.
    MissingArgument(&'static str),

    /// The argument of a `$TTL` directive is not a valid duration.
    BadTtl(ParseDurationError),
}

impl fmt::Display for DirectiveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            DirectiveError::MissingArgument(directive) => {
                write!(f, "missing argument for {}", directive)
            }
            DirectiveError::BadTtl(err) => {
                write!(f, "invalid $TTL: {}", err)
            }
        }
    }
}

impl std::error::Error for DirectiveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DirectiveError::MissingArgument(_) => None,
            DirectiveError::BadTtl(err) => Some(err),
        }
    }
}

//------------ Error ---------------------------------------------------------

/// Formatting a zonefile failed.
#[derive(Debug)]
pub enum Error {
    /// Reading the zonefile or writing the result failed.
    Io(io::Error),

    /// A directive on the given line could not be processed.
    Directive { line: usize, err: DirectiveError },
}

impl Error {
    pub(super) fn directive(line: usize, err: DirectiveError) -> Self {
        Error::Directive { line, err }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Io(err) => err.fmt(f),
            Error::Directive { line, err } => write!(f, "{}: {}", line, err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Directive { err, .. } => Some(err),
        }
    }
}
