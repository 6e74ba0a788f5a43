//! Control directives and the parse context they maintain.
//!
//! Lines starting with a `$` are directives rather than records. They don’t
//! produce any output but change the [`Context`] used to complete the
//! records following them.

use super::error::DirectiveError;
use crate::base::Ttl;
use tracing::{debug, warn};

//------------ Context -------------------------------------------------------

/// The state threaded through parsing a single zonefile.
///
/// Initially, the origin is empty and the default TTL is zero.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Context {
    /// The origin set by the last `$ORIGIN` directive.
    origin: String,

    /// The TTL set by the last `$TTL` directive.
    default_ttl: Ttl,
}

impl Context {
    /// Creates a new, empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context with the given origin and default TTL.
    pub fn with_origin(origin: impl Into<String>, default_ttl: Ttl) -> Self {
        Context {
            origin: origin.into(),
            default_ttl,
        }
    }

    /// Returns the current origin.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Returns the current default TTL.
    pub fn default_ttl(&self) -> Ttl {
        self.default_ttl
    }

    /// Processes a directive line.
    ///
    /// The line must start with a `$`. Unknown directives are logged and
    /// otherwise ignored.
    pub fn process(&mut self, line: &str) -> Result<(), DirectiveError> {
        match Directive::parse(line)? {
            Directive::Origin(origin) => {
                debug!(origin, "origin changed");
                self.origin = origin.into();
            }
            Directive::Ttl(ttl) => {
                debug!(ttl = ttl.as_secs(), "default TTL changed");
                self.default_ttl = ttl;
            }
            Directive::Unknown(_) => {
                warn!(line, "Unknown directive");
            }
        }
        Ok(())
    }
}

//------------ Directive -----------------------------------------------------

/// A parsed directive line.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Directive<'a> {
    /// `$ORIGIN` with its argument taken verbatim.
    Origin(&'a str),

    /// `$TTL` with its duration argument.
    Ttl(Ttl),

    /// Any other directive, holding the keyword.
    Unknown(&'a str),
}

impl<'a> Directive<'a> {
    /// Parses a directive line.
    ///
    /// The keyword runs up to the first white space, the argument is the
    /// rest of the line without surrounding white space. Only ASCII white
    /// space separates, same as for record lines.
    pub fn parse(line: &'a str) -> Result<Self, DirectiveError> {
        let is_space = |ch: char| ch.is_ascii_whitespace();
        let (keyword, arg) = match line.split_once(is_space) {
            Some((keyword, arg)) => (keyword, arg.trim_matches(is_space)),
            None => (line, ""),
        };
        match keyword {
            "$ORIGIN" => {
                if arg.is_empty() {
                    return Err(DirectiveError::MissingArgument("$ORIGIN"));
                }
                Ok(Directive::Origin(arg))
            }
            "$TTL" => {
                if arg.is_empty() {
                    return Err(DirectiveError::MissingArgument("$TTL"));
                }
                Ttl::from_duration_str(arg)
                    .map(Directive::Ttl)
                    .map_err(DirectiveError::BadTtl)
            }
            _ => Ok(Directive::Unknown(keyword)),
        }
    }
}

//============ Tests =========================================================
