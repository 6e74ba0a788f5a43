//! Resource records and parsing them from a single line.

use super::directive::Context;
use super::error::RecordError;
use crate::base::Ttl;
use core::fmt;
use core::str::FromStr;

//------------ Record --------------------------------------------------------

/// A resource record read from a zonefile.
///
/// Apart from the owner name and TTL, which are completed from the parse
/// context, all fields are kept as the text found in the zonefile. Neither
/// the class nor the record type are interpreted beyond serving as keys for
/// sorting and formatting.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Record {
    /// The owner name.
    ///
    /// This is empty if the owner was the apex and there was no origin.
    name: String,

    /// The time-to-live.
    ttl: Ttl,

    /// The class token, usually `IN`.
    class: String,

    /// The record type token.
    rtype: String,

    /// The record data, the remainder of the line.
    data: String,
}

impl Record {
    /// Creates a new record from its parts.
    pub fn new(
        name: impl Into<String>,
        ttl: Ttl,
        class: impl Into<String>,
        rtype: impl Into<String>,
        data: impl Into<String>,
    ) -> Self {
        Record {
            name: name.into(),
            ttl,
            class: class.into(),
            rtype: rtype.into(),
            data: data.into(),
        }
    }

    /// Parses a record line using the given context.
    ///
    /// The line has the form `<name> [<ttl>] <class> <type> <data>` where
    /// the data is everything after the type. If `<name>` is `@` or a
    /// relative name, the origin of `context` is appended. If the TTL is
    /// missing or zero, the default TTL of `context` is used. Data of TXT
    /// records is wrapped in quotes unless it already starts with one.
    pub fn parse(line: &str, context: &Context) -> Result<Self, RecordError> {
        let fields = Fields::split(line)?;

        let ttl = match fields.ttl {
            Some(ttl) => {
                Ttl::from_str(ttl).map_err(|_| RecordError::bad_ttl())?
            }
            None => context.default_ttl(),
        };

        let data = if fields.rtype == "TXT" && !fields.data.starts_with('"') {
            format!("\"{}\"", fields.data)
        } else {
            fields.data.into()
        };

        Ok(Record {
            name: qualify(fields.name, context.origin()),
            ttl: ttl.or_default_ttl(context.default_ttl()),
            class: fields.class.into(),
            rtype: fields.rtype.into(),
            data,
        })
    }

    /// Returns the owner name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the TTL.
    pub fn ttl(&self) -> Ttl {
        self.ttl
    }

    /// Returns the class token.
    pub fn class(&self) -> &str {
        &self.class
    }

    /// Returns the record type token.
    pub fn rtype(&self) -> &str {
        &self.rtype
    }

    /// Returns the record data.
    pub fn data(&self) -> &str {
        &self.data
    }
}

//--- Display

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.name, self.ttl, self.class, self.rtype, self.data
        )
    }
}

//------------ Fields --------------------------------------------------------

/// The fields of a record line before resolving them.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Fields<'a> {
    name: &'a str,
    ttl: Option<&'a str>,
    class: &'a str,
    rtype: &'a str,
    data: &'a str,
}

impl<'a> Fields<'a> {
    /// Splits a line into its fields.
    ///
    /// The second token is only taken as the TTL if it consists of digits
    /// and is followed by a class, a type, and at least one more white
    /// space character. Otherwise it is the class.
    fn split(line: &'a str) -> Result<Self, RecordError> {
        let tokens = token_spans(line);
        match tokens.first() {
            Some(&(0, _)) => {}
            Some(_) => return Err(RecordError::leading_space()),
            None => return Err(RecordError::missing_fields()),
        }

        let tokens = tokens.as_slice();
        let token = move |idx: usize| -> &'a str {
            let (start, end) = tokens[idx];
            &line[start..end]
        };
        let data = move |idx: usize| -> &'a str {
            match tokens.get(idx) {
                Some(&(start, _)) => &line[start..],
                None => "",
            }
        };
        let has_tail = move |idx: usize| tokens[idx].1 < line.len();

        if tokens.len() >= 4
            && token(1).bytes().all(|ch| ch.is_ascii_digit())
            && has_tail(3)
        {
            Ok(Fields {
                name: token(0),
                ttl: Some(token(1)),
                class: token(2),
                rtype: token(3),
                data: data(4),
            })
        } else if tokens.len() >= 3 && has_tail(2) {
            Ok(Fields {
                name: token(0),
                ttl: None,
                class: token(1),
                rtype: token(2),
                data: data(3),
            })
        } else {
            Err(RecordError::missing_fields())
        }
    }
}

/// Returns the byte ranges of the white space separated tokens of a line.
fn token_spans(line: &str) -> Vec<(usize, usize)> {
    let mut res = Vec::new();
    let mut start = None;
    for (idx, ch) in line.bytes().enumerate() {
        match (ch.is_ascii_whitespace(), start) {
            (true, Some(begin)) => {
                res.push((begin, idx));
                start = None;
            }
            (false, None) => start = Some(idx),
            _ => {}
        }
    }
    if let Some(begin) = start {
        res.push((begin, line.len()));
    }
    res
}

/// Makes an owner name absolute by appending the origin if necessary.
///
/// A name of `@` stands for the origin itself. Names ending in a dot are
/// already absolute and are returned unchanged.
fn qualify(name: &str, origin: &str) -> String {
    let name = if name == "@" { "" } else { name };
    if name.ends_with('.') {
        return name.into();
    }
    let joined = format!("{}.{}", name, origin);
    joined.trim_start_matches('.').into()
}

//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    fn example_context() -> Context {
        Context::with_origin("example.com.", Ttl::from_secs(3600))
    }

    fn parse(line: &str) -> Record {
        Record::parse(line, &example_context()).unwrap()
    }

    #[test]
    fn apex_owner() {
        let record = parse("@ 300 IN SOA ns1.example.com. admin 1 2 3 4 5");
        assert_eq!(record.name(), "example.com.");
        assert_eq!(record.ttl(), Ttl::from_secs(300));
        assert_eq!(record.rtype(), "SOA");
        assert_eq!(record.data(), "ns1.example.com. admin 1 2 3 4 5");
    }

    #[test]
    fn relative_owner() {
        let record = parse("www IN A 10.0.0.1");
        assert_eq!(record.name(), "www.example.com.");
        assert_eq!(record.ttl(), Ttl::from_secs(3600));
        assert_eq!(record.class(), "IN");
        assert_eq!(record.data(), "10.0.0.1");
    }

    #[test]
    fn absolute_owner() {
        let record = parse("sub.other.net. IN A 10.0.0.2");
        assert_eq!(record.name(), "sub.other.net.");
    }

    #[test]
    fn without_origin() {
        let context = Context::new();
        let record = Record::parse("@ 60 IN NS ns1.", &context).unwrap();
        assert_eq!(record.name(), "");
        let record = Record::parse("www 60 IN A 10.0.0.1", &context).unwrap();
        assert_eq!(record.name(), "www.");
        assert_eq!(record.ttl(), Ttl::from_secs(60));
    }

    #[test]
    fn zero_ttl_uses_default() {
        assert_eq!(parse("www 0 IN A 10.0.0.1").ttl(), Ttl::from_secs(3600));
        let record =
            Record::parse("www IN A 10.0.0.1", &Context::new()).unwrap();
        assert_eq!(record.ttl(), Ttl::ZERO);
    }

    #[test]
    fn txt_quoting() {
        assert_eq!(parse("@ IN TXT hello world").data(), "\"hello world\"");
        assert_eq!(
            parse("@ IN TXT \"v=spf1 -all\"").data(),
            "\"v=spf1 -all\""
        );
        assert_eq!(parse("@ IN TXT ").data(), "\"\"");
        assert_eq!(parse("@ IN txt hello").data(), "hello");
    }

    #[test]
    fn data_is_verbatim() {
        let record = parse("@ IN MX 10   mail.example.com.  ");
        assert_eq!(record.data(), "10   mail.example.com.  ");
        let record = parse("@\tIN\tMX\t10 mail");
        assert_eq!(record.data(), "10 mail");
    }

    #[test]
    fn numeric_second_token() {
        // Enough fields: the number is the TTL.
        let record = parse("www 600 IN A 10.0.0.1");
        assert_eq!(record.ttl(), Ttl::from_secs(600));
        assert_eq!(record.class(), "IN");

        // Too few fields for a TTL: the number is the class.
        let record = parse("www 600 IN A");
        assert_eq!(record.ttl(), Ttl::from_secs(3600));
        assert_eq!(record.class(), "600");
        assert_eq!(record.rtype(), "IN");
        assert_eq!(record.data(), "A");

        // Same with nothing after the type.
        let record = parse("www 600 IN A ");
        assert_eq!(record.class(), "IN");
        assert_eq!(record.rtype(), "A");
        assert_eq!(record.data(), "");
    }

    #[test]
    fn malformed_lines() {
        let context = example_context();
        assert_eq!(
            Record::parse("www IN A", &context),
            Err(RecordError::missing_fields())
        );
        assert_eq!(
            Record::parse("www", &context),
            Err(RecordError::missing_fields())
        );
        assert_eq!(
            Record::parse("   ", &context),
            Err(RecordError::missing_fields())
        );
        assert_eq!(
            Record::parse("  www IN A 10.0.0.1", &context),
            Err(RecordError::leading_space())
        );
        assert_eq!(
            Record::parse("www 4294967296 IN A 10.0.0.1", &context),
            Err(RecordError::bad_ttl())
        );
    }

    #[test]
    fn comments_are_not_special() {
        let context = example_context();
        assert!(Record::parse("; short", &context).is_err());
        let record =
            Record::parse("; a longer comment line", &context).unwrap();
        assert_eq!(record.name(), ";.example.com.");
        assert_eq!(record.rtype(), "longer");
    }
}
