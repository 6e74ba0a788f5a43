//! TTL values.
//!
//! The [`Ttl`] type is a thin wrapper around the number of seconds a record
//! may be cached. Besides plain numbers as found in the TTL field of a
//! record, TTLs can be created from the duration expressions used by the
//! `$TTL` directive via [`Ttl::from_duration_str`].

use core::fmt;
use core::str::FromStr;

//------------ Constants -----------------------------------------------------

const NANOS_PER_SEC: u128 = 1_000_000_000;
const SECS_PER_MINUTE: u128 = 60;
const SECS_PER_HOUR: u128 = 3600;
const SECS_PER_DAY: u128 = 86400;
const SECS_PER_WEEK: u128 = 604800;

/// Fractional digits beyond this are ignored.
///
/// This keeps the fraction multiplied by the largest unit within `u128`.
const MAX_FRAC_DIGITS: u32 = 18;

//------------ Ttl -----------------------------------------------------------

/// A time-to-live value.
///
/// TTL values are defined by RFC 2181 as unsigned 32 bit integers. The value
/// zero has a special meaning when parsing zone files: a record whose TTL
/// is zero, either written out or left out entirely, receives the default
/// TTL of the zone instead.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Ttl(u32);

impl Ttl {
    /// A duration of zero time.
    pub const ZERO: Ttl = Ttl::from_secs(0);

    /// Creates a new `Ttl` from the specified number of seconds.
    #[must_use]
    #[inline]
    pub const fn from_secs(secs: u32) -> Self {
        Self(secs)
    }

    /// Returns the total time to live in seconds.
    ///
    /// # Examples
    ///
    /// ```
    /// use zonefmt::Ttl;
    ///
    /// let ttl = Ttl::from_secs(120);
    /// assert_eq!(ttl.as_secs(), 120);
    /// ```
    #[must_use]
    #[inline]
    pub const fn as_secs(&self) -> u32 {
        self.0
    }

    /// Returns true if this `Ttl` spans no time.
    #[must_use]
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns `self` unless it is zero, in which case returns `default`.
    #[must_use]
    #[inline]
    pub const fn or_default_ttl(self, default: Ttl) -> Ttl {
        if self.is_zero() {
            default
        } else {
            self
        }
    }

    /// Parses a duration expression into a `Ttl`.
    ///
    /// The expression is a sequence of terms, each consisting of a decimal
    /// number, possibly with a fraction, followed by a unit. Recognized
    /// units are `ns`, `us` (or `µs`), `ms`, `s`, `m`, and `h`, as in
    /// `1h30m`.
    ///
    /// Some forms common in zone files go beyond that grammar and are
    /// accepted as well:
    ///
    /// * a bare number without any unit, taken as seconds,
    /// * the units `d` for days and `w` for weeks,
    /// * the units `s`, `m`, `h`, `d`, and `w` in upper case.
    ///
    /// The result is truncated to whole seconds. It is an error if it
    /// doesn’t fit into 32 bits.
    ///
    /// # Examples
    ///
    /// ```
    /// use zonefmt::Ttl;
    ///
    /// assert_eq!(Ttl::from_duration_str("1h30m").unwrap().as_secs(), 5400);
    /// assert_eq!(Ttl::from_duration_str("3600").unwrap().as_secs(), 3600);
    /// assert_eq!(Ttl::from_duration_str("1.5m").unwrap().as_secs(), 90);
    /// assert_eq!(Ttl::from_duration_str("1D").unwrap().as_secs(), 86400);
    /// assert!(Ttl::from_duration_str("1x").is_err());
    /// ```
    pub fn from_duration_str(s: &str) -> Result<Self, ParseDurationError> {
        let s = match s.strip_prefix('+') {
            Some(s) => s,
            None => s,
        };
        if s.starts_with('-') {
            return Err(ParseDurationError::Negative);
        }
        if s.is_empty() {
            return Err(ParseDurationError::Empty);
        }

        // RFC 1035 style: plain seconds.
        if s.bytes().all(|ch| ch.is_ascii_digit()) {
            return u32::from_str(s)
                .map(Ttl)
                .map_err(|_| ParseDurationError::Overflow);
        }

        let mut nanos: u128 = 0;
        let mut rest = s;
        while !rest.is_empty() {
            let (term, tail) = DurationTerm::split_off(rest)?;
            nanos = nanos
                .checked_add(term.nanos()?)
                .ok_or(ParseDurationError::Overflow)?;
            rest = tail;
        }

        u32::try_from(nanos / NANOS_PER_SEC)
            .map(Ttl)
            .map_err(|_| ParseDurationError::Overflow)
    }
}

//--- FromStr

impl FromStr for Ttl {
    type Err = ParseDurationError;

    /// Parses the TTL field of a record, a plain number of seconds.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|ch| ch.is_ascii_digit()) {
            return Err(ParseDurationError::BadNumber);
        }
        u32::from_str(s)
            .map(Ttl)
            .map_err(|_| ParseDurationError::Overflow)
    }
}

//--- Display

impl fmt::Display for Ttl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}

//------------ DurationTerm --------------------------------------------------

/// A single `<number><unit>` term of a duration expression.
struct DurationTerm<'a> {
    int: &'a str,
    frac: &'a str,
    unit: &'a str,
}

impl<'a> DurationTerm<'a> {
    /// Splits the first term off `s`, returning it and the remainder.
    fn split_off(s: &'a str) -> Result<(Self, &'a str), ParseDurationError> {
        let int_end = s
            .find(|ch: char| !ch.is_ascii_digit())
            .unwrap_or(s.len());
        let (int, rest) = s.split_at(int_end);

        let (frac, rest) = match rest.strip_prefix('.') {
            Some(rest) => {
                let frac_end = rest
                    .find(|ch: char| !ch.is_ascii_digit())
                    .unwrap_or(rest.len());
                rest.split_at(frac_end)
            }
            None => ("", rest),
        };
        if int.is_empty() && frac.is_empty() {
            return Err(ParseDurationError::BadNumber);
        }

        let unit_end = rest
            .find(|ch: char| ch.is_ascii_digit() || ch == '.')
            .unwrap_or(rest.len());
        let (unit, rest) = rest.split_at(unit_end);
        if unit.is_empty() {
            return Err(ParseDurationError::MissingUnit);
        }

        Ok((DurationTerm { int, frac, unit }, rest))
    }

    /// Returns the number of nanoseconds in the unit.
    fn unit_nanos(&self) -> Result<u128, ParseDurationError> {
        Ok(match self.unit {
            "ns" => 1,
            "us" | "µs" | "μs" => 1_000,
            "ms" => 1_000_000,
            "s" | "S" => NANOS_PER_SEC,
            "m" | "M" => SECS_PER_MINUTE * NANOS_PER_SEC,
            "h" | "H" => SECS_PER_HOUR * NANOS_PER_SEC,
            "d" | "D" => SECS_PER_DAY * NANOS_PER_SEC,
            "w" | "W" => SECS_PER_WEEK * NANOS_PER_SEC,
            _ => return Err(ParseDurationError::UnknownUnit),
        })
    }

    /// Returns the value of the term in nanoseconds.
    fn nanos(&self) -> Result<u128, ParseDurationError> {
        let unit = self.unit_nanos()?;
        let int = if self.int.is_empty() {
            0
        } else {
            u128::from_str(self.int)
                .map_err(|_| ParseDurationError::Overflow)?
        };
        let mut res = int
            .checked_mul(unit)
            .ok_or(ParseDurationError::Overflow)?;

        let frac = match self.frac.get(..MAX_FRAC_DIGITS as usize) {
            Some(frac) => frac,
            None => self.frac,
        };
        if !frac.is_empty() {
            let scale = 10u128.pow(frac.len() as u32);
            let frac = u128::from_str(frac)
                .map_err(|_| ParseDurationError::BadNumber)?;
            res = res
                .checked_add(frac * unit / scale)
                .ok_or(ParseDurationError::Overflow)?;
        }
        Ok(res)
    }
}

//------------ ParseDurationError --------------------------------------------

/// A duration or TTL value could not be parsed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseDurationError {
    /// The expression was empty.
    Empty,

    /// The expression had a minus sign.
    Negative,

    /// A term did not start with a number.
    BadNumber,

    /// A term had no unit.
    MissingUnit,

    /// A term had a unit we don’t know.
    UnknownUnit,

    /// The value does not fit into 32 bits of seconds.
    Overflow,
}

impl fmt::Display for ParseDurationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            ParseDurationError::Empty => "empty duration",
            ParseDurationError::Negative => "negative duration",
            ParseDurationError::BadNumber => "invalid number in duration",
            ParseDurationError::MissingUnit => "missing unit in duration",
            ParseDurationError::UnknownUnit => "unknown unit in duration",
            ParseDurationError::Overflow => "duration out of range",
        })
    }
}

impl std::error::Error for ParseDurationError {}

//============ Tests =========================================================
