//! Ordering records by record type priority.

use super::record::Record;
use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;
use std::collections::HashMap;

//------------ Priorities ----------------------------------------------------

/// A table of sort priorities for record types.
///
/// Records are sorted by the priority of their type, lowest first. Types
/// that are not in the table have a priority of
/// [`DEFAULT_PRIORITY`][Self::DEFAULT_PRIORITY]. Records with the same
/// priority are sorted by owner name.
///
/// The default table gives SOA records a priority of 0, NS records 10, and
/// MX records 20, so these come before everything else in that order. The
/// table can be amended from a string via `FromStr`:
///
/// ```
/// use zonefmt::Priorities;
///
/// let priorities: Priorities = "A=5,TXT=200".parse().unwrap();
/// assert_eq!(priorities.priority("SOA"), 0);
/// assert_eq!(priorities.priority("A"), 5);
/// assert_eq!(priorities.priority("TXT"), 200);
/// assert_eq!(priorities.priority("AAAA"), 100);
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Priorities {
    table: HashMap<String, u64>,
}

impl Priorities {
    /// The priority of record types not present in the table.
    pub const DEFAULT_PRIORITY: u64 = 100;

    /// The built-in priorities.
    const BUILTIN: [(&'static str, u64); 3] =
        [("SOA", 0), ("NS", 10), ("MX", 20)];

    /// Creates a table without any entries.
    ///
    /// All record types will have the default priority.
    pub fn empty() -> Self {
        Priorities {
            table: HashMap::new(),
        }
    }

    /// Sets the priority of a record type.
    pub fn set(&mut self, rtype: impl Into<String>, priority: u64) {
        self.table.insert(rtype.into(), priority);
    }

    /// Returns the priority of a record type.
    pub fn priority(&self, rtype: &str) -> u64 {
        self.table
            .get(rtype)
            .copied()
            .unwrap_or(Self::DEFAULT_PRIORITY)
    }

    /// Compares two records.
    pub fn cmp_records(&self, left: &Record, right: &Record) -> Ordering {
        self.priority(left.rtype())
            .cmp(&self.priority(right.rtype()))
            .then_with(|| left.name().cmp(right.name()))
    }

    /// Sorts a slice of records.
    pub fn sort(&self, records: &mut [Record]) {
        records.sort_by(|left, right| self.cmp_records(left, right))
    }

    /// Adds the entries of an override string to the table.
    ///
    /// The string is a comma separated list of `<type>=<priority>` entries.
    /// Empty entries are ignored.
    pub fn extend_from_str(
        &mut self,
        s: &str,
    ) -> Result<(), ParsePrioritiesError> {
        for entry in s.split(',') {
            if entry.is_empty() {
                continue;
            }
            let (rtype, priority) = entry
                .split_once('=')
                .ok_or_else(|| ParsePrioritiesError::new(entry))?;
            let priority = u64::from_str(priority)
                .map_err(|_| ParsePrioritiesError::new(entry))?;
            self.set(rtype, priority);
        }
        Ok(())
    }
}

//--- Default

impl Default for Priorities {
    fn default() -> Self {
        let mut res = Self::empty();
        for (rtype, priority) in Self::BUILTIN {
            res.set(rtype, priority);
        }
        res
    }
}

//--- FromStr

impl FromStr for Priorities {
    type Err = ParsePrioritiesError;

    /// Parses an override string on top of the default table.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut res = Self::default();
        res.extend_from_str(s)?;
        Ok(res)
    }
}

//------------ ParsePrioritiesError ------------------------------------------

/// An entry of a priority override string was malformed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParsePrioritiesError {
    entry: String,
}

impl ParsePrioritiesError {
    fn new(entry: &str) -> Self {
        ParsePrioritiesError {
            entry: entry.into(),
        }
    }

    /// Returns the offending entry.
    pub fn entry(&self) -> &str {
        &self.entry
    }
}

impl fmt::Display for ParsePrioritiesError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "invalid sort entry '{}', expected <type>=<priority>",
            self.entry
        )
    }
}

impl std::error::Error for ParsePrioritiesError {}

//============ Tests =========================================================
