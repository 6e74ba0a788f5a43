//! Formatting an entire zonefile.
//!
//! This module runs the pipeline: every line of the zonefile is either
//! handed to the directive [`Context`] or parsed into a [`Record`], the
//! records are sorted, and then presented as text.

use super::directive::Context;
use super::error::Error;
use super::present::ZoneFileFormat;
use super::record::Record;
use super::sort::Priorities;
use core::fmt;
use core::str::FromStr;
use std::io;
use tracing::{debug, trace, warn};

//------------ Zonefile ------------------------------------------------------

/// The records of a zonefile.
///
/// A value is created by loading a zonefile via [`load`][Self::load] or
/// from a string via `FromStr`. In both cases, all lines are processed
/// right away. Lines that can’t be parsed as records are logged and
/// skipped. Problems with directives abort loading.
///
/// The records are kept in the order they appeared in until
/// [`sort`][Self::sort] is called.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Zonefile {
    records: Vec<Record>,
}

impl Zonefile {
    /// Creates a value by loading the data from the given reader.
    pub fn load(read: &mut impl io::Read) -> Result<Self, Error> {
        let mut src = String::new();
        read.read_to_string(&mut src)?;
        src.parse()
    }

    /// Creates a value from zonefile text using the given initial context.
    pub fn parse_with_context(
        src: &str,
        mut context: Context,
    ) -> Result<Self, Error> {
        let mut records = Vec::new();
        for (idx, line) in src.lines().enumerate() {
            let line_no = idx + 1;
            if line.trim().is_empty() {
                continue;
            }
            if line.starts_with('$') {
                context
                    .process(line)
                    .map_err(|err| Error::directive(line_no, err))?;
                continue;
            }
            match Record::parse(line, &context) {
                Ok(record) => {
                    trace!(line = line_no, %record, "parsed record");
                    records.push(record)
                }
                Err(err) => {
                    warn!(
                        line = line_no,
                        content = line,
                        "Unparsable record, ignoring: {}",
                        err
                    );
                }
            }
        }
        debug!(records = records.len(), "zonefile loaded");
        Ok(Zonefile { records })
    }

    /// Returns the records.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns whether there are no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sorts the records according to the given priorities.
    pub fn sort(&mut self, priorities: &Priorities) {
        priorities.sort(&mut self.records)
    }

    /// Writes the records in presentation format.
    pub fn write(
        &self,
        target: &mut impl io::Write,
    ) -> Result<(), io::Error> {
        write!(target, "{}", self.records.display_zone_file())
    }
}

//--- FromStr

impl FromStr for Zonefile {
    type Err = Error;

    fn from_str(src: &str) -> Result<Self, Self::Err> {
        Self::parse_with_context(src, Context::new())
    }
}

//--- Display

impl fmt::Display for Zonefile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.records.write_presentation(f)
    }
}

//------------ format_zone ---------------------------------------------------

/// Formats the zonefile read from `read`.
///
/// Returns the complete formatted text. Nothing is returned if processing
/// fails, so a caller can safely write the result back to where it read the
/// zonefile from.
pub fn format_zone(
    read: &mut impl io::Read,
    priorities: &Priorities,
) -> Result<String, Error> {
    let mut zonefile = Zonefile::load(read)?;
    zonefile.sort(priorities);
    Ok(zonefile.to_string())
}

//============ Tests =========================================================
