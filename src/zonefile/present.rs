//! Presenting records as column-aligned zonefile text.
//!
//! Modelled roughly after `std::fmt::Display`.
//!
//! Each record is printed on its own line as
//!
//! ```text
//! <name> <ttl> <class> <type> <data>
//! ```
//!
//! where the name is left-justified to the width of the longest name of
//! all records presented together, the TTL is right-aligned in five
//! columns, and the type is left-justified in five columns. Values wider
//! than their column are printed in full.

use super::record::Record;
use core::fmt;

/// The width of the TTL column.
const TTL_WIDTH: usize = 5;

/// The width of the record type column.
const TYPE_WIDTH: usize = 5;

pub struct ZoneFileFormatter<'a> {
    buf: &'a mut (dyn fmt::Write + 'a),

    /// The width of the name column.
    name_width: usize,
}

/// Prints its field in a zonefile format when [`Display`](fmt::Display)ed
///
/// This type is typically constructed by calling
/// [`ZoneFileFormat::display_zone_file`].
///
/// ```
/// use zonefmt::{Record, Ttl};
/// use zonefmt::zonefile::present::ZoneFileFormat;
///
/// let records = [
///     Record::new("example.com.", Ttl::from_secs(3600), "IN", "NS", "ns1"),
///     Record::new("mail.example.com.", Ttl::from_secs(60), "IN", "A", "192.0.2.25"),
/// ];
///
/// assert_eq!(
///     records.display_zone_file().to_string(),
///     "example.com.       3600 IN NS    ns1\n\
///      mail.example.com.    60 IN A     192.0.2.25\n"
/// );
/// ```
pub struct Display<'a, T: ?Sized>(&'a T);

impl<'a, T: ZoneFileFormat + ?Sized> fmt::Display for Display<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.write_presentation(f)
    }
}

/// Print as presentation (i.e. zonefile) format
///
/// This trait resembles the standard [`std::fmt::Display`] trait.
pub trait ZoneFileFormat {
    /// Write `self` to the `ZoneFileFormatter`
    fn present(&self, w: &mut ZoneFileFormatter) -> fmt::Result;

    /// Returns the width of the name column needed to present `self`.
    fn name_width(&self) -> usize;

    fn write_presentation<W: fmt::Write>(&self, mut w: W) -> fmt::Result {
        let mut formatter = ZoneFileFormatter {
            name_width: self.name_width(),
            buf: &mut w,
        };
        self.present(&mut formatter)
    }

    fn to_presentation_string(&self) -> String {
        self.display_zone_file().to_string()
    }

    /// Wrap the value so that it will be displayed in zone file format
    fn display_zone_file(&self) -> Display<'_, Self> {
        Display(self)
    }
}

impl ZoneFileFormatter<'_> {
    pub fn format<P: ZoneFileFormat + ?Sized>(
        &mut self,
        item: &P,
    ) -> fmt::Result {
        item.present(self)
    }

    /// Returns the width of the name column.
    pub fn name_width(&self) -> usize {
        self.name_width
    }

    pub fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> fmt::Result {
        self.buf.write_fmt(args)
    }
}

impl fmt::Write for ZoneFileFormatter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.buf.write_str(s)
    }

    fn write_char(&mut self, c: char) -> fmt::Result {
        self.buf.write_char(c)
    }

    fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> fmt::Result {
        self.buf.write_fmt(args)
    }
}

//------------ Record --------------------------------------------------------

impl ZoneFileFormat for Record {
    fn present(&self, f: &mut ZoneFileFormatter) -> fmt::Result {
        let name_width = f.name_width();
        writeln!(
            f,
            "{:<name_width$} {:>ttl_width$} {} {:<type_width$} {}",
            self.name(),
            self.ttl().as_secs(),
            self.class(),
            self.rtype(),
            self.data(),
            name_width = name_width,
            ttl_width = TTL_WIDTH,
            type_width = TYPE_WIDTH,
        )
    }

    fn name_width(&self) -> usize {
        self.name().chars().count()
    }
}

//------------ [Record] ------------------------------------------------------

impl ZoneFileFormat for [Record] {
    fn present(&self, f: &mut ZoneFileFormatter) -> fmt::Result {
        for record in self {
            f.format(record)?;
        }
        Ok(())
    }

    fn name_width(&self) -> usize {
        self.iter().map(Record::name_width).max().unwrap_or(0)
    }
}

//============ Tests =========================================================
