//! A formatter for DNS zone files.
//!
//! This crate reads the resource records of a zone file, resolves owner
//! names and TTLs that are left implicit through the `$ORIGIN` and `$TTL`
//! directives, orders the records by a configurable record type priority,
//! and writes them out again as column-aligned text.
//!
//! The work happens in four stages, each living in its own module below
//! [zonefile]:
//!
//! * [zonefile::directive] keeps track of the current origin and default
//!   TTL,
//! * [zonefile::record] turns a single line into a [`Record`],
//! * [zonefile::sort] orders records according to a [`Priorities`] table,
//!   and
//! * [zonefile::present] renders the sorted records.
//!
//! The [zonefile::format] module ties these together. Most users will only
//! need [`format_zone`]:
//!
//! ```
//! use zonefmt::{format_zone, Priorities};
//!
//! let zone = "$ORIGIN example.com.\n\
//!             $TTL 1h\n\
//!             www IN A 192.0.2.1\n\
//!             @ IN NS ns1\n";
//! let out = format_zone(&mut zone.as_bytes(), &Priorities::default())
//!     .unwrap();
//! assert_eq!(
//!     out,
//!     "example.com.      3600 IN NS    ns1\n\
//!      www.example.com.  3600 IN A     192.0.2.1\n"
//! );
//! ```
//!
//! # Reference of Feature Flags
//!
//! * `cli`: builds the `zonefmt` binary. This pulls in
//!   [clap](https://github.com/clap-rs/clap) and enables `logging`. This
//!   feature is enabled by default.
//! * `logging`: enables the [logging] module which sets up a
//!   [tracing-subscriber](https://github.com/tokio-rs/tracing) subscriber
//!   for the events emitted by the crate.

#![allow(renamed_and_removed_lints)]
#![allow(clippy::unknown_clippy_lints)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod base;
#[cfg(feature = "logging")]
#[cfg_attr(docsrs, doc(cfg(feature = "logging")))]
pub mod logging;
pub mod zonefile;

pub use self::base::Ttl;
pub use self::zonefile::format::{format_zone, Zonefile};
pub use self::zonefile::record::Record;
pub use self::zonefile::sort::Priorities;
