//! Basics.
//!
//! This module provides the small value types shared by the stages of the
//! zone file pipeline. Currently this is only the [`Ttl`] type used for both
//! per-record TTLs and the default TTL set through the `$TTL` directive.

pub use self::ttl::{ParseDurationError, Ttl};

pub mod ttl;
