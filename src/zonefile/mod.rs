//! Reading, sorting, and writing of zonefiles.

pub mod directive;
pub mod error;
pub mod format;
pub mod present;
pub mod record;
pub mod sort;
