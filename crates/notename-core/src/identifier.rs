//! Note identifiers.
//!
//! An identifier is the creation timestamp formatted as `YYYYMMDDTHHMMSS`,
//! always [`IDENTIFIER_WIDTH`] characters wide.

use chrono::{NaiveDate, NaiveDateTime};

/// Width of a complete identifier segment.
pub const IDENTIFIER_WIDTH: usize = 15;

const IDENTIFIER_FORMAT: &str = "%Y%m%dT%H%M%S";
const DATE_FORMAT: &str = "%Y%m%d";

/// The full identifier for a note created at `at`.
pub fn from_datetime(at: &NaiveDateTime) -> String {
    at.format(IDENTIFIER_FORMAT).to_string()
}

/// The identifier prefix shared by every note created on `date`.
pub fn date_prefix(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a complete identifier back into its timestamp.
pub fn parse(identifier: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(identifier, IDENTIFIER_FORMAT).ok()
}
