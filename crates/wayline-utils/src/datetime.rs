//! Date formatting helpers.

use std::fmt;

use chrono::{DateTime, TimeZone};

/// Formats a timestamp as `DD/MM/YYYY`.
pub fn format_dmy<Tz>(timestamp: &DateTime<Tz>) -> String
where
	Tz: TimeZone,
	Tz::Offset: fmt::Display,
{
	timestamp.format("%d/%m/%Y").to_string()
}

/// Formats a timestamp as `DD/MM/YYYY HH:MM`.
pub fn format_dmy_hm<Tz>(timestamp: &DateTime<Tz>) -> String
where
	Tz: TimeZone,
	Tz::Offset: fmt::Display,
{
	timestamp.format("%d/%m/%Y %H:%M").to_string()
}

#[cfg(test)]
mod tests {
	use chrono::{TimeZone, Utc};

	use super::*;

	#[test]
	fn test_format_dmy_pads_day_and_month() {
		let timestamp = Utc.with_ymd_and_hms(2026, 3, 5, 9, 7, 0).unwrap();
		assert_eq!(format_dmy(&timestamp), "05/03/2026");
	}

	#[test]
	fn test_format_dmy_hm() {
		let timestamp = Utc.with_ymd_and_hms(2026, 12, 31, 23, 59, 0).unwrap();
		assert_eq!(format_dmy_hm(&timestamp), "31/12/2026 23:59");
	}
}
