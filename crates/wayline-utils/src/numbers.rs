//! Number helpers.

use rand::Rng;

/// Restricts a value to the `min..=max` range.
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
	if value < min {
		min
	} else if value > max {
		max
	} else {
		value
	}
}

/// Formats an integer with comma thousands separators.
///
/// ```
/// use wayline_utils::numbers::format_thousands;
///
/// assert_eq!(format_thousands(1_000_000), "1,000,000");
/// assert_eq!(format_thousands(-1234), "-1,234");
/// ```
pub fn format_thousands(value: i64) -> String {
	let digits = value.unsigned_abs().to_string();
	let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
	for (index, digit) in digits.chars().enumerate() {
		if index > 0 && (digits.len() - index) % 3 == 0 {
			grouped.push(',');
		}
		grouped.push(digit);
	}
	if value < 0 {
		format!("-{}", grouped)
	} else {
		grouped
	}
}

/// Formats an amount as a currency string: symbol prefix, comma
/// thousands separators, two decimal places. Negative amounts carry the
/// sign before the symbol.
///
/// ```
/// use wayline_utils::numbers::format_currency;
///
/// assert_eq!(format_currency(1500.0, "฿"), "฿1,500.00");
/// assert_eq!(format_currency(99.99, "$"), "$99.99");
/// assert_eq!(format_currency(-42.5, "$"), "-$42.50");
/// ```
pub fn format_currency(amount: f64, symbol: &str) -> String {
	let cents = (amount.abs() * 100.0).round() as i64;
	let formatted = format!("{}{}.{:02}", symbol, format_thousands(cents / 100), cents % 100);
	if amount < 0.0 {
		format!("-{}", formatted)
	} else {
		formatted
	}
}

/// Returns a random integer in `min..=max`.
///
/// # Panics
///
/// Panics when `min > max`.
pub fn random_int(min: i64, max: i64) -> i64 {
	rand::thread_rng().gen_range(min..=max)
}
