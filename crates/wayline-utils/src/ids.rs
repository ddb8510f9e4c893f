//! Short unique identifier generation.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

fn to_base36(mut value: u64) -> String {
	if value == 0 {
		return "0".to_string();
	}
	let mut digits = Vec::new();
	while value > 0 {
		digits.push(BASE36[(value % 36) as usize]);
		value /= 36;
	}
	digits.reverse();
	String::from_utf8(digits).expect("base36 digits are ASCII")
}

/// Generates a short, app-unique identifier from the current time plus
/// a random component, both base36-encoded. Not cryptographically
/// strong; use a UUID for anything security-sensitive.
pub fn generate_id() -> String {
	let millis = SystemTime::now()
		.duration_since(UNIX_EPOCH)
		.map(|elapsed| elapsed.as_millis() as u64)
		.unwrap_or_default();
	let random: u64 = rand::thread_rng().r#gen();
	format!("{}{}", to_base36(random), to_base36(millis))
}
