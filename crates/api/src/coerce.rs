//! Lenient numeric coercion for form input.
//!
//! Form fields are free text. Numbers are read from the longest numeric
//! prefix of the input so `"12abc"` yields `12` and input with no numeric
//! prefix yields `None`. Sign and range are not validated.

/// Parse the leading decimal float of `text`.
#[must_use]
pub fn parse_float(text: &str) -> Option<f64> {
	let text = text.trim_start();
	let prefix = float_prefix(text);
	if prefix.is_empty() {
		return None;
	}
	prefix.parse().ok()
}

/// Parse the leading integer of `text`, ignoring any fractional part.
///
/// Values outside the `i64` range yield `None`.
#[must_use]
pub fn parse_int(text: &str) -> Option<i64> {
	let text = text.trim_start();
	let bytes = text.as_bytes();
	let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
	let digits_start = end;
	while end < bytes.len() && bytes[end].is_ascii_digit() {
		end += 1;
	}
	if end == digits_start {
		return None;
	}
	text[..end].parse().ok()
}

/// Whether a search term should be treated as a product id.
#[must_use]
pub fn is_id_term(text: &str) -> bool {
	let text = text.trim();
	!text.is_empty() && text.bytes().all(|byte| byte.is_ascii_digit())
}

/// Whether `ch` can appear somewhere in a number typed into a form.
#[must_use]
pub fn is_numeric_char(ch: char) -> bool {
	ch.is_ascii_digit() || matches!(ch, '.' | '-' | '+' | 'e' | 'E')
}

fn float_prefix(text: &str) -> &str {
	let bytes = text.as_bytes();
	let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

	let int_start = end;
	while end < bytes.len() && bytes[end].is_ascii_digit() {
		end += 1;
	}
	let mut digits = end - int_start;

	if end < bytes.len() && bytes[end] == b'.' {
		let mut frac_end = end + 1;
		while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
			frac_end += 1;
		}
		let frac_digits = frac_end - (end + 1);
		if digits + frac_digits > 0 {
			end = frac_end;
			digits += frac_digits;
		}
	}

	if digits == 0 {
		return "";
	}

	if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
		let mut exp_end = end + 1;
		if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
			exp_end += 1;
		}
		let exp_digits = exp_end;
		while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
			exp_end += 1;
		}
		if exp_end > exp_digits {
			end = exp_end;
		}
	}

	&text[..end]
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn floats_read_the_numeric_prefix() {
		assert_eq!(parse_float("9.99"), Some(9.99));
		assert_eq!(parse_float("  12abc"), Some(12.0));
		assert_eq!(parse_float(".5"), Some(0.5));
		assert_eq!(parse_float("-3.25kg"), Some(-3.25));
		assert_eq!(parse_float("1e3"), Some(1000.0));
		assert_eq!(parse_float("2e"), Some(2.0));
		assert_eq!(parse_float("7."), Some(7.0));
	}

	#[test]
	fn floats_without_digits_are_rejected() {
		assert_eq!(parse_float(""), None);
		assert_eq!(parse_float("abc"), None);
		assert_eq!(parse_float("-"), None);
		assert_eq!(parse_float("."), None);
	}

	#[test]
	fn integers_stop_at_the_first_non_digit() {
		assert_eq!(parse_int("12.7"), Some(12));
		assert_eq!(parse_int(" -4 units"), Some(-4));
		assert_eq!(parse_int("+8"), Some(8));
		assert_eq!(parse_int("abc"), None);
		assert_eq!(parse_int(""), None);
		assert_eq!(parse_int("99999999999999999999"), None);
	}

	#[test]
	fn id_terms_are_all_digits() {
		assert!(is_id_term("1"));
		assert!(is_id_term(" 42 "));
		assert!(!is_id_term(""));
		assert!(!is_id_term("   "));
		assert!(!is_id_term("4a"));
		assert!(!is_id_term("-1"));
		assert!(!is_id_term("widget"));
	}
}
