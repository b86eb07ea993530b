//! Timing-safe token comparison.

// crates.io
use subtle::ConstantTimeEq;

/// Compares two token strings without short-circuiting on the first differing byte.
///
/// Token length is not treated as secret: inputs of different lengths are rejected immediately.
pub fn tokens_match(a: &str, b: &str) -> bool {
	a.as_bytes().ct_eq(b.as_bytes()).into()
}

/// Like [`tokens_match`] but rejects absent or empty inputs before comparing.
pub fn present_tokens_match(a: Option<&str>, b: Option<&str>) -> bool {
	match (a, b) {
		(Some(a), Some(b)) if !a.is_empty() && !b.is_empty() => tokens_match(a, b),
		_ => false,
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn equal_tokens_match() {
		assert!(tokens_match("abc123", "abc123"));
		assert!(tokens_match("", ""));
	}

	#[test]
	fn differing_tokens_do_not_match() {
		assert!(!tokens_match("abc123", "abc124"));
		assert!(!tokens_match("abc123", "abc12"));
		assert!(!tokens_match("abc", "ABC"));
	}

	#[test]
	fn present_match_rejects_absent_and_empty() {
		assert!(present_tokens_match(Some("x"), Some("x")));
		assert!(!present_tokens_match(None, Some("x")));
		assert!(!present_tokens_match(Some("x"), None));
		assert!(!present_tokens_match(None, None));
		assert!(!present_tokens_match(Some(""), Some("")));
	}
}
