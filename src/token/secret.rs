//! Redacted CSRF token wrapper.

// self
use crate::{
	_prelude::*,
	token::{compare, generator::TokenGenerator},
};

/// CSRF token secret that keeps its value out of `Debug` and `Display` output.
///
/// Equality is evaluated in constant time.
#[derive(Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CsrfToken(String);
impl CsrfToken {
	/// Wraps a token string as-is; the value's shape is not checked.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Generates a fresh token with the default [`TokenGenerator`].
	pub fn generate() -> Self {
		TokenGenerator::default().generate()
	}

	/// Returns the inner token value. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}

	/// Byte length of the token.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns `true` when the token is the empty string.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Constant-time comparison against a candidate string.
	pub fn matches(&self, candidate: &str) -> bool {
		compare::tokens_match(&self.0, candidate)
	}

	/// Consumes the wrapper, returning the raw token.
	pub fn into_inner(self) -> String {
		self.0
	}
}
impl PartialEq for CsrfToken {
	fn eq(&self, other: &Self) -> bool {
		self.matches(other.expose())
	}
}
impl Eq for CsrfToken {}
impl AsRef<str> for CsrfToken {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl From<String> for CsrfToken {
	fn from(value: String) -> Self {
		Self(value)
	}
}
impl From<&str> for CsrfToken {
	fn from(value: &str) -> Self {
		Self(value.to_owned())
	}
}
impl Debug for CsrfToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("CsrfToken").field(&"<redacted>").finish()
	}
}
impl Display for CsrfToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}
