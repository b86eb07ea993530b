//! Single-token CSRF guard with a two-state lifecycle.

// self
use crate::{
	_prelude::*,
	obs::{self, ValidationOutcome, ValidationSpan},
	token::{self, CsrfToken},
};

/// Lifecycle state of a [`TokenGuard`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GuardState {
	/// No token has been set; validation fails with [`Error::InvalidState`].
	Unset,
	/// A token is held and candidates can be validated against it.
	Set,
}
impl GuardState {
	/// Returns a stable label suitable for logs.
	pub const fn as_str(self) -> &'static str {
		match self {
			GuardState::Unset => "unset",
			GuardState::Set => "set",
		}
	}
}

/// Holds the expected CSRF token and validates request-supplied candidates against it.
///
/// The guard performs no internal locking. Storing the token between requests and extracting
/// candidates from cookies, headers, or form fields is left to the caller.
#[derive(Clone, Default)]
pub struct TokenGuard {
	token: Option<CsrfToken>,
}
impl TokenGuard {
	/// Creates an empty guard in the [`GuardState::Unset`] state.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a guard seeded with an initial token.
	///
	/// An empty initial value is ignored and leaves the guard unset.
	pub fn with_token(token: impl Into<String>) -> Self {
		let token = token.into();
		let mut guard = Self::new();

		if !token.is_empty() {
			guard.set_token(token);
		}

		guard
	}

	/// Creates a guard holding a freshly generated token.
	pub fn generated() -> Self {
		Self { token: Some(CsrfToken::generate()) }
	}

	/// Stores `token` as the expected value, replacing any previous one.
	pub fn set_token(&mut self, token: impl Into<String>) -> &mut Self {
		self.token = Some(CsrfToken::new(token));

		self
	}

	/// Returns the stored token, if any.
	pub fn token(&self) -> Option<&str> {
		self.token.as_ref().map(CsrfToken::expose)
	}

	/// Current lifecycle state.
	pub fn state(&self) -> GuardState {
		if self.token.is_some() { GuardState::Set } else { GuardState::Unset }
	}

	/// Returns `true` once a token has been set.
	pub fn is_set(&self) -> bool {
		self.state() == GuardState::Set
	}

	/// Validates `candidate` against the stored token in constant time.
	///
	/// Absent or empty candidates yield `Ok(false)`. Fails with [`Error::InvalidState`] when no
	/// token has been set.
	pub fn validate_token(&self, candidate: Option<&str>) -> Result<bool> {
		let _span = ValidationSpan::new("validate_token", self.state()).entered();
		let outcome = self.evaluate(candidate);

		obs::observe_validation(outcome);

		match outcome {
			ValidationOutcome::Unset => Err(Error::InvalidState),
			outcome => Ok(outcome.is_match()),
		}
	}

	/// Compares two tokens in constant time; both must be present and non-empty.
	pub fn validate_tokens(a: Option<&str>, b: Option<&str>) -> bool {
		token::present_tokens_match(a, b)
	}

	/// Generates a fresh 64-digit hex token from the thread-local CSPRNG.
	pub fn generate_token() -> String {
		CsrfToken::generate().into_inner()
	}

	fn evaluate(&self, candidate: Option<&str>) -> ValidationOutcome {
		let Some(expected) = &self.token else {
			return ValidationOutcome::Unset;
		};

		match candidate {
			Some(candidate) if !candidate.is_empty() =>
				if expected.matches(candidate) {
					ValidationOutcome::Match
				} else {
					ValidationOutcome::Mismatch
				},
			_ => ValidationOutcome::Missing,
		}
	}
}
impl Debug for TokenGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("TokenGuard")
			.field("state", &self.state())
			.field("token", &self.token)
			.finish()
	}
}
