//! Optional observability helpers for token validation.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to run validations inside spans named `csrf_guard.validate` with a `stage`
//!   field and to emit a `debug` event carrying the `outcome` label.
//! - Enable `metrics` to increment the `csrf_guard_validation_total` counter for every validation,
//!   labeled by `outcome`.
//!
//! Token values are never recorded.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Result labels recorded for each validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValidationOutcome {
	/// Candidate equals the expected token.
	Match,
	/// Candidate was present but differs from the expected token.
	Mismatch,
	/// Candidate was absent or empty.
	Missing,
	/// Guard held no token to validate against.
	Unset,
}
impl ValidationOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			ValidationOutcome::Match => "match",
			ValidationOutcome::Mismatch => "mismatch",
			ValidationOutcome::Missing => "missing",
			ValidationOutcome::Unset => "unset",
		}
	}

	/// Returns `true` only for [`ValidationOutcome::Match`].
	pub const fn is_match(self) -> bool {
		matches!(self, ValidationOutcome::Match)
	}
}
impl Display for ValidationOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Records an outcome through every enabled observability backend.
pub fn observe_validation(outcome: ValidationOutcome) {
	log_validation_outcome(outcome);
	record_validation_outcome(outcome);
}
