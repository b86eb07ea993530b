//! Guard-level error types shared across token generation and validation.

// self
use crate::_prelude::*;

/// Guard-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical guard error exposed by public APIs.
#[derive(Debug, PartialEq, Eq, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),

	/// Validation was attempted before the guard held a token.
	#[error("CSRF guard has no token; set a token before validating.")]
	InvalidState,
}

/// Configuration failures raised while building guard components.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum ConfigError {
	/// Requested entropy size falls outside the supported range.
	#[error("Token entropy of {requested} bytes is outside the supported range {min}..={max}.")]
	EntropyOutOfRange {
		/// Byte count supplied by the caller.
		requested: usize,
		/// Smallest accepted byte count.
		min: usize,
		/// Largest accepted byte count.
		max: usize,
	},
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn config_errors_convert_into_guard_errors() {
		let err: Error = ConfigError::EntropyOutOfRange { requested: 4, min: 16, max: 64 }.into();

		assert!(matches!(err, Error::Config(ConfigError::EntropyOutOfRange { requested: 4, .. })));
		assert_eq!(
			err.to_string(),
			"Token entropy of 4 bytes is outside the supported range 16..=64."
		);
	}

	#[test]
	fn invalid_state_message_is_actionable() {
		assert_eq!(
			Error::InvalidState.to_string(),
			"CSRF guard has no token; set a token before validating."
		);
	}
}
