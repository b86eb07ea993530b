// self
use crate::obs::ValidationOutcome;

/// Records a validation outcome via the global metrics recorder (when enabled).
pub fn record_validation_outcome(outcome: ValidationOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!("csrf_guard_validation_total", "outcome" => outcome.as_str()).increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = outcome;
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn record_validation_outcome_noop_without_recorder() {
		record_validation_outcome(ValidationOutcome::Mismatch);
	}

	#[cfg(feature = "metrics")]
	#[test]
	fn every_validation_increments_its_outcome_counter() {
		// crates.io
		use metrics_util::debugging::{DebugValue, DebuggingRecorder};
		// self
		use crate::guard::TokenGuard;

		let recorder = DebuggingRecorder::new();
		let snapshotter = recorder.snapshotter();

		metrics::with_local_recorder(&recorder, || {
			let guard = TokenGuard::with_token("abc123");

			assert_eq!(guard.validate_token(Some("abc123")), Ok(true));
			assert_eq!(guard.validate_token(Some("xyz")), Ok(false));
			assert_eq!(guard.validate_token(None), Ok(false));
			assert!(TokenGuard::new().validate_token(Some("abc123")).is_err());
		});

		let counts = snapshotter
			.snapshot()
			.into_vec()
			.into_iter()
			.filter(|(key, ..)| key.key().name() == "csrf_guard_validation_total")
			.map(|(key, _, _, value)| {
				let outcome = key
					.key()
					.labels()
					.find(|label| label.key() == "outcome")
					.map(|label| label.value().to_owned())
					.expect("Validation counter should carry an outcome label.");
				let DebugValue::Counter(count) = value else {
					panic!("Validation metric should be a counter.");
				};

				(outcome, count)
			})
			.collect::<std::collections::BTreeMap<_, _>>();

		for outcome in [
			ValidationOutcome::Match,
			ValidationOutcome::Mismatch,
			ValidationOutcome::Missing,
			ValidationOutcome::Unset,
		] {
			assert_eq!(counts.get(outcome.as_str()), Some(&1), "Outcome `{outcome}` should count once.");
		}
		assert_eq!(counts.len(), 4);
	}
}
