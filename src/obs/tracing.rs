// self
use crate::{_prelude::*, guard::GuardState, obs::ValidationOutcome};

/// A span builder used around token validation.
#[derive(Clone, Debug)]
pub struct ValidationSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl ValidationSpan {
	/// Creates a new span tagged with the provided stage and the guard's current state.
	pub fn new(stage: &'static str, state: GuardState) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::debug_span!("csrf_guard.validate", stage, state = state.as_str());

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (stage, state);

			Self {}
		}
	}

	/// Enters the span for the remainder of the enclosing scope.
	pub fn entered(self) -> ValidationSpanGuard {
		#[cfg(feature = "tracing")]
		{
			ValidationSpanGuard { guard: self.span.entered() }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = self;

			ValidationSpanGuard {}
		}
	}
}

/// RAII guard returned by [`ValidationSpan::entered`].
pub struct ValidationSpanGuard {
	#[cfg(feature = "tracing")]
	#[allow(dead_code)]
	guard: tracing::span::EnteredSpan,
}
impl Debug for ValidationSpanGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("ValidationSpanGuard(..)")
	}
}

/// Emits a `debug` event with the outcome label (when enabled).
pub fn log_validation_outcome(outcome: ValidationOutcome) {
	#[cfg(feature = "tracing")]
	{
		tracing::debug!(outcome = outcome.as_str(), "CSRF token validated.");
	}

	#[cfg(not(feature = "tracing"))]
	{
		let _ = outcome;
	}
}
