//! Minimal CSRF token guard: CSPRNG-backed token generation, constant-time validation, and
//! redacted secrets that stay out of logs.
//!
//! ```
//! use csrf_guard::{Error, TokenGuard};
//!
//! let mut guard = TokenGuard::new();
//!
//! assert!(matches!(guard.validate_token(Some("abc123")), Err(Error::InvalidState)));
//!
//! guard.set_token("abc123");
//!
//! assert!(guard.validate_token(Some("abc123")).unwrap());
//! assert!(!guard.validate_token(Some("xyz")).unwrap());
//! ```

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod error;
pub mod guard;
pub mod obs;
pub mod token;

pub use error::{ConfigError, Error, Result};
pub use guard::{GuardState, TokenGuard};
pub use token::{CsrfToken, TOKEN_LEN, TokenGenerator, tokens_match};

mod _prelude {
	pub use std::fmt::{Debug, Display, Formatter, Result as FmtResult};

	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;

	pub use crate::error::{ConfigError, Error, Result};
}

#[cfg(test)] use metrics_util as _;
