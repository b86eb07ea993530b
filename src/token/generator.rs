//! CSPRNG-backed token generation.

// crates.io
use rand::{CryptoRng, RngCore};
use sha2::{Digest, Sha256};
// self
use crate::{_prelude::*, token::secret::CsrfToken};

/// Smallest accepted entropy size in bytes.
pub const MIN_ENTROPY_BYTES: usize = 16;
/// Largest accepted entropy size in bytes.
pub const MAX_ENTROPY_BYTES: usize = 64;
/// Entropy size used by [`TokenGenerator::default`].
pub const DEFAULT_ENTROPY_BYTES: usize = MIN_ENTROPY_BYTES;
/// Length of every generated token: a hex-encoded SHA-256 digest.
pub const TOKEN_LEN: usize = 64;

/// Produces fixed-length hex tokens from a cryptographically secure random source.
///
/// Random bytes are hashed with SHA-256 and hex encoded, so the output is always
/// [`TOKEN_LEN`] lowercase hex digits regardless of the configured entropy size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenGenerator {
	entropy_bytes: usize,
}
impl TokenGenerator {
	/// Creates a generator drawing `entropy_bytes` random bytes per token.
	pub fn new(entropy_bytes: usize) -> Result<Self, ConfigError> {
		if !(MIN_ENTROPY_BYTES..=MAX_ENTROPY_BYTES).contains(&entropy_bytes) {
			return Err(ConfigError::EntropyOutOfRange {
				requested: entropy_bytes,
				min: MIN_ENTROPY_BYTES,
				max: MAX_ENTROPY_BYTES,
			});
		}

		Ok(Self { entropy_bytes })
	}

	/// Random bytes drawn per token.
	pub const fn entropy_bytes(&self) -> usize {
		self.entropy_bytes
	}

	/// Generates a token from the thread-local CSPRNG.
	pub fn generate(&self) -> CsrfToken {
		self.generate_with(&mut rand::rng())
	}

	/// Generates a token from the supplied cryptographically secure RNG.
	pub fn generate_with<R>(&self, rng: &mut R) -> CsrfToken
	where
		R: ?Sized + CryptoRng,
	{
		let mut buf = [0_u8; MAX_ENTROPY_BYTES];
		let entropy = &mut buf[..self.entropy_bytes];

		RngCore::fill_bytes(rng, entropy);

		CsrfToken::new(hex::encode(Sha256::digest(entropy)))
	}
}
impl Default for TokenGenerator {
	fn default() -> Self {
		Self { entropy_bytes: DEFAULT_ENTROPY_BYTES }
	}
}
