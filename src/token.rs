//! CSRF token secrets, constant-time comparison, and CSPRNG-backed generation.

pub mod compare;
pub mod generator;
pub mod secret;

pub use compare::*;
pub use generator::*;
pub use secret::*;
