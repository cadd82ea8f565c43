//! Ring-based AEAD provider.

mod aead;

use super::AeadProvider;

/// AEAD provider backed by the [ring](https://crates.io/crates/ring) library.
///
/// ring only accepts 96 bit nonces, vectors with other IV lengths fail with
/// [`crate::error::ProviderError::UnsupportedIvLength`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RingProvider;

impl AeadProvider for RingProvider {
    fn name(&self) -> &str {
        "ring"
    }
}
