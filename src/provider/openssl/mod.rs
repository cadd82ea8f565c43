//! OpenSSL-based AEAD provider.

mod aead;

use super::AeadProvider;

/// AEAD provider backed by the [rust-openssl](https://crates.io/crates/openssl) bindings.
///
/// OpenSSL derives the initial counter block for IVs other than 96 bit itself,
/// so every non-empty IV length is supported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OpensslProvider;

impl AeadProvider for OpensslProvider {
    fn name(&self) -> &str {
        "openssl"
    }
}
