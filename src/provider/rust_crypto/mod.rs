//! RustCrypto-based AEAD provider.
//!
//! This module uses pure Rust implementations from the RustCrypto project.

mod aead;

use super::AeadProvider;

/// AEAD provider backed by the [aes-gcm](https://crates.io/crates/aes-gcm) crate.
///
/// The crate fixes the nonce size at the type level, thus only a set of common IV lengths
/// (8, 12, 16, 60, 64 and 128 bytes) is supported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RustCryptoProvider;

impl AeadProvider for RustCryptoProvider {
    fn name(&self) -> &str {
        "rust-crypto"
    }
}
