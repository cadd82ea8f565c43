//! The boundary to the AEAD implementation under test.
//!
//! Implementations provide in-place encryption ([`AeadEncrypt`]) and decryption with tag verification
//! ([`AeadDecrypt`]). [`AeadProvider`] builds the allocating `aead_encrypt`/`aead_decrypt_verify` operations on
//! top of them, which is what the [`crate::runner::Runner`] calls.
//!
//! Nonce handling, including the derivation for IVs other than 96 bit, is entirely up to the implementation.

use crate::{algorithm::AeadAlgorithm, error::ProviderError};

#[cfg(feature = "openssl")]
pub mod openssl;
#[cfg(feature = "ring")]
pub mod ring;
#[cfg(feature = "rust-crypto")]
pub mod rust_crypto;

cfg_if::cfg_if! {
    if #[cfg(feature = "rust-crypto")] {
        /// Provider of the default backend, the RustCrypto adapter.
        pub type DefaultProvider = rust_crypto::RustCryptoProvider;
    } else if #[cfg(feature = "openssl")] {
        /// Provider of the default backend, the OpenSSL adapter.
        pub type DefaultProvider = openssl::OpensslProvider;
    } else if #[cfg(feature = "ring")] {
        /// Provider of the default backend, the ring adapter.
        pub type DefaultProvider = ring::RingProvider;
    } else {
        compile_error!("At least one crypto backend (rust-crypto, openssl, ring) has to be configured.");
    }
}

/// Represents either success(T) or a failure ([`ProviderError`])
pub type Result<T> = std::result::Result<T, ProviderError>;

/// Inputs of a single AEAD operation besides the message itself
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AeadContext<'a> {
    pub algorithm: AeadAlgorithm,
    pub key: &'a [u8],
    pub iv: &'a [u8],
    pub aad: &'a [u8],
}

impl AeadContext<'_> {
    /// Fails with [`ProviderError::InvalidKeyLength`] if the key does not fit the algorithm.
    pub fn check_key_len(&self) -> Result<()> {
        let expected = self.algorithm.key_len();
        if self.key.len() != expected {
            log::debug!(
                "Rejecting key of {} bytes for {}",
                self.key.len(),
                self.algorithm
            );
            return Err(ProviderError::InvalidKeyLength {
                algorithm: self.algorithm,
                expected,
                actual: self.key.len(),
            });
        }

        Ok(())
    }
}

pub trait AeadEncrypt {
    /// Encrypts `io_buffer` in place and returns the authentication tag.
    fn encrypt(&self, ctx: &AeadContext, io_buffer: &mut [u8]) -> Result<Vec<u8>>;
}

pub trait AeadDecrypt {
    /// Verifies `tag` and decrypts `io_buffer` in place.
    /// Has to fail with [`ProviderError::AuthenticationFailed`] if the tag does not authenticate the input,
    /// the content of `io_buffer` is unspecified in that case.
    fn decrypt(&self, ctx: &AeadContext, io_buffer: &mut [u8], tag: &[u8]) -> Result<()>;
}

/// Ciphertext and tag computed by [`AeadProvider::aead_encrypt`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sealed {
    pub ciphertext: Vec<u8>,
    pub tag: Vec<u8>,
}

/// An AEAD implementation which can be checked for conformance
pub trait AeadProvider: AeadEncrypt + AeadDecrypt {
    /// used to label reports
    fn name(&self) -> &str;

    /// Encrypts a copy of `plaintext`. An empty plaintext is valid and still yields a tag.
    fn aead_encrypt(
        &self,
        algorithm: AeadAlgorithm,
        key: &[u8],
        iv: &[u8],
        aad: &[u8],
        plaintext: &[u8],
    ) -> Result<Sealed> {
        let ctx = AeadContext {
            algorithm,
            key,
            iv,
            aad,
        };
        let mut ciphertext = plaintext.to_vec();
        log::trace!(
            "{}: encrypting {} bytes with {} ({} bytes IV, {} bytes AAD)",
            self.name(),
            plaintext.len(),
            algorithm,
            iv.len(),
            aad.len()
        );

        let tag = self.encrypt(&ctx, &mut ciphertext)?;
        Ok(Sealed { ciphertext, tag })
    }

    /// Authenticates and decrypts a copy of `ciphertext`, returning the recovered plaintext.
    fn aead_decrypt_verify(
        &self,
        algorithm: AeadAlgorithm,
        key: &[u8],
        iv: &[u8],
        aad: &[u8],
        ciphertext: &[u8],
        tag: &[u8],
    ) -> Result<Vec<u8>> {
        let ctx = AeadContext {
            algorithm,
            key,
            iv,
            aad,
        };
        let mut plaintext = ciphertext.to_vec();
        log::trace!(
            "{}: decrypting {} bytes with {} ({} bytes IV, {} bytes AAD)",
            self.name(),
            ciphertext.len(),
            algorithm,
            iv.len(),
            aad.len()
        );

        self.decrypt(&ctx, &mut plaintext, tag)?;
        Ok(plaintext)
    }
}
