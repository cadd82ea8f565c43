use super::RingProvider;
use crate::{
    algorithm::AeadAlgorithm,
    error::ProviderError,
    provider::{AeadContext, AeadDecrypt, AeadEncrypt, Result},
};

use ring::aead::{Aad, BoundKey, Nonce, OpeningKey, SealingKey, UnboundKey, NONCE_LEN};

/// Hands out the vector's IV exactly once, every key is bound for a single operation.
struct SingleNonce {
    buffer: Option<[u8; NONCE_LEN]>,
}

impl TryFrom<&[u8]> for SingleNonce {
    type Error = ProviderError;

    fn try_from(iv: &[u8]) -> Result<Self> {
        let buffer = iv.try_into().map_err(|_| {
            log::debug!(
                "ring requires a nonce of {NONCE_LEN} bytes, got {}",
                iv.len()
            );
            ProviderError::UnsupportedIvLength(iv.len())
        })?;

        Ok(Self {
            buffer: Some(buffer),
        })
    }
}

impl ring::aead::NonceSequence for SingleNonce {
    fn advance(&mut self) -> std::result::Result<Nonce, ring::error::Unspecified> {
        self.buffer
            .take()
            .map(Nonce::assume_unique_for_key)
            .ok_or(ring::error::Unspecified)
    }
}

impl From<AeadAlgorithm> for &'static ring::aead::Algorithm {
    fn from(algorithm: AeadAlgorithm) -> Self {
        match algorithm {
            AeadAlgorithm::Aes128Gcm => &ring::aead::AES_128_GCM,
            AeadAlgorithm::Aes256Gcm => &ring::aead::AES_256_GCM,
        }
    }
}

fn unbound_key(ctx: &AeadContext) -> Result<UnboundKey> {
    ctx.check_key_len()?;
    UnboundKey::new(ctx.algorithm.into(), ctx.key).map_err(|_| ProviderError::InvalidKeyLength {
        algorithm: ctx.algorithm,
        expected: ctx.algorithm.key_len(),
        actual: ctx.key.len(),
    })
}

impl AeadEncrypt for RingProvider {
    fn encrypt(&self, ctx: &AeadContext, io_buffer: &mut [u8]) -> Result<Vec<u8>> {
        let mut sealing_key = SealingKey::new(unbound_key(ctx)?, SingleNonce::try_from(ctx.iv)?);

        let tag = sealing_key
            .seal_in_place_separate_tag(Aad::from(ctx.aad), io_buffer)
            .map_err(|_| {
                log::debug!("Encryption failed");
                ProviderError::Other("ring failed to seal".into())
            })?;

        Ok(tag.as_ref().to_vec())
    }
}

impl AeadDecrypt for RingProvider {
    fn decrypt(&self, ctx: &AeadContext, io_buffer: &mut [u8], tag: &[u8]) -> Result<()> {
        let mut opening_key = OpeningKey::new(unbound_key(ctx)?, SingleNonce::try_from(ctx.iv)?);

        // ring expects the tag appended to the ciphertext
        let mut in_out = [&*io_buffer, tag].concat();
        let plaintext = opening_key
            .open_in_place(Aad::from(ctx.aad), &mut in_out)
            .map_err(|_| {
                log::debug!("Decryption failed");
                ProviderError::AuthenticationFailed
            })?;

        debug_assert!(
            plaintext.len() == io_buffer.len(),
            "For a symmetric encryption it is given that the output has the same length as the input"
        );
        io_buffer.copy_from_slice(plaintext);

        Ok(())
    }
}
