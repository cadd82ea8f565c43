use super::OpensslProvider;
use crate::{
    algorithm::AeadAlgorithm,
    error::ProviderError,
    provider::{AeadContext, AeadDecrypt, AeadEncrypt, Result},
};

impl AeadEncrypt for OpensslProvider {
    fn encrypt(&self, ctx: &AeadContext, io_buffer: &mut [u8]) -> Result<Vec<u8>> {
        check_context(ctx)?;

        let mut tag = vec![0u8; ctx.algorithm.tag_len()];
        // TODO this allocates a new vec, the Crypter API could encrypt into io_buffer directly
        let out = openssl::symm::encrypt_aead(
            ctx.algorithm.into(),
            ctx.key,
            Some(ctx.iv),
            ctx.aad,
            io_buffer,
            &mut tag,
        )?;
        copy_to_buffer(io_buffer, &out);

        Ok(tag)
    }
}

impl AeadDecrypt for OpensslProvider {
    fn decrypt(&self, ctx: &AeadContext, io_buffer: &mut [u8], tag: &[u8]) -> Result<()> {
        check_context(ctx)?;

        if tag.len() != ctx.algorithm.tag_len() {
            log::debug!("Tag of {} bytes does not fit the algorithm", tag.len());
            return Err(ProviderError::AuthenticationFailed);
        }

        let out = openssl::symm::decrypt_aead(
            ctx.algorithm.into(),
            ctx.key,
            Some(ctx.iv),
            ctx.aad,
            io_buffer,
            tag,
        )
        .map_err(|err| {
            log::debug!("Decryption failed, OpenSSL error stack: {err}");
            ProviderError::AuthenticationFailed
        })?;
        copy_to_buffer(io_buffer, &out);

        Ok(())
    }
}

/// OpenSSL panics on short keys, so the context is validated before calling into it.
fn check_context(ctx: &AeadContext) -> Result<()> {
    ctx.check_key_len()?;
    if ctx.iv.is_empty() {
        log::debug!("OpenSSL cannot process an empty IV");
        return Err(ProviderError::UnsupportedIvLength(0));
    }

    Ok(())
}

fn copy_to_buffer(io_buffer: &mut [u8], out: &[u8]) {
    debug_assert!(
        out.len() == io_buffer.len(),
        "For a symmetric encryption it is given that the output has the same length as the input"
    );
    io_buffer.copy_from_slice(out);
}

impl From<openssl::error::ErrorStack> for ProviderError {
    fn from(err: openssl::error::ErrorStack) -> Self {
        log::debug!("Encryption failed, OpenSSL error stack: {err}");
        ProviderError::Other(err.to_string())
    }
}

impl From<AeadAlgorithm> for openssl::symm::Cipher {
    fn from(algorithm: AeadAlgorithm) -> Self {
        match algorithm {
            AeadAlgorithm::Aes128Gcm => openssl::symm::Cipher::aes_128_gcm(),
            AeadAlgorithm::Aes256Gcm => openssl::symm::Cipher::aes_256_gcm(),
        }
    }
}
