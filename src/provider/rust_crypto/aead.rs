//! AEAD implementation for RustCrypto backend.

use super::RustCryptoProvider;
use crate::{
    algorithm::AeadAlgorithm,
    error::ProviderError,
    provider::{AeadContext, AeadDecrypt, AeadEncrypt, Result},
};
use aes_gcm::{
    aes::{Aes128, Aes256},
    AeadCore, AeadInPlace, AesGcm, KeyInit,
};
use cipher::{
    consts::{U12, U128, U16, U60, U64, U8},
    generic_array::GenericArray,
};

/// Monomorphizes `$f` for the AES variant `$aes` and the nonce size matching `ctx.iv`.
macro_rules! dispatch_iv_len {
    ($f:ident::<$aes:ty>($ctx:expr, $($args:expr),*)) => {
        match $ctx.iv.len() {
            8 => $f::<AesGcm<$aes, U8>>($ctx, $($args),*),
            12 => $f::<AesGcm<$aes, U12>>($ctx, $($args),*),
            16 => $f::<AesGcm<$aes, U16>>($ctx, $($args),*),
            60 => $f::<AesGcm<$aes, U60>>($ctx, $($args),*),
            64 => $f::<AesGcm<$aes, U64>>($ctx, $($args),*),
            128 => $f::<AesGcm<$aes, U128>>($ctx, $($args),*),
            iv_len => {
                log::debug!("No AES-GCM instance for an IV of {iv_len} bytes");
                Err(ProviderError::UnsupportedIvLength(iv_len))
            }
        }
    };
}

impl AeadEncrypt for RustCryptoProvider {
    fn encrypt(&self, ctx: &AeadContext, io_buffer: &mut [u8]) -> Result<Vec<u8>> {
        ctx.check_key_len()?;
        match ctx.algorithm {
            AeadAlgorithm::Aes128Gcm => {
                dispatch_iv_len!(encrypt_in_place_detached::<Aes128>(ctx, io_buffer))
            }
            AeadAlgorithm::Aes256Gcm => {
                dispatch_iv_len!(encrypt_in_place_detached::<Aes256>(ctx, io_buffer))
            }
        }
    }
}

impl AeadDecrypt for RustCryptoProvider {
    fn decrypt(&self, ctx: &AeadContext, io_buffer: &mut [u8], tag: &[u8]) -> Result<()> {
        ctx.check_key_len()?;
        match ctx.algorithm {
            AeadAlgorithm::Aes128Gcm => {
                dispatch_iv_len!(decrypt_in_place_detached::<Aes128>(ctx, io_buffer, tag))
            }
            AeadAlgorithm::Aes256Gcm => {
                dispatch_iv_len!(decrypt_in_place_detached::<Aes256>(ctx, io_buffer, tag))
            }
        }
    }
}

fn encrypt_in_place_detached<A>(ctx: &AeadContext, io_buffer: &mut [u8]) -> Result<Vec<u8>>
where
    A: AeadInPlace + AeadCore + KeyInit,
{
    let algo = init_from_context::<A>(ctx)?;
    let nonce = nonce_from_context::<A>(ctx)?;

    let tag = algo
        .encrypt_in_place_detached(&nonce, ctx.aad, io_buffer)
        .map_err(|err| {
            log::debug!("Encryption failed: {err}");
            ProviderError::Other(err.to_string())
        })?;

    Ok(tag.to_vec())
}

fn decrypt_in_place_detached<A>(ctx: &AeadContext, io_buffer: &mut [u8], tag: &[u8]) -> Result<()>
where
    A: AeadInPlace + AeadCore + KeyInit,
{
    let algo = init_from_context::<A>(ctx)?;
    let nonce = nonce_from_context::<A>(ctx)?;

    // a tag of another length can never authenticate
    let tag: aes_gcm::Tag<A::TagSize> = GenericArray::from_exact_iter(tag.iter().copied())
        .ok_or_else(|| {
            log::debug!("Tag of {} bytes does not fit the algorithm", tag.len());
            ProviderError::AuthenticationFailed
        })?;

    algo.decrypt_in_place_detached(&nonce, ctx.aad, io_buffer, &tag)
        .map_err(|err| {
            log::debug!("Decryption failed: {err}");
            ProviderError::AuthenticationFailed
        })
}

fn init_from_context<A>(ctx: &AeadContext) -> Result<A>
where
    A: KeyInit,
{
    A::new_from_slice(ctx.key).map_err(|_| ProviderError::InvalidKeyLength {
        algorithm: ctx.algorithm,
        expected: ctx.algorithm.key_len(),
        actual: ctx.key.len(),
    })
}

fn nonce_from_context<A>(ctx: &AeadContext) -> Result<aes_gcm::Nonce<A::NonceSize>>
where
    A: AeadCore,
{
    GenericArray::from_exact_iter(ctx.iv.iter().copied())
        .ok_or(ProviderError::UnsupportedIvLength(ctx.iv.len()))
}
