use crate::{algorithm::AeadAlgorithm, runner::TamperTarget};

/// Represents an error reported by an AEAD provider
#[derive(PartialEq, Eq, Clone, Debug, thiserror::Error)]
pub enum ProviderError {
    /// the key does not have the length required by the algorithm
    #[error("{algorithm} requires a key of {expected} bytes, got {actual}")]
    InvalidKeyLength {
        algorithm: AeadAlgorithm,
        expected: usize,
        actual: usize,
    },

    /// the algorithm is not implemented by this provider
    #[error("{0} is not supported by this provider")]
    UnsupportedAlgorithm(AeadAlgorithm),

    /// the provider cannot process a nonce of this length
    #[error("IV length of {0} bytes is not supported by this provider")]
    UnsupportedIvLength(usize),

    /// the tag does not authenticate the given ciphertext and associated data
    #[error("authentication failed")]
    AuthenticationFailed,

    /// any arbitrary error
    #[error("{0}")]
    Other(String),
}

/// A registered vector violates one of its invariants
#[derive(PartialEq, Eq, Clone, Copy, Debug, thiserror::Error)]
pub enum VectorShapeError {
    #[error("key has {actual} bytes, the algorithm requires {expected}")]
    KeyLength { expected: usize, actual: usize },

    #[error("ciphertext has {ciphertext} bytes but plaintext has {plaintext}")]
    CiphertextLength { plaintext: usize, ciphertext: usize },

    #[error("tag is empty")]
    EmptyTag,

    #[error("tag has {actual} bytes, the algorithm produces {expected}")]
    TagLength { expected: usize, actual: usize },
}

/// The buffer a computed output was compared against
#[derive(Debug, PartialEq, Eq, Clone, Copy, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Buffer {
    Ciphertext,
    Tag,
    Plaintext,
}

/// A computed output differs from the recorded one
#[derive(PartialEq, Eq, Clone, Copy, Debug, thiserror::Error)]
#[error("{buffer} mismatch at byte {offset} (expected {expected_len} bytes, got {actual_len})")]
pub struct Mismatch {
    pub buffer: Buffer,
    /// first differing byte, or the shorter length if one buffer is a prefix of the other
    pub offset: usize,
    pub expected_len: usize,
    pub actual_len: usize,
}

impl Mismatch {
    /// Compares both buffers in full, returns `None` if they are equal.
    pub fn between(buffer: Buffer, expected: &[u8], actual: &[u8]) -> Option<Self> {
        if crate::util::constant_time_eq(expected, actual) {
            return None;
        }

        Some(Self {
            buffer,
            offset: crate::util::first_divergence(expected, actual),
            expected_len: expected.len(),
            actual_len: actual.len(),
        })
    }
}

/// Why a single phase of a vector's evaluation failed
#[derive(PartialEq, Eq, Clone, Debug, thiserror::Error)]
pub enum Failure {
    /// the vector itself is malformed, the provider was not invoked
    #[error("malformed vector: {0}")]
    Shape(#[from] VectorShapeError),

    /// the provider failed for another reason than authentication
    #[error("provider error: {0}")]
    Provider(ProviderError),

    /// computed output differs from the recorded output
    #[error(transparent)]
    Mismatch(#[from] Mismatch),

    /// decrypt-and-verify rejected a vector which is expected to be valid
    #[error("authentication rejected a valid vector")]
    AuthenticationRejected,

    /// decrypt-and-verify accepted an input with a flipped bit
    #[error("{target} with flipped bit {bit} was accepted")]
    TamperAccepted { target: TamperTarget, bit: usize },
}

impl From<ProviderError> for Failure {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::AuthenticationFailed => Failure::AuthenticationRejected,
            err => Failure::Provider(err),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Buffer, Failure, Mismatch, ProviderError};
    use pretty_assertions::assert_eq;

    #[test]
    fn equal_buffers_do_not_mismatch() {
        assert_eq!(Mismatch::between(Buffer::Tag, &[1, 2, 3], &[1, 2, 3]), None);
        assert_eq!(Mismatch::between(Buffer::Plaintext, &[], &[]), None);
    }

    #[test]
    fn reports_first_differing_byte() {
        let mismatch = Mismatch::between(Buffer::Ciphertext, &[1, 2, 3, 4], &[1, 2, 7, 0]).unwrap();
        assert_eq!(mismatch.offset, 2);
        assert_eq!(
            mismatch.to_string(),
            "ciphertext mismatch at byte 2 (expected 4 bytes, got 4)"
        );
    }

    #[test]
    fn reports_length_difference_at_shorter_len() {
        let mismatch = Mismatch::between(Buffer::Tag, &[1, 2, 3], &[1, 2]).unwrap();
        assert_eq!(mismatch.offset, 2);
        assert_eq!(mismatch.expected_len, 3);
        assert_eq!(mismatch.actual_len, 2);
    }

    #[test]
    fn authentication_errors_become_rejections() {
        assert_eq!(
            Failure::from(ProviderError::AuthenticationFailed),
            Failure::AuthenticationRejected
        );
        assert_eq!(
            Failure::from(ProviderError::UnsupportedIvLength(7)),
            Failure::Provider(ProviderError::UnsupportedIvLength(7))
        );
    }
}
