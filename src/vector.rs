//! Known-answer test vectors.
//!
//! Optional fields (associated data, plaintext, ciphertext) are normalized to empty buffers when a vector is
//! built, so an absent field and an empty one behave identically when handed to a provider.

use crate::{algorithm::AeadAlgorithm, error::VectorShapeError};

/// A single immutable known-answer test case
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestVector {
    name: String,
    algorithm: AeadAlgorithm,
    key: Vec<u8>,
    iv: Vec<u8>,
    aad: Vec<u8>,
    plaintext: Vec<u8>,
    ciphertext: Vec<u8>,
    tag: Vec<u8>,
}

impl TestVector {
    /// starts a new vector, every buffer which is not set explicitly is empty
    pub fn builder<N>(name: N, algorithm: AeadAlgorithm) -> TestVectorBuilder
    where
        N: Into<String>,
    {
        TestVectorBuilder {
            vector: TestVector {
                name: name.into(),
                algorithm,
                key: Vec::new(),
                iv: Vec::new(),
                aad: Vec::new(),
                plaintext: Vec::new(),
                ciphertext: Vec::new(),
                tag: Vec::new(),
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn algorithm(&self) -> AeadAlgorithm {
        self.algorithm
    }

    pub fn key(&self) -> &[u8] {
        &self.key
    }

    pub fn iv(&self) -> &[u8] {
        &self.iv
    }

    pub fn aad(&self) -> &[u8] {
        &self.aad
    }

    pub fn plaintext(&self) -> &[u8] {
        &self.plaintext
    }

    pub fn ciphertext(&self) -> &[u8] {
        &self.ciphertext
    }

    pub fn tag(&self) -> &[u8] {
        &self.tag
    }

    /// Checks the invariants of the vector against its algorithm.
    /// The IV length is deliberately not checked, its handling is up to the provider.
    ///
    /// The tag has to have the full length of the algorithm (16 bytes for GCM), vectors with
    /// truncated tags are rejected with [`VectorShapeError::TagLength`].
    pub fn validate(&self) -> Result<(), VectorShapeError> {
        let params = self.algorithm.params();

        if self.key.len() != params.key_len {
            return Err(VectorShapeError::KeyLength {
                expected: params.key_len,
                actual: self.key.len(),
            });
        }

        if self.ciphertext.len() != self.plaintext.len() {
            return Err(VectorShapeError::CiphertextLength {
                plaintext: self.plaintext.len(),
                ciphertext: self.ciphertext.len(),
            });
        }

        if self.tag.is_empty() {
            return Err(VectorShapeError::EmptyTag);
        }

        if self.tag.len() != params.tag_len {
            return Err(VectorShapeError::TagLength {
                expected: params.tag_len,
                actual: self.tag.len(),
            });
        }

        Ok(())
    }
}

/// Builds a [`TestVector`], see [`TestVector::builder`]
#[derive(Clone, Debug)]
pub struct TestVectorBuilder {
    vector: TestVector,
}

impl TestVectorBuilder {
    pub fn key<B: AsRef<[u8]>>(mut self, key: B) -> Self {
        self.vector.key = key.as_ref().to_vec();
        self
    }

    pub fn iv<B: AsRef<[u8]>>(mut self, iv: B) -> Self {
        self.vector.iv = iv.as_ref().to_vec();
        self
    }

    pub fn aad<B: AsRef<[u8]>>(mut self, aad: B) -> Self {
        self.vector.aad = aad.as_ref().to_vec();
        self
    }

    pub fn plaintext<B: AsRef<[u8]>>(mut self, plaintext: B) -> Self {
        self.vector.plaintext = plaintext.as_ref().to_vec();
        self
    }

    pub fn ciphertext<B: AsRef<[u8]>>(mut self, ciphertext: B) -> Self {
        self.vector.ciphertext = ciphertext.as_ref().to_vec();
        self
    }

    pub fn tag<B: AsRef<[u8]>>(mut self, tag: B) -> Self {
        self.vector.tag = tag.as_ref().to_vec();
        self
    }

    /// Does not validate the vector, malformed vectors are reported by the runner.
    pub fn build(self) -> TestVector {
        self.vector
    }
}

#[cfg(test)]
mod test {
    use super::TestVector;
    use crate::{algorithm::AeadAlgorithm, error::VectorShapeError};
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn tag_only(algorithm: AeadAlgorithm) -> TestVector {
        TestVector::builder("tag only", algorithm)
            .key(vec![0u8; algorithm.key_len()])
            .iv([0u8; 12])
            .tag([0u8; 16])
            .build()
    }

    #[test]
    fn absent_and_empty_buffers_are_identical() {
        let absent = tag_only(AeadAlgorithm::Aes128Gcm);
        let empty = TestVector::builder("tag only", AeadAlgorithm::Aes128Gcm)
            .key([0u8; 16])
            .iv([0u8; 12])
            .aad([0u8; 0])
            .plaintext(Vec::<u8>::new())
            .ciphertext(&[0u8; 0])
            .tag([0u8; 16])
            .build();

        assert_eq!(absent, empty);
        assert!(absent.aad().is_empty());
        assert!(absent.plaintext().is_empty());
        assert!(absent.ciphertext().is_empty());
    }

    #[test_case(AeadAlgorithm::Aes128Gcm; "Aes128Gcm")]
    #[test_case(AeadAlgorithm::Aes256Gcm; "Aes256Gcm")]
    fn accepts_tag_only_vector(algorithm: AeadAlgorithm) {
        assert_eq!(tag_only(algorithm).validate(), Ok(()));
    }

    #[test]
    fn rejects_key_of_other_algorithm() {
        let vector = TestVector::builder("short key", AeadAlgorithm::Aes256Gcm)
            .key([0u8; 16])
            .tag([0u8; 16])
            .build();

        assert_eq!(
            vector.validate(),
            Err(VectorShapeError::KeyLength {
                expected: 32,
                actual: 16
            })
        );
    }

    #[test]
    fn rejects_ciphertext_len_mismatch() {
        let vector = TestVector::builder("truncated ciphertext", AeadAlgorithm::Aes128Gcm)
            .key([0u8; 16])
            .plaintext([0u8; 16])
            .ciphertext([0u8; 15])
            .tag([0u8; 16])
            .build();

        assert_eq!(
            vector.validate(),
            Err(VectorShapeError::CiphertextLength {
                plaintext: 16,
                ciphertext: 15
            })
        );
    }

    #[test_case(0, VectorShapeError::EmptyTag; "empty")]
    #[test_case(12, VectorShapeError::TagLength { expected: 16, actual: 12 }; "truncated")]
    fn rejects_malformed_tag(tag_len: usize, error: VectorShapeError) {
        let vector = TestVector::builder("bad tag", AeadAlgorithm::Aes128Gcm)
            .key([0u8; 16])
            .tag(vec![0u8; tag_len])
            .build();

        assert_eq!(vector.validate(), Err(error));
    }

    #[test]
    fn does_not_check_iv_length() {
        let vector = TestVector::builder("odd iv", AeadAlgorithm::Aes128Gcm)
            .key([0u8; 16])
            .iv([0u8; 3])
            .tag([0u8; 16])
            .build();

        assert_eq!(vector.validate(), Ok(()));
    }
}
