/// Depicts which AEAD construction a test vector is recorded for.
/// The variant determines the key length a provider expects and which of its routines is invoked.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, strum_macros::Display)]
pub enum AeadAlgorithm {
    /// AES in Galois/Counter Mode with a 128 bit key
    #[strum(serialize = "AES-128-GCM")]
    Aes128Gcm,
    /// AES in Galois/Counter Mode with a 256 bit key
    #[strum(serialize = "AES-256-GCM")]
    Aes256Gcm,
}

/// Static parameters of an [`AeadAlgorithm`]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct AlgorithmParams {
    pub algorithm: AeadAlgorithm,
    pub key_len: usize,
    /// nonce length the construction is optimized for, other lengths may still be valid
    pub nonce_len: usize,
    pub tag_len: usize,
}

pub type AlgorithmParamsRef = &'static AlgorithmParams;

static AES_128_GCM: AlgorithmParams = AlgorithmParams {
    algorithm: AeadAlgorithm::Aes128Gcm,
    key_len: 16,
    nonce_len: 12,
    tag_len: 16,
};

static AES_256_GCM: AlgorithmParams = AlgorithmParams {
    algorithm: AeadAlgorithm::Aes256Gcm,
    key_len: 32,
    nonce_len: 12,
    tag_len: 16,
};

impl From<AeadAlgorithm> for AlgorithmParamsRef {
    fn from(algorithm: AeadAlgorithm) -> Self {
        match algorithm {
            AeadAlgorithm::Aes128Gcm => &AES_128_GCM,
            AeadAlgorithm::Aes256Gcm => &AES_256_GCM,
        }
    }
}

impl AeadAlgorithm {
    /// every algorithm known to the harness
    pub const ALL: [AeadAlgorithm; 2] = [AeadAlgorithm::Aes128Gcm, AeadAlgorithm::Aes256Gcm];

    pub fn params(self) -> AlgorithmParamsRef {
        self.into()
    }

    pub fn key_len(self) -> usize {
        self.params().key_len
    }

    pub fn tag_len(self) -> usize {
        self.params().tag_len
    }
}
