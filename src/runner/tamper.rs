use std::ops::Range;

use super::{TamperCoverage, TamperTarget};
use crate::{util::flip_bit, vector::TestVector};

impl TamperCoverage {
    /// indices of the bits to flip in a target of `len` bytes
    pub(crate) fn bits(self, len: usize) -> Range<usize> {
        match self {
            TamperCoverage::Off => 0..0,
            TamperCoverage::SingleBit => 0..len.min(1),
            TamperCoverage::EveryBit => 0..len * 8,
        }
    }
}

impl TamperTarget {
    pub(crate) fn select(self, vector: &TestVector) -> &[u8] {
        match self {
            TamperTarget::Tag => vector.tag(),
            TamperTarget::Ciphertext => vector.ciphertext(),
            TamperTarget::AssociatedData => vector.aad(),
        }
    }
}

/// Decrypt-and-verify inputs of a vector with a single flipped bit
pub(crate) struct TamperedInput {
    pub aad: Vec<u8>,
    pub ciphertext: Vec<u8>,
    pub tag: Vec<u8>,
}

impl TamperedInput {
    pub(crate) fn new(vector: &TestVector, target: TamperTarget, bit: usize) -> Self {
        let mut input = Self {
            aad: vector.aad().to_vec(),
            ciphertext: vector.ciphertext().to_vec(),
            tag: vector.tag().to_vec(),
        };

        let buffer = match target {
            TamperTarget::Tag => &mut input.tag,
            TamperTarget::Ciphertext => &mut input.ciphertext,
            TamperTarget::AssociatedData => &mut input.aad,
        };
        flip_bit(buffer, bit);

        input
    }
}
