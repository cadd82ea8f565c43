use subtle::ConstantTimeEq;

/// Full-length comparison, the content is not inspected with an early exit.
pub(crate) fn constant_time_eq(l: &[u8], r: &[u8]) -> bool {
    l.ct_eq(r).into()
}

/// Only meant for reporting after a comparison has already failed.
pub(crate) fn first_divergence(l: &[u8], r: &[u8]) -> usize {
    l.iter()
        .zip(r)
        .position(|(l, r)| l != r)
        .unwrap_or_else(|| l.len().min(r.len()))
}

pub(crate) fn flip_bit(buffer: &mut [u8], bit: usize) {
    buffer[bit / 8] ^= 1 << (bit % 8);
}
