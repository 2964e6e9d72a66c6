pub const DJB2_SEED: u64 = 5381;

/// djb2 bucket hash: seed 5381, multiplier 33, wrapping 64-bit arithmetic,
/// result reduced modulo the bucket count.
#[inline]
pub fn djb2_hash(key: &str, modulus: usize) -> usize {
    debug_assert!(modulus > 0);
    let mut hash = DJB2_SEED;
    for &byte in key.as_bytes() {
        hash = (hash << 5).wrapping_add(hash).wrapping_add(byte as u64);
    }
    (hash % modulus as u64) as usize
}
