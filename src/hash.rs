//! djb2 string hashing and bucket selection.
//!
//! The hash walks the key's bytes once, updating a 64-bit accumulator
//! seeded with 5381 as `acc = acc * 33 + byte` with wraparound. The
//! sequence is byte-order dependent, so the tests below pin exact
//! output values to catch any regression in the arithmetic.

/// Hashes `key` with the djb2 algorithm.
///
/// Pure and deterministic; the empty string hashes to the seed, 5381.
#[inline]
pub fn djb2(key: &str) -> u64 {
    let mut acc: u64 = 5381;
    for &byte in key.as_bytes() {
        acc = acc.wrapping_mul(33).wrapping_add(u64::from(byte));
    }
    acc
}

/// Maps `key` to a bucket index in `[0, modulus)`.
///
/// `modulus` is the table capacity and must be at least 1.
#[inline]
pub fn bucket_index(key: &str, modulus: usize) -> usize {
    debug_assert!(modulus >= 1, "modulus must be at least 1");
    (djb2(key) % modulus as u64) as usize
}
