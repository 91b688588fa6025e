//! Filter engine: bit-array sizing, hashing, and membership math
//!
//! The engine owns the Bloom filter mathematics. Sizing follows the standard
//! optimal-parameter formulas (bits per entry `-ln(p) / ln(2)^2`, hash count
//! `ln(2) * bpe`), and bit derivation uses double hashing
//! (Kirsch-Mitzenmacher): `index_i = h1 + i * h2 mod num_bits` with two
//! SipHash-1-3 values, the second seeded by the first.

use std::f64::consts::LN_2;
use std::hash::Hasher;

use siphasher::sip::SipHasher13;

use crate::error::{Error, Result};

// Fixed hash keys. The wire format carries no seed field, so every filter
// must derive the same bit positions for the same item.
const HASH_KEY_0: u64 = 0x9ae1_6a3b_2f90_404f;
const HASH_KEY_1: u64 = 0x24f5_0b3c_8a6d_91e7;

/// Bloom filter state: configured parameters plus the backing bit array.
///
/// The bit-array length is fixed at `init` time and never resized.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    capacity: u32,
    error_rate: f64,
    num_bits: u64,
    num_hashes: u32,
    bits: Vec<u8>,
}

impl FilterState {
    /// Allocate a filter state sized for the requested capacity and error rate.
    ///
    /// Fails with [`Error::InvalidParameters`] if `capacity` is zero or
    /// `error_rate` is outside `(0, 1)`.
    pub fn init(capacity: u32, error_rate: f64) -> Result<FilterState> {
        if capacity == 0 || !(error_rate > 0.0 && error_rate < 1.0) {
            return Err(Error::InvalidParameters);
        }

        // bpe = -ln(p) / ln(2)^2, m = ceil(n * bpe), k = ceil(ln(2) * bpe)
        let bpe = -error_rate.ln() / (LN_2 * LN_2);
        let raw_bits = (f64::from(capacity) * bpe).ceil();
        if !raw_bits.is_finite() || raw_bits < 1.0 {
            return Err(Error::InitializationFailed);
        }

        let num_bits = raw_bits as u64;
        let bytes_len = num_bits.div_ceil(8) as usize;
        let num_hashes = (LN_2 * bpe).ceil() as u32;

        Ok(FilterState {
            capacity,
            error_rate,
            num_bits,
            num_hashes,
            bits: vec![0u8; bytes_len],
        })
    }

    /// Set the item's derived bits. Never fails.
    pub fn add(&mut self, item: &[u8]) {
        let (h1, h2) = self.hash_pair(item);
        for i in 0..self.num_hashes {
            let index = self.bit_index(h1, h2, i);
            self.bits[(index >> 3) as usize] |= 1 << (index & 7);
        }
    }

    /// Test whether all of the item's derived bits are set.
    ///
    /// May return false positives, never false negatives.
    pub fn check(&self, item: &[u8]) -> bool {
        let (h1, h2) = self.hash_pair(item);
        for i in 0..self.num_hashes {
            let index = self.bit_index(h1, h2, i);
            if self.bits[(index >> 3) as usize] & (1 << (index & 7)) == 0 {
                return false;
            }
        }
        true
    }

    /// Raw bit-array buffer
    #[inline]
    pub fn bit_array(&self) -> &[u8] {
        &self.bits
    }

    /// Mutable raw bit-array buffer (same fixed length)
    #[inline]
    pub fn bit_array_mut(&mut self) -> &mut [u8] {
        &mut self.bits
    }

    /// Bit-array length in bytes
    #[inline]
    pub fn bytes_len(&self) -> usize {
        self.bits.len()
    }

    /// Configured capacity
    #[inline]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Configured target false-positive rate
    #[inline]
    pub fn error_rate(&self) -> f64 {
        self.error_rate
    }

    /// Number of hash functions (k)
    #[inline]
    pub fn num_hashes(&self) -> u32 {
        self.num_hashes
    }

    /// Compute the two base hash values for double hashing
    fn hash_pair(&self, item: &[u8]) -> (u64, u64) {
        let mut hasher = SipHasher13::new_with_keys(HASH_KEY_0, HASH_KEY_1);
        hasher.write(item);
        let h1 = hasher.finish();

        let mut hasher = SipHasher13::new_with_keys(h1, HASH_KEY_1);
        hasher.write(item);
        let h2 = hasher.finish();

        (h1, h2)
    }

    /// i-th derived bit index: `(h1 + i * h2) mod num_bits`
    #[inline]
    fn bit_index(&self, h1: u64, h2: u64, i: u32) -> u64 {
        h1.wrapping_add(u64::from(i).wrapping_mul(h2)) % self.num_bits
    }
}
