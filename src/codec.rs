//! Wire codec: fixed-layout header plus raw bit-array payload
//!
//! `encode` produces a fresh owned buffer; `decode` validates and rebuilds a
//! [`FilterState`]. Every decode failure is a total rejection: no state is
//! returned and nothing is leaked.

use tracing::debug;

use crate::checksum::fold_checksum;
use crate::engine::FilterState;
use crate::error::{Error, Result};
use crate::{HEADER_SIZE, MIN_WIRE_SIZE};

/// Wire header (8 bytes, big-endian)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WireHeader {
    /// CRC-32 of the bit-array payload folded to 16 bits
    pub checksum: u16,
    /// Reciprocal of the error rate, rounded to the nearest integer
    pub error_rate_code: u16,
    /// Configured capacity
    pub cardinality: u32,
}

impl WireHeader {
    /// Header size in bytes (fixed)
    pub const SIZE: usize = HEADER_SIZE;

    /// Encode the header to bytes (big-endian)
    #[inline]
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut buf = [0u8; Self::SIZE];
        buf[0..2].copy_from_slice(&self.checksum.to_be_bytes());
        buf[2..4].copy_from_slice(&self.error_rate_code.to_be_bytes());
        buf[4..8].copy_from_slice(&self.cardinality.to_be_bytes());
        buf
    }

    /// Decode a header from the start of `buf` (big-endian)
    #[inline]
    pub fn decode(buf: &[u8]) -> Result<Self> {
        if buf.len() < Self::SIZE {
            return Err(Error::MalformedPayload);
        }

        Ok(Self {
            checksum: u16::from_be_bytes([buf[0], buf[1]]),
            error_rate_code: u16::from_be_bytes([buf[2], buf[3]]),
            cardinality: u32::from_be_bytes([buf[4], buf[5], buf[6], buf[7]]),
        })
    }
}

/// Serialize a filter state into a wire payload.
///
/// The checksum covers the bit-array bytes only. The error rate code is
/// recomputed from the live state's `error_rate`, never taken from a
/// previously decoded header. Callers must keep `error_rate >= 1/65535`; a
/// larger reciprocal saturates to `u16::MAX` rather than wrapping.
pub fn encode(state: &FilterState) -> Vec<u8> {
    let bits = state.bit_array();

    let reciprocal = (1.0 / state.error_rate()).round();
    let error_rate_code = if reciprocal >= f64::from(u16::MAX) {
        u16::MAX
    } else {
        reciprocal as u16
    };

    let header = WireHeader {
        checksum: fold_checksum(bits),
        error_rate_code,
        cardinality: state.capacity(),
    };

    let mut out = Vec::with_capacity(WireHeader::SIZE + bits.len());
    out.extend_from_slice(&header.to_bytes());
    out.extend_from_slice(bits);
    out
}

/// Deserialize a wire payload into a filter state.
///
/// Validation order:
/// 1. total length below [`MIN_WIRE_SIZE`] -> [`Error::MalformedPayload`]
/// 2. folded checksum over the payload -> [`Error::ChecksumMismatch`]
/// 3. zero error rate code -> [`Error::InvalidParameters`]
/// 4. payload length vs engine-computed length -> [`Error::SizeMismatch`]
///
/// The error rate is reconstructed as `1 / error_rate_code`, so decoding is
/// lossy for rates whose reciprocal does not fit a `u16` exactly.
pub fn decode(bytes: &[u8]) -> Result<FilterState> {
    if bytes.len() < MIN_WIRE_SIZE {
        return Err(Error::MalformedPayload);
    }

    let header = WireHeader::decode(bytes)?;
    let payload = &bytes[WireHeader::SIZE..];

    let computed = fold_checksum(payload);
    if computed != header.checksum {
        debug!(
            stored = header.checksum,
            computed, "rejecting payload: checksum mismatch"
        );
        return Err(Error::ChecksumMismatch);
    }

    if header.error_rate_code == 0 {
        return Err(Error::InvalidParameters);
    }
    let error_rate = 1.0 / f64::from(header.error_rate_code);

    // Independently re-derive the expected bit-array length from the declared
    // parameters; a header describing different parameters than the payload
    // actually contains is rejected here.
    let mut state = FilterState::init(header.cardinality, error_rate)?;
    if payload.len() != state.bytes_len() {
        debug!(
            declared = state.bytes_len(),
            actual = payload.len(),
            "rejecting payload: bit array length mismatch"
        );
        return Err(Error::SizeMismatch);
    }

    state.bit_array_mut().copy_from_slice(payload);
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_roundtrip() {
        let header = WireHeader {
            checksum: 0xF2D2,
            error_rate_code: 100,
            cardinality: 0x12345678,
        };

        let bytes = header.to_bytes();
        assert_eq!(WireHeader::decode(&bytes).unwrap(), header);
    }

    #[test]
    fn test_header_is_big_endian() {
        let header = WireHeader {
            checksum: 0xABCD,
            error_rate_code: 0x0102,
            cardinality: 0x0A0B0C0D,
        };

        let bytes = header.to_bytes();
        assert_eq!(
            bytes,
            [0xAB, 0xCD, 0x01, 0x02, 0x0A, 0x0B, 0x0C, 0x0D]
        );
    }

    #[test]
    fn test_encode_layout() {
        let state = FilterState::init(10, 0.01).unwrap();
        let bytes = encode(&state);

        assert_eq!(bytes.len(), WireHeader::SIZE + state.bytes_len());

        let header = WireHeader::decode(&bytes).unwrap();
        assert_eq!(header.error_rate_code, 100);
        assert_eq!(header.cardinality, 10);
        assert_eq!(header.checksum, fold_checksum(state.bit_array()));
    }

    #[test]
    fn test_encode_saturates_oversized_reciprocal() {
        let state = FilterState::init(2, 1.0 / 1_000_000.0).unwrap();
        let header = WireHeader::decode(&encode(&state)).unwrap();
        assert_eq!(header.error_rate_code, u16::MAX);
    }

    #[test]
    fn test_decode_rejects_short_input() {
        for len in 0..MIN_WIRE_SIZE {
            let bytes = vec![0u8; len];
            assert_eq!(decode(&bytes), Err(Error::MalformedPayload));
        }
    }

    #[test]
    fn test_decode_rejects_corrupted_payload() {
        let mut state = FilterState::init(100, 0.01).unwrap();
        state.add(b"alice");
        let mut bytes = encode(&state);

        let last = bytes.len() - 1;
        bytes[last] ^= 0x01;
        assert_eq!(decode(&bytes), Err(Error::ChecksumMismatch));
    }

    #[test]
    fn test_decode_rejects_zero_error_rate_code() {
        let state = FilterState::init(100, 0.01).unwrap();
        let mut bytes = encode(&state);

        // The checksum only covers the payload, so a zeroed header field
        // reaches the division guard rather than tripping the checksum.
        bytes[2] = 0;
        bytes[3] = 0;
        assert_eq!(decode(&bytes), Err(Error::InvalidParameters));
    }

    #[test]
    fn test_decode_rejects_mismatched_length() {
        let state = FilterState::init(100, 0.01).unwrap();
        let bytes = encode(&state);

        // Drop the final payload byte and re-stamp a valid checksum so the
        // length check is what fires.
        let mut truncated = bytes[..bytes.len() - 1].to_vec();
        let checksum = fold_checksum(&truncated[WireHeader::SIZE..]);
        truncated[0..2].copy_from_slice(&checksum.to_be_bytes());

        assert_eq!(decode(&truncated), Err(Error::SizeMismatch));
    }

    #[test]
    fn test_roundtrip_preserves_state() {
        let mut state = FilterState::init(1000, 0.01).unwrap();
        state.add(b"alice");
        state.add(b"bob");

        let restored = decode(&encode(&state)).unwrap();
        assert_eq!(restored.capacity(), 1000);
        assert_eq!(restored.bit_array(), state.bit_array());
        assert_eq!(restored.error_rate(), 1.0 / 100.0);
        assert!(restored.check(b"alice"));
        assert!(restored.check(b"bob"));
    }
}
