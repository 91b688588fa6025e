//! CRC-32 checksum with the 16-bit fold used by the wire format
//!
//! The wire header stores a 16-bit checksum derived from the standard CRC-32
//! (IEEE) of the bit-array payload: the low half of the 32-bit CRC XORed with
//! the high half. Encode and decode use the same derivation.

/// CRC-32 polynomial (IEEE, reflected)
const CRC32_POLYNOMIAL: u32 = 0xEDB8_8320;

/// Pre-computed CRC-32 lookup table
static CRC32_TABLE: [u32; 256] = generate_crc32_table();

/// Generate CRC-32 lookup table at compile time
const fn generate_crc32_table() -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut i = 0;

    while i < 256 {
        let mut crc = i as u32;
        let mut j = 0;

        while j < 8 {
            if crc & 1 != 0 {
                crc = (crc >> 1) ^ CRC32_POLYNOMIAL;
            } else {
                crc >>= 1;
            }
            j += 1;
        }

        table[i] = crc;
        i += 1;
    }

    table
}

/// Compute the standard CRC-32 checksum of the given data
#[inline]
pub fn crc32(data: &[u8]) -> u32 {
    let mut crc = 0xFFFFFFFFu32;

    for &byte in data {
        let table_idx = ((crc ^ byte as u32) & 0xFF) as usize;
        crc = (crc >> 8) ^ CRC32_TABLE[table_idx];
    }

    !crc
}

/// Fold the CRC-32 of `data` to the 16-bit checksum stored on the wire
///
/// Returns `(crc & 0xFFFF) ^ (crc >> 16)`. Deterministic, no failure modes.
#[inline]
pub fn fold_checksum(data: &[u8]) -> u16 {
    let crc = crc32(data);
    ((crc & 0xFFFF) ^ (crc >> 16)) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crc32_known_vectors() {
        assert_eq!(crc32(&[]), 0);
        assert_eq!(crc32(b"123456789"), 0xCBF43926);
        assert_eq!(
            crc32(b"The quick brown fox jumps over the lazy dog"),
            0x414FA339
        );
    }

    #[test]
    fn test_fold_known_vectors() {
        // crc32("123456789") = 0xCBF43926 -> 0x3926 ^ 0xCBF4
        assert_eq!(fold_checksum(b"123456789"), 0xF2D2);
        assert_eq!(fold_checksum(&[]), 0);
    }

    #[test]
    fn test_fold_is_deterministic() {
        let data = b"some filter payload bytes";
        assert_eq!(fold_checksum(data), fold_checksum(data));
    }

    #[test]
    fn test_fold_detects_single_byte_change() {
        let mut data = vec![0u8; 64];
        let original = fold_checksum(&data);

        data[32] ^= 0x01;
        assert_ne!(fold_checksum(&data), original);
    }
}
