//! BloomWire: a Bloom filter with a compact, integrity-checked wire format
//!
//! This crate provides a Bloom filter handle together with a fixed-layout
//! binary serialization format guarded by a folded CRC-32 checksum, and
//! zero-copy export of the underlying bit array for callers that want to move
//! filter state around without paying for a copy.
//!
//! # Wire Format
//!
//! All header integers are big-endian (network byte order):
//!
//! ```text
//! +--------------+---------------------+------------------+-----------------+
//! | Checksum u16 | ErrorRateCode u16   | Cardinality u32  | Bit array       |
//! | CRC-32 fold  | round(1/error_rate) | configured       | raw bytes       |
//! | of bit array |                     | capacity         | (total len - 8) |
//! +--------------+---------------------+------------------+-----------------+
//! ```
//!
//! The checksum covers the bit-array payload only, never the header. The bit
//! array carries no length field of its own: its expected length is recomputed
//! from `(cardinality, error_rate_code)` on decode and validated against the
//! bytes actually supplied.
//!
//! Storing `round(1/error_rate)` instead of the rate itself is a lossy,
//! format-mandated encoding: only error rates whose reciprocal fits a `u16`
//! exactly survive a round-trip unchanged.
//!
//! # Example
//!
//! ```rust
//! use bloomwire::Filter;
//!
//! let mut filter = Filter::new(1000, 0.01)?;
//! filter.add(b"alice");
//! assert!(filter.contains(b"alice"));
//!
//! // Owning-copy export and rehydration through the wire codec
//! let bytes = filter.dump();
//! let restored = Filter::load(&bytes)?;
//! assert!(restored.contains(b"alice"));
//!
//! // Zero-copy export: parameters plus a borrowed view of the live bits
//! let view = filter.view();
//! assert_eq!(view.capacity, 1000);
//! # Ok::<(), bloomwire::Error>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod checksum;
pub mod codec;
pub mod engine;
pub mod error;
pub mod filter;

// Re-export main types
pub use codec::{decode, encode, WireHeader};
pub use engine::FilterState;
pub use error::{Error, Result};
pub use filter::{Filter, FilterView};

/// Wire header size in bytes (checksum + error rate code + cardinality)
pub const HEADER_SIZE: usize = 8;

/// Minimum valid wire payload size (header plus at least one bit-array byte)
pub const MIN_WIRE_SIZE: usize = HEADER_SIZE + 1;
