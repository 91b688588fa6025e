//! Filter handle: lifecycle and buffer-sharing surface
//!
//! A [`Filter`] owns exactly one [`FilterState`]; dropping the handle releases
//! the bit array. Zero-copy exports are ordinary borrows, so the aliasing
//! rules (no mutation while a view is live, no view outliving the handle) are
//! enforced at compile time rather than documented away.
//!
//! The crate performs no locking: a handle shared across threads needs
//! external synchronization.

use tracing::debug;

use crate::codec;
use crate::engine::FilterState;
use crate::error::{Error, Result};

/// A Bloom filter handle owning its bit-array state
#[derive(Debug, Clone)]
pub struct Filter {
    state: FilterState,
}

/// Zero-copy read-only export: the filter's parameters plus a borrowed view
/// of the live bit array. No checksum is computed and no copy is made; the
/// view cannot outlive its filter.
#[derive(Debug, Clone, Copy)]
pub struct FilterView<'a> {
    /// Configured capacity
    pub capacity: u32,
    /// Configured target false-positive rate
    pub error_rate: f64,
    /// The live bit-array bytes
    pub bits: &'a [u8],
}

impl Filter {
    /// Construct an empty filter sized for `capacity` members at the target
    /// false-positive rate.
    ///
    /// Fails with [`Error::InvalidParameters`] if the engine rejects the
    /// parameters (zero capacity, or an error rate outside `(0, 1)`).
    pub fn new(capacity: u32, error_rate: f64) -> Result<Filter> {
        let state = FilterState::init(capacity, error_rate)?;
        debug!(
            capacity,
            error_rate,
            bytes_len = state.bytes_len(),
            "filter constructed"
        );
        Ok(Filter { state })
    }

    /// Construct a filter and seed its bit array from previously exported
    /// bytes, bypassing the checksum-bearing wire codec.
    ///
    /// `data` must exactly match the engine-computed bit-array length for
    /// `(capacity, error_rate)`; otherwise this fails with
    /// [`Error::SizeMismatch`] and no handle is produced.
    pub fn with_data(capacity: u32, error_rate: f64, data: &[u8]) -> Result<Filter> {
        let mut state = FilterState::init(capacity, error_rate)?;
        if data.len() != state.bytes_len() {
            return Err(Error::SizeMismatch);
        }
        state.bit_array_mut().copy_from_slice(data);
        Ok(Filter { state })
    }

    /// Construct a filter by decoding a wire payload produced by [`dump`]
    /// (or [`codec::encode`]).
    ///
    /// [`dump`]: Filter::dump
    pub fn load(bytes: &[u8]) -> Result<Filter> {
        let state = codec::decode(bytes)?;
        Ok(Filter { state })
    }

    /// Add a member to the filter
    #[inline]
    pub fn add(&mut self, item: &[u8]) {
        self.state.add(item);
    }

    /// Test whether an item is possibly a member.
    ///
    /// May return false positives; never returns a false negative for an
    /// item previously passed to [`add`](Filter::add).
    #[inline]
    pub fn contains(&self, item: &[u8]) -> bool {
        self.state.check(item)
    }

    /// Owning-copy export: serialize the current state into an independent
    /// buffer that stays valid after the filter is mutated or dropped.
    pub fn dump(&self) -> Vec<u8> {
        codec::encode(&self.state)
    }

    /// Zero-copy export of the filter's parameters and live bit array
    #[inline]
    pub fn view(&self) -> FilterView<'_> {
        FilterView {
            capacity: self.state.capacity(),
            error_rate: self.state.error_rate(),
            bits: self.state.bit_array(),
        }
    }

    /// Writable zero-copy view over the live bit array, for in-place bulk
    /// loading from another source. The exclusive borrow prevents any other
    /// use of the filter while the view is held.
    #[inline]
    pub fn buffer_mut(&mut self) -> &mut [u8] {
        self.state.bit_array_mut()
    }

    /// Configured capacity
    #[inline]
    pub fn capacity(&self) -> u32 {
        self.state.capacity()
    }

    /// Configured target false-positive rate
    #[inline]
    pub fn error_rate(&self) -> f64 {
        self.state.error_rate()
    }

    /// Bit-array length in bytes
    #[inline]
    pub fn bytes_len(&self) -> usize {
        self.state.bytes_len()
    }
}
