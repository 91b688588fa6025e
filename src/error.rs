//! Error types for the BloomWire filter and wire codec

/// Errors that can occur while constructing a filter or decoding a payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Input shorter than the minimum valid wire size
    MalformedPayload,
    /// Computed checksum disagrees with the stored one
    ChecksumMismatch,
    /// Zero or out-of-range error rate code, or parameters the engine rejects
    InvalidParameters,
    /// Supplied bit-array bytes do not match the engine-computed length
    SizeMismatch,
    /// The engine could not allocate or configure a filter state
    InitializationFailed,
}

impl Error {
    /// Returns a human-readable description of the error
    pub const fn description(&self) -> &'static str {
        match self {
            Error::MalformedPayload => "payload shorter than minimum wire size",
            Error::ChecksumMismatch => "checksum verification failed",
            Error::InvalidParameters => "invalid capacity or error rate",
            Error::SizeMismatch => "bit array length does not match declared parameters",
            Error::InitializationFailed => "filter engine initialization failed",
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

impl std::error::Error for Error {}

/// Result type alias for BloomWire operations
pub type Result<T> = core::result::Result<T, Error>;
