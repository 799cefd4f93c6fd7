use thiserror::Error;

/// Errors raised while turning a `keyid` into a verifying key.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    /// The `keyid` was not valid base64url.
    #[error("invalid key encoding: {0}")]
    InvalidKeyEncoding(String),
    /// No import strategy produced a usable key.
    #[error("key import failed for {algorithm}: {reason}")]
    KeyImport {
        /// Algorithm the key was imported for.
        algorithm: String,
        /// Reason reported by the last strategy attempted.
        reason: String,
    },
    /// The `alg` value names no supported family.
    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),
}

/// Errors raised while decoding DER structures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DerError {
    /// Input ended before the declared structure did.
    #[error("truncated DER input at offset {offset}")]
    Truncated {
        /// Byte offset where more input was expected.
        offset: usize,
    },
    /// Long-form length prefix with an unsupported number of octets.
    #[error("unsupported DER length prefix 0x{0:02x}")]
    UnsupportedLength(u8),
    /// Unexpected tag byte.
    #[error("expected tag 0x{expected:02x}, found 0x{found:02x}")]
    UnexpectedTag {
        /// Tag that was required.
        expected: u8,
        /// Tag that was present.
        found: u8,
    },
}
