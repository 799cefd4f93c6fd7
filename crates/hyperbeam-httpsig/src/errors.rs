use hyperbeam_keys::KeyError;
use thiserror::Error;

/// Errors raised while parsing a `Signature` header.
#[derive(Error, Debug)]
pub enum SignatureHeaderError {
    /// A member had no `label=` part.
    #[error("malformed signature member: {0}")]
    MalformedMember(String),
    /// A member value was not wrapped in colons.
    #[error("signature {label} is not a byte sequence")]
    NotByteSequence {
        /// Label of the offending member.
        label: String,
    },
    /// A member value was not valid base64.
    #[error("signature {label} has invalid base64: {source}")]
    InvalidBase64 {
        /// Label of the offending member.
        label: String,
        /// Decoder error.
        source: KeyError,
    },
}

/// Errors raised while building a signature base.
#[derive(Error, Debug)]
pub enum SignatureBaseError {
    /// A covered field is absent from the message.
    #[error("covered component {0} is missing from the message")]
    MissingComponent(String),
    /// A derived component this implementation does not know.
    #[error("unsupported derived component {0}")]
    UnsupportedComponent(String),
    /// A header value was not visible ASCII.
    #[error("header {0} has a non-text value")]
    InvalidHeaderValue(String),
}

/// Errors raised during verification; the [`crate::verify_signature`]
/// boundary turns all of them into `false`.
#[derive(Error, Debug)]
pub enum VerifyError {
    /// A required header is absent.
    #[error("missing {0} header")]
    MissingHeader(&'static str),
    /// A header name or value could not be stored in the message.
    #[error("invalid header: {0}")]
    InvalidHeader(String),
    /// The `Signature-Input` header held no entries.
    #[error("signature-input has no entries")]
    NoSignatureInput,
    /// The selected entry had no `keyid`.
    #[error("signature {0} has no keyid")]
    MissingKeyId(String),
    /// The selected entry cannot be verified by a client.
    #[error("algorithm {0} is not verifiable without a shared secret")]
    Unverifiable(String),
    /// No `Signature` member matches an entry label.
    #[error("no signature value for label {0}")]
    MissingSignature(String),
    /// Key resolution failed.
    #[error("key resolution failed: {0}")]
    Key(#[from] KeyError),
    /// The `Signature` header was malformed.
    #[error(transparent)]
    SignatureHeader(#[from] SignatureHeaderError),
    /// The signature base could not be built.
    #[error(transparent)]
    SignatureBase(#[from] SignatureBaseError),
}

/// Errors raised while deriving addresses and message ids.
#[derive(Error, Debug)]
pub enum AddressError {
    /// The signature does not start with the expected scheme prefix.
    #[error("invalid signature format: expected prefix {expected}")]
    InvalidSignatureFormat {
        /// Prefix that was required.
        expected: String,
    },
    /// The encoded key or signature was not base64url.
    #[error(transparent)]
    Key(#[from] KeyError),
}
