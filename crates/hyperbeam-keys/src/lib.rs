//! Public key primitives for HyperBEAM HTTP message signatures.
//!
//! This crate provides:
//! - A base64url codec tolerant of both alphabets and missing padding
//! - DER encoding primitives and SPKI envelopes for RSA public keys
//! - A closed algorithm model parsed once from the `alg` wire string
//! - Key resolution from a `keyid` into a verifying [`ResolvedKey`]
//!
//! Core invariants:
//! - Resolution is stateless: keys are re-derived on every call, never cached
//! - HMAC algorithms are unverifiable, reported as a value rather than an error
//! - RSA keys are imported through an ordered list of [`RsaImport`] strategies
//!
//! ## Quick Start
//!
//! ```rust
//! use hyperbeam_keys::{resolve_verification_key, KeyResolution};
//!
//! let resolution = resolve_verification_key("hmac-sha256", "publickey:AAAA")?;
//! assert!(matches!(resolution, KeyResolution::Unverifiable { .. }));
//! # Ok::<(), hyperbeam_keys::KeyError>(())
//! ```
#![deny(missing_docs)]

/// Signature algorithm model.
pub mod algorithm;
/// Base64url decoding and encoding.
pub mod base64url;
/// DER encoding primitives.
pub mod der;
/// Error types for key handling.
pub mod errors;
/// Resolved verification keys.
pub mod key;
/// Key resolution from `keyid` values.
pub mod resolver;
/// SPKI envelopes for RSA public keys.
pub mod spki;

pub use algorithm::{Algorithm, Curve, HashAlg};
pub use base64url::{base64url_to_bytes, bytes_to_base64url};
pub use errors::{DerError, KeyError};
pub use key::{PublicKey, ResolvedKey};
pub use resolver::{
    resolve_verification_key, strip_key_id_prefix, KeyResolution, RsaImport, KEY_ID_PREFIXES,
    PUBLIC_EXPONENT,
};
