//! HTTP message signature verification for HyperBEAM responses.
//!
//! A HyperBEAM node signs its HTTP responses with `Signature` and
//! `Signature-Input` headers. This crate provides:
//! - A forgiving `Signature-Input` parser that never fails
//! - Signature base construction over a response and its originating request
//! - A generic verification routine with a [`KeyLookup`] seam
//! - The [`verify_signature`] boundary, which reduces every failure to `false`
//! - Signer address and message id derivation
//! - [`inspect_message`], the single call a response viewer needs
//!
//! ## Quick Start
//!
//! ```rust
//! use hyperbeam_httpsig::{inspect_message, parse_signature_input, HttpMessage};
//! use http::{Method, Uri};
//!
//! let entries = parse_signature_input(r#"sig1=("@method" "date");alg="rsa-pss-sha512";keyid="abc123""#);
//! assert_eq!(entries[0].fields, vec!["@method", "date"]);
//!
//! let message = HttpMessage::new(Method::GET, Uri::from_static("http://localhost:8734/~meta@1.0/info"));
//! let result = inspect_message(&message);
//! assert_eq!(result.signature_valid, None);
//! ```
//!
//! ## Key Types
//!
//! - [`SignatureInputEntry`] - One parsed `Signature-Input` member
//! - [`HttpMessage`] - Response headers plus the request that produced them
//! - [`VerificationResult`] - What a viewer displays about a response
#![deny(missing_docs)]

/// Signer address and message id derivation.
pub mod address;
/// Signature base construction.
pub mod base;
/// Error types for parsing and verification.
pub mod errors;
/// `Signature-Input` header parsing.
pub mod input;
/// Response inspection.
pub mod inspect;
/// HTTP message model.
pub mod message;
/// `Signature` header parsing.
pub mod signature;
/// Signature verification.
pub mod verify;

pub use address::{
    derive_message_id, derive_message_id_with_scheme, derive_signer_address, MESSAGE_ID_SCHEME,
    UNKNOWN_SIGNER,
};
pub use base::build_signature_base;
pub use errors::{AddressError, SignatureBaseError, SignatureHeaderError, VerifyError};
pub use hyperbeam_keys::{base64url_to_bytes, bytes_to_base64url, resolve_verification_key};
pub use input::{parse_signature_input, select_candidate, SignatureInputEntry};
pub use inspect::{inspect_message, VerificationResult};
pub use message::HttpMessage;
pub use signature::{parse_signature_header, SignatureValue};
pub use verify::{verify_message, verify_signature, KeyLookup, ResolvingKeyLookup};
