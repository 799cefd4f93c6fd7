//! Short fingerprints for signers and messages.
//!
//! Both derivations are `base64url_no_pad(sha256(bytes))`. For an RSA signer
//! whose `keyid` is the bare modulus this is the familiar 43-character wallet
//! address.

use hyperbeam_keys::{base64url_to_bytes, bytes_to_base64url, strip_key_id_prefix};
use sha2::{Digest as _, Sha256};

use crate::errors::AddressError;
use crate::input::{parse_signature_input, select_candidate};

/// Scheme token that prefixes full signature values (`http-sig-...`).
pub const MESSAGE_ID_SCHEME: &str = "http-sig";

/// Address reported when a `Signature-Input` header has no entries.
pub const UNKNOWN_SIGNER: &str = "Unknown";

/// Derives the signer address from a `Signature-Input` header value.
///
/// The candidate entry is chosen like the verifier chooses it: first
/// non-HMAC entry, else the first entry.
///
/// # Errors
///
/// Returns [`AddressError::Key`] when the candidate `keyid` is not base64url.
pub fn derive_signer_address(signature_input_value: &str) -> Result<String, AddressError> {
    let entries = parse_signature_input(signature_input_value);
    let Some(candidate) = select_candidate(&entries) else {
        return Ok(UNKNOWN_SIGNER.to_string());
    };

    let key = base64url_to_bytes(strip_key_id_prefix(&candidate.key_id))?;
    Ok(bytes_to_base64url(&Sha256::digest(&key)))
}

/// Derives a message id from a full `http-sig-<base64url>:<rest>` value.
///
/// # Errors
///
/// Returns [`AddressError::InvalidSignatureFormat`] when the prefix is absent.
pub fn derive_message_id(full_signature_value: &str) -> Result<String, AddressError> {
    derive_message_id_with_scheme(full_signature_value, MESSAGE_ID_SCHEME)
}

/// Same as [`derive_message_id`] with a caller-chosen scheme token.
pub fn derive_message_id_with_scheme(
    full_signature_value: &str,
    scheme: &str,
) -> Result<String, AddressError> {
    let prefix = format!("{scheme}-");
    let rest = full_signature_value
        .trim()
        .strip_prefix(&prefix)
        .ok_or(AddressError::InvalidSignatureFormat { expected: prefix })?;

    let encoded = rest.split(':').next().unwrap_or_default();
    let bytes = base64url_to_bytes(encoded)?;
    Ok(bytes_to_base64url(&Sha256::digest(&bytes)))
}
