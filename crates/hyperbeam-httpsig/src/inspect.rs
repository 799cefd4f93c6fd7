use hyperbeam_keys::Algorithm;
use serde::{Deserialize, Serialize};

use crate::address::derive_signer_address;
use crate::input::{parse_signature_input, select_candidate};
use crate::message::HttpMessage;
use crate::verify::verify_signature;

/// What a response viewer shows about a signed response.
///
/// `signature_valid` is `None` when verification was not attempted (no
/// signature, or an HMAC-only signature) and `Some(false)` when it was
/// attempted and failed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationResult {
    /// Verification outcome.
    pub signature_valid: Option<bool>,
    /// Signer address derived from the candidate `keyid`.
    pub signer: Option<String>,
    /// Algorithm of the candidate entry.
    pub algorithm: Option<String>,
    /// `keyid` of the candidate entry.
    pub key_id: Option<String>,
}

/// Inspects the signature headers of `message`.
pub fn inspect_message(message: &HttpMessage) -> VerificationResult {
    let (Some(signature), Some(input)) = (
        message.header_text("signature"),
        message.header_text("signature-input"),
    ) else {
        return VerificationResult::default();
    };

    let entries = parse_signature_input(&input);
    let Some(candidate) = select_candidate(&entries) else {
        return VerificationResult::default();
    };

    let unverifiable = Algorithm::parse(&candidate.algorithm)
        .map(|algorithm| algorithm.is_unverifiable())
        .unwrap_or(false);
    let signature_valid = if unverifiable {
        None
    } else {
        Some(verify_signature(&signature, &input, message))
    };

    let signer = match derive_signer_address(&input) {
        Ok(address) => Some(address),
        Err(e) => {
            tracing::debug!(error = %e, "could not derive signer address");
            None
        }
    };

    VerificationResult {
        signature_valid,
        signer,
        algorithm: Some(candidate.algorithm.clone()),
        key_id: Some(candidate.key_id.clone()),
    }
}
