//! Signature verification.
//!
//! [`verify_message`] is the generic routine: it walks every
//! `Signature-Input` entry, asks a [`KeyLookup`] for the key, and checks the
//! matching `Signature` member against the rebuilt signature base.
//! [`verify_signature`] is the boundary used by response viewers; it never
//! fails and answers only "trust this content" or "do not".

use hyperbeam_keys::{resolve_verification_key, KeyError, KeyResolution, ResolvedKey};

use crate::base::build_signature_base;
use crate::errors::VerifyError;
use crate::input::{parse_signature_input, select_candidate};
use crate::message::HttpMessage;
use crate::signature::parse_signature_header;

/// Supplies verification keys for `Signature-Input` entries.
///
/// Returning `Ok(None)` skips the entry; this is how unverifiable (HMAC)
/// entries are passed over.
pub trait KeyLookup {
    /// Resolves the key for `key_id` and `algorithm` as they appear on the wire.
    fn lookup(&self, key_id: &str, algorithm: &str) -> Result<Option<ResolvedKey>, KeyError>;
}

impl<F> KeyLookup for F
where
    F: Fn(&str, &str) -> Result<Option<ResolvedKey>, KeyError>,
{
    fn lookup(&self, key_id: &str, algorithm: &str) -> Result<Option<ResolvedKey>, KeyError> {
        self(key_id, algorithm)
    }
}

/// Derives keys from the `keyid` itself, which is how HyperBEAM publishes them.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolvingKeyLookup;

impl KeyLookup for ResolvingKeyLookup {
    fn lookup(&self, key_id: &str, algorithm: &str) -> Result<Option<ResolvedKey>, KeyError> {
        Ok(resolve_verification_key(algorithm, key_id)?.into_key())
    }
}

/// Verifies every signature in `message` whose key `lookup` can supply.
///
/// Returns `Ok(true)` when at least one signature verified and none failed,
/// and `Ok(false)` on a cryptographic mismatch or when every entry was
/// skipped.
///
/// # Errors
///
/// Returns [`VerifyError`] when the signature headers are missing or
/// malformed, a covered component is absent, or key lookup fails.
pub fn verify_message<L>(message: &HttpMessage, lookup: &L) -> Result<bool, VerifyError>
where
    L: KeyLookup + ?Sized,
{
    let signature_header = message
        .header_text("signature")
        .ok_or(VerifyError::MissingHeader("signature"))?;
    let input_header = message
        .header_text("signature-input")
        .ok_or(VerifyError::MissingHeader("signature-input"))?;

    let entries = parse_signature_input(&input_header);
    if entries.is_empty() {
        return Err(VerifyError::NoSignatureInput);
    }
    let signatures = parse_signature_header(&signature_header)?;

    let mut verified = 0usize;
    for entry in &entries {
        let Some(key) = lookup.lookup(&entry.key_id, &entry.algorithm)? else {
            tracing::debug!(label = %entry.label, algorithm = %entry.algorithm, "skipping signature without a usable key");
            continue;
        };

        let signature = signatures
            .iter()
            .find(|value| value.label == entry.label)
            .ok_or_else(|| VerifyError::MissingSignature(entry.label.clone()))?;
        let base = build_signature_base(message, entry)?;

        if !key.verify(base.as_bytes(), &signature.bytes) {
            tracing::debug!(label = %entry.label, algorithm = %entry.algorithm, "signature mismatch");
            return Ok(false);
        }
        verified += 1;
    }

    Ok(verified > 0)
}

/// Verifies a response signature, reducing every failure to `false`.
///
/// `signature_value` and `signature_input_value` are injected into the
/// message headers before verification, so they take part even when a
/// transport layer stripped them from `message`.
pub fn verify_signature(
    signature_value: &str,
    signature_input_value: &str,
    message: &HttpMessage,
) -> bool {
    match try_verify_signature(signature_value, signature_input_value, message) {
        Ok(valid) => valid,
        Err(VerifyError::Unverifiable(algorithm)) => {
            tracing::debug!(%algorithm, "signature cannot be verified client-side");
            false
        }
        Err(e) => {
            tracing::warn!(error = %e, "signature verification failed");
            false
        }
    }
}

fn try_verify_signature(
    signature_value: &str,
    signature_input_value: &str,
    message: &HttpMessage,
) -> Result<bool, VerifyError> {
    let mut message = message.clone();
    message.insert_header("signature", signature_value)?;
    message.insert_header("signature-input", signature_input_value)?;

    let entries = parse_signature_input(signature_input_value);
    let candidate = select_candidate(&entries).ok_or(VerifyError::NoSignatureInput)?;
    if candidate.key_id.is_empty() {
        return Err(VerifyError::MissingKeyId(candidate.label.clone()));
    }

    match resolve_verification_key(&candidate.algorithm, &candidate.key_id)? {
        KeyResolution::Unverifiable { algorithm } => Err(VerifyError::Unverifiable(algorithm)),
        KeyResolution::Resolved(key) => {
            tracing::debug!(
                label = %candidate.label,
                algorithm = %key.algorithm_name(),
                rsa_import = ?key.rsa_import(),
                "verifying response signature"
            );
            let lookup = CandidateKeyLookup {
                candidate: key,
                fallback: ResolvingKeyLookup,
            };
            let valid = verify_message(&message, &lookup)?;
            tracing::debug!(label = %candidate.label, valid, "signature checked");
            Ok(valid)
        }
    }
}

/// Serves an already resolved key for its own `keyid`/`alg` pair and defers
/// every other entry to `fallback`.
struct CandidateKeyLookup<L> {
    candidate: ResolvedKey,
    fallback: L,
}

impl<L: KeyLookup> KeyLookup for CandidateKeyLookup<L> {
    fn lookup(&self, key_id: &str, algorithm: &str) -> Result<Option<ResolvedKey>, KeyError> {
        if key_id == self.candidate.key_id() && algorithm == self.candidate.algorithm_name() {
            Ok(Some(self.candidate.clone()))
        } else {
            self.fallback.lookup(key_id, algorithm)
        }
    }
}
