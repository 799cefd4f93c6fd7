//! Resolution of `keyid` values into verifying keys.

use std::borrow::Cow;
use std::fmt;

use p256::pkcs8::DecodePublicKey as _;
use rsa::RsaPublicKey;

use crate::algorithm::Algorithm;
use crate::base64url::base64url_to_bytes;
use crate::der;
use crate::errors::KeyError;
use crate::key::{PublicKey, ResolvedKey};
use crate::spki;

/// Scheme prefixes a `keyid` may carry ahead of its base64url payload.
pub const KEY_ID_PREFIXES: [&str; 2] = ["publickey:", "constant:"];

/// Public exponent assumed when a key arrives as a bare modulus (65537).
pub const PUBLIC_EXPONENT: [u8; 3] = [0x01, 0x00, 0x01];

/// Ed25519 public key length.
const ED25519_KEY_LEN: usize = 32;

/// Outcome of resolving a `keyid`.
#[derive(Debug, Clone)]
pub enum KeyResolution {
    /// A key ready for verification.
    Resolved(ResolvedKey),
    /// The algorithm needs a shared secret the client does not hold.
    Unverifiable {
        /// Algorithm string as it appeared on the wire.
        algorithm: String,
    },
}

impl KeyResolution {
    /// Returns the resolved key, or `None` when unverifiable.
    pub fn into_key(self) -> Option<ResolvedKey> {
        match self {
            KeyResolution::Resolved(key) => Some(key),
            KeyResolution::Unverifiable { .. } => None,
        }
    }

    /// Returns `true` when the algorithm cannot be verified client-side.
    pub fn is_unverifiable(&self) -> bool {
        matches!(self, KeyResolution::Unverifiable { .. })
    }
}

/// Container an RSA key was found in, tried in [`RsaImport::ORDER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RsaImport {
    /// Bytes were already a SubjectPublicKeyInfo.
    Spki,
    /// Bytes were a bare PKCS#1 `RSAPublicKey`.
    Pkcs1,
    /// Bytes were the modulus alone; the exponent is [`PUBLIC_EXPONENT`].
    Modulus,
}

impl RsaImport {
    /// Strategies in the order they are attempted.
    pub const ORDER: [RsaImport; 3] = [RsaImport::Spki, RsaImport::Pkcs1, RsaImport::Modulus];

    /// Builds the SPKI candidate for this strategy, or `None` when the raw
    /// bytes cannot be in this container.
    pub fn candidate(self, raw: &[u8]) -> Option<Cow<'_, [u8]>> {
        match self {
            RsaImport::Spki => Some(Cow::Borrowed(raw)),
            RsaImport::Pkcs1 => (raw.first() == Some(&der::TAG_SEQUENCE))
                .then(|| Cow::Owned(spki::wrap_pkcs1_in_spki(raw))),
            RsaImport::Modulus => Some(Cow::Owned(spki::wrap_modulus_in_spki(
                raw,
                &PUBLIC_EXPONENT,
            ))),
        }
    }
}

impl fmt::Display for RsaImport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RsaImport::Spki => write!(f, "spki"),
            RsaImport::Pkcs1 => write!(f, "pkcs1"),
            RsaImport::Modulus => write!(f, "modulus"),
        }
    }
}

/// Strips a `publickey:` or `constant:` scheme prefix.
pub fn strip_key_id_prefix(key_id: &str) -> &str {
    KEY_ID_PREFIXES
        .iter()
        .find_map(|prefix| key_id.strip_prefix(prefix))
        .unwrap_or(key_id)
}

/// Resolves `key_id` into a key that verifies signatures made with `algorithm`.
///
/// HMAC algorithms resolve to [`KeyResolution::Unverifiable`] without the
/// `keyid` being decoded.
///
/// # Errors
///
/// - [`KeyError::UnsupportedAlgorithm`] when the algorithm names no known family
/// - [`KeyError::InvalidKeyEncoding`] when the `keyid` is not base64url
/// - [`KeyError::KeyImport`] when no import strategy accepts the key bytes
pub fn resolve_verification_key(algorithm: &str, key_id: &str) -> Result<KeyResolution, KeyError> {
    let parsed = Algorithm::parse(algorithm)?;
    let key_bytes = || base64url_to_bytes(strip_key_id_prefix(key_id));
    let import_error = |reason: String| KeyError::KeyImport {
        algorithm: algorithm.to_string(),
        reason,
    };

    let (key, rsa_import) = match parsed {
        Algorithm::Hmac(_) => {
            return Ok(KeyResolution::Unverifiable {
                algorithm: algorithm.to_string(),
            });
        }
        Algorithm::RsaPss(_) | Algorithm::RsaPkcs1(_) => {
            let (key, strategy) = import_rsa(&key_bytes()?).map_err(import_error)?;
            (PublicKey::Rsa(key), Some(strategy))
        }
        Algorithm::Ecdsa(..) => {
            let key = p256::PublicKey::from_public_key_der(&key_bytes()?)
                .map_err(|e| import_error(e.to_string()))?;
            (PublicKey::EcdsaP256(p256::ecdsa::VerifyingKey::from(&key)), None)
        }
        Algorithm::Ed25519 => {
            let key = import_ed25519(&key_bytes()?).map_err(import_error)?;
            (PublicKey::Ed25519(key), None)
        }
    };

    tracing::debug!(
        algorithm,
        family = parsed.family(),
        rsa_import = ?rsa_import,
        "resolved verification key"
    );

    Ok(KeyResolution::Resolved(ResolvedKey::new(
        parsed, algorithm, key_id, key, rsa_import,
    )))
}

/// Tries every [`RsaImport`] strategy in order; the first success wins.
fn import_rsa(raw: &[u8]) -> Result<(RsaPublicKey, RsaImport), String> {
    let mut last_error = String::from("no applicable import strategy");
    for strategy in RsaImport::ORDER {
        let Some(candidate) = strategy.candidate(raw) else {
            continue;
        };
        match RsaPublicKey::from_public_key_der(&candidate) {
            Ok(key) => return Ok((key, strategy)),
            Err(e) => {
                tracing::trace!(%strategy, error = %e, "rsa import strategy failed");
                last_error = format!("{strategy}: {e}");
            }
        }
    }
    Err(last_error)
}

/// Keys embedded in larger structures keep the public key in the last 32 bytes.
fn import_ed25519(raw: &[u8]) -> Result<ed25519_dalek::VerifyingKey, String> {
    if raw.len() < ED25519_KEY_LEN {
        return Err(format!(
            "ed25519 key must be {ED25519_KEY_LEN} bytes, got {}",
            raw.len()
        ));
    }
    let mut bytes = [0u8; ED25519_KEY_LEN];
    bytes.copy_from_slice(&raw[raw.len() - ED25519_KEY_LEN..]);
    ed25519_dalek::VerifyingKey::from_bytes(&bytes).map_err(|e| e.to_string())
}
