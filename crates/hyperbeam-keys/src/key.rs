use ed25519_dalek::Verifier as _;
use p256::ecdsa::signature::hazmat::PrehashVerifier as _;
use rsa::{Pkcs1v15Sign, Pss, RsaPublicKey};
use sha2::{Sha256, Sha384, Sha512};

use crate::algorithm::{Algorithm, HashAlg};
use crate::resolver::RsaImport;

/// Imported public key material.
#[derive(Debug, Clone)]
pub enum PublicKey {
    /// RSA public key, used with PSS or PKCS#1 v1.5.
    Rsa(RsaPublicKey),
    /// ECDSA P-256 verifying key.
    EcdsaP256(p256::ecdsa::VerifyingKey),
    /// Ed25519 verifying key.
    Ed25519(ed25519_dalek::VerifyingKey),
}

/// A key bound to the algorithm and `keyid` it was resolved for.
///
/// Resolved keys live for a single verification and are never cached.
#[derive(Debug, Clone)]
pub struct ResolvedKey {
    algorithm: Algorithm,
    algorithm_name: String,
    key_id: String,
    key: PublicKey,
    rsa_import: Option<RsaImport>,
}

impl ResolvedKey {
    pub(crate) fn new(
        algorithm: Algorithm,
        algorithm_name: &str,
        key_id: &str,
        key: PublicKey,
        rsa_import: Option<RsaImport>,
    ) -> Self {
        Self {
            algorithm,
            algorithm_name: algorithm_name.to_string(),
            key_id: key_id.to_string(),
            key,
            rsa_import,
        }
    }

    /// Parsed algorithm.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Algorithm string exactly as it appeared on the wire.
    pub fn algorithm_name(&self) -> &str {
        &self.algorithm_name
    }

    /// Key identifier exactly as it appeared on the wire, prefix included.
    pub fn key_id(&self) -> &str {
        &self.key_id
    }

    /// Imported key material.
    pub fn public_key(&self) -> &PublicKey {
        &self.key
    }

    /// Which RSA import strategy succeeded, if this is an RSA key.
    pub fn rsa_import(&self) -> Option<RsaImport> {
        self.rsa_import
    }

    /// Verifies `signature` over `data`.
    ///
    /// Failures of the underlying primitive, including malformed signature
    /// bytes, are reported as `false`.
    pub fn verify(&self, data: &[u8], signature: &[u8]) -> bool {
        let outcome = match (&self.key, self.algorithm) {
            (PublicKey::Rsa(key), Algorithm::RsaPss(hash)) => key
                .verify(pss_scheme(hash), &hash.digest(data), signature)
                .map_err(|e| e.to_string()),
            (PublicKey::Rsa(key), Algorithm::RsaPkcs1(hash)) => key
                .verify(pkcs1_scheme(hash), &hash.digest(data), signature)
                .map_err(|e| e.to_string()),
            (PublicKey::EcdsaP256(key), Algorithm::Ecdsa(_, hash)) => {
                verify_ecdsa(key, hash, data, signature)
            }
            (PublicKey::Ed25519(key), Algorithm::Ed25519) => {
                ed25519_dalek::Signature::from_slice(signature)
                    .and_then(|sig| key.verify(data, &sig))
                    .map_err(|e| e.to_string())
            }
            _ => Err(format!(
                "key type does not match algorithm {}",
                self.algorithm_name
            )),
        };

        match outcome {
            Ok(()) => true,
            Err(reason) => {
                tracing::debug!(
                    algorithm = %self.algorithm_name,
                    %reason,
                    "signature rejected by primitive"
                );
                false
            }
        }
    }
}

/// RSA-PSS with the salt length equal to the digest length.
fn pss_scheme(hash: HashAlg) -> Pss {
    let salt_len = hash.output_len();
    match hash {
        HashAlg::Sha256 => Pss::new_with_salt::<Sha256>(salt_len),
        HashAlg::Sha384 => Pss::new_with_salt::<Sha384>(salt_len),
        HashAlg::Sha512 => Pss::new_with_salt::<Sha512>(salt_len),
    }
}

fn pkcs1_scheme(hash: HashAlg) -> Pkcs1v15Sign {
    match hash {
        HashAlg::Sha256 => Pkcs1v15Sign::new::<Sha256>(),
        HashAlg::Sha384 => Pkcs1v15Sign::new::<Sha384>(),
        HashAlg::Sha512 => Pkcs1v15Sign::new::<Sha512>(),
    }
}

/// ECDSA signatures arrive as fixed-width `r || s`; DER is accepted too.
fn verify_ecdsa(
    key: &p256::ecdsa::VerifyingKey,
    hash: HashAlg,
    data: &[u8],
    signature: &[u8],
) -> Result<(), String> {
    let sig = if signature.len() == 64 {
        p256::ecdsa::Signature::from_slice(signature)
    } else {
        p256::ecdsa::Signature::from_der(signature)
    }
    .map_err(|e| e.to_string())?;

    key.verify_prehash(&hash.digest(data), &sig)
        .map_err(|e| e.to_string())
}
