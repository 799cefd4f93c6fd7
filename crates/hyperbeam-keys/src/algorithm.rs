use std::fmt;

use crate::errors::KeyError;

/// Hash function bound to a signature algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlg {
    /// SHA-256.
    Sha256,
    /// SHA-384.
    Sha384,
    /// SHA-512.
    Sha512,
}

impl HashAlg {
    /// Picks the hash named in an algorithm string, defaulting to SHA-256.
    fn from_wire(lowered: &str) -> Self {
        if lowered.contains("sha512") {
            HashAlg::Sha512
        } else if lowered.contains("sha384") {
            HashAlg::Sha384
        } else {
            HashAlg::Sha256
        }
    }

    /// Digest output length in bytes (also the RSA-PSS salt length).
    pub fn output_len(self) -> usize {
        match self {
            HashAlg::Sha256 => 32,
            HashAlg::Sha384 => 48,
            HashAlg::Sha512 => 64,
        }
    }

    /// Hashes `data`.
    pub fn digest(self, data: &[u8]) -> Vec<u8> {
        use sha2::Digest as _;
        match self {
            HashAlg::Sha256 => sha2::Sha256::digest(data).to_vec(),
            HashAlg::Sha384 => sha2::Sha384::digest(data).to_vec(),
            HashAlg::Sha512 => sha2::Sha512::digest(data).to_vec(),
        }
    }
}

impl fmt::Display for HashAlg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashAlg::Sha256 => write!(f, "SHA-256"),
            HashAlg::Sha384 => write!(f, "SHA-384"),
            HashAlg::Sha512 => write!(f, "SHA-512"),
        }
    }
}

/// Elliptic curves accepted for ECDSA keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Curve {
    /// NIST P-256, the only curve supported.
    P256,
}

/// Signature algorithm family, parsed once from the `alg` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// RSASSA-PSS.
    RsaPss(HashAlg),
    /// RSASSA-PKCS1-v1_5.
    RsaPkcs1(HashAlg),
    /// ECDSA.
    Ecdsa(Curve, HashAlg),
    /// EdDSA over Curve25519.
    Ed25519,
    /// HMAC; needs a shared secret and cannot be verified by a client.
    Hmac(HashAlg),
}

impl Algorithm {
    /// Parses an algorithm identifier such as `rsa-pss-sha512`.
    ///
    /// Matching is case-insensitive and by substring, so vendor spellings
    /// like `RSA-PSS-SHA512` or `ecdsa-p256-sha256` resolve to the same family.
    pub fn parse(wire: &str) -> Result<Self, KeyError> {
        let lowered = wire.trim().to_ascii_lowercase();
        let hash = HashAlg::from_wire(&lowered);

        if lowered.contains("hmac") {
            Ok(Algorithm::Hmac(hash))
        } else if lowered.contains("rsa") {
            if lowered.contains("pss") {
                Ok(Algorithm::RsaPss(hash))
            } else {
                Ok(Algorithm::RsaPkcs1(hash))
            }
        } else if lowered.contains("ecdsa") {
            Ok(Algorithm::Ecdsa(Curve::P256, hash))
        } else if lowered.contains("ed25519") {
            Ok(Algorithm::Ed25519)
        } else {
            Err(KeyError::UnsupportedAlgorithm(wire.to_string()))
        }
    }

    /// Returns `true` for algorithms a client can never verify.
    pub fn is_unverifiable(&self) -> bool {
        matches!(self, Algorithm::Hmac(_))
    }

    /// Short family name used in logs and CLI output.
    pub fn family(&self) -> &'static str {
        match self {
            Algorithm::RsaPss(_) => "rsa-pss",
            Algorithm::RsaPkcs1(_) => "rsa-pkcs1-v1_5",
            Algorithm::Ecdsa(Curve::P256, _) => "ecdsa-p256",
            Algorithm::Ed25519 => "ed25519",
            Algorithm::Hmac(_) => "hmac",
        }
    }
}
