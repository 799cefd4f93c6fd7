//! SubjectPublicKeyInfo envelopes for RSA public keys.
//!
//! Signers publish RSA keys as SPKI, as bare PKCS#1 `RSAPublicKey`
//! structures, or as the raw modulus alone. The verifying backend only
//! imports SPKI, so the two smaller containers are wrapped here.

use crate::der;

/// Packed content octets of `rsaEncryption` (`1.2.840.113549.1.1.1`).
pub const RSA_ENCRYPTION_OID: [u8; 9] = [0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x01, 0x01];

/// `AlgorithmIdentifier` for `rsaEncryption` with `NULL` parameters.
pub fn rsa_algorithm_identifier() -> Vec<u8> {
    der::sequence(&[&der::oid(&RSA_ENCRYPTION_OID), &der::null()])
}

/// Wraps a PKCS#1 `RSAPublicKey` in an SPKI envelope.
pub fn wrap_pkcs1_in_spki(pkcs1: &[u8]) -> Vec<u8> {
    der::sequence(&[&rsa_algorithm_identifier(), &der::bit_string(pkcs1)])
}

/// Builds a PKCS#1 `RSAPublicKey ::= SEQUENCE { modulus, publicExponent }`.
pub fn rsa_public_key_from_parts(modulus: &[u8], exponent: &[u8]) -> Vec<u8> {
    der::sequence(&[&der::integer(modulus), &der::integer(exponent)])
}

/// Wraps a bare big-endian modulus and exponent in an SPKI envelope.
pub fn wrap_modulus_in_spki(modulus: &[u8], exponent: &[u8]) -> Vec<u8> {
    wrap_pkcs1_in_spki(&rsa_public_key_from_parts(modulus, exponent))
}
