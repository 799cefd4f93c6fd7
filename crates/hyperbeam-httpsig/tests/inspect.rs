mod common;

use common::*;
use hyperbeam_httpsig::{bytes_to_base64url, inspect_message, VerificationResult};
use rsa::traits::PublicKeyParts as _;
use sha2::{Digest as _, Sha256};

#[test]
fn unsigned_response_has_nothing_to_report() {
    assert_eq!(inspect_message(&response()), VerificationResult::default());
}

#[test]
fn valid_rsa_signature_reports_signer_address() {
    let message = response();
    let (signature, input) = sign(
        &message,
        "sig1",
        COVERED,
        "rsa-pss-sha512",
        &rsa_key_id(rsa_key()),
        rsa_pss_signer(rsa_key()),
    );
    let result = inspect_message(&attach(message, &signature, &input));

    let modulus = rsa_key().to_public_key().n().to_bytes_be();
    assert_eq!(result.signature_valid, Some(true));
    assert_eq!(result.signer, Some(bytes_to_base64url(&Sha256::digest(&modulus))));
    assert_eq!(result.algorithm.as_deref(), Some("rsa-pss-sha512"));
    assert_eq!(result.key_id, Some(rsa_key_id(rsa_key())));
}

#[test]
fn forged_signature_is_reported_invalid() {
    let message = response();
    let (signature, input) = sign(
        &message,
        "sig1",
        COVERED,
        "rsa-pss-sha512",
        &rsa_key_id(rsa_key()),
        rsa_pss_signer(rsa_key()),
    );
    let result = inspect_message(&attach(message, &flip_signature_byte(&signature), &input));

    assert_eq!(result.signature_valid, Some(false));
    assert!(result.signer.is_some());
}

#[test]
fn hmac_signature_is_not_attempted() {
    let message = attach(
        response(),
        "sig1=:AAAA:",
        r#"sig1=("@method");alg="hmac-sha256";keyid="constant:ao""#,
    );
    let result = inspect_message(&message);

    assert_eq!(result.signature_valid, None);
    assert_eq!(result.algorithm.as_deref(), Some("hmac-sha256"));
}

#[test]
fn result_serializes_for_viewers() {
    let result = VerificationResult {
        signature_valid: Some(true),
        signer: Some("addr".to_string()),
        algorithm: Some("ed25519".to_string()),
        key_id: None,
    };
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "signature_valid": true,
            "signer": "addr",
            "algorithm": "ed25519",
            "key_id": null
        })
    );
    let back: VerificationResult = serde_json::from_value(json).unwrap();
    assert_eq!(back, result);
}
