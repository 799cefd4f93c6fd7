//! Shared fixtures: keys and signed responses.
#![allow(dead_code)]

use std::sync::OnceLock;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use ed25519_dalek::Signer as _;
use http::{Method, StatusCode, Uri};
use hyperbeam_httpsig::{build_signature_base, bytes_to_base64url, parse_signature_input, HttpMessage};
use rsa::traits::PublicKeyParts as _;
use rsa::{Pss, RsaPrivateKey};
use sha2::{Digest as _, Sha512};

pub const COVERED: &[&str] = &["@method", "@path", "@status", "content-type", "ao-types"];

pub fn rsa_key() -> &'static RsaPrivateKey {
    static KEY: OnceLock<RsaPrivateKey> = OnceLock::new();
    KEY.get_or_init(|| RsaPrivateKey::new(&mut rand::thread_rng(), 2048).unwrap())
}

pub fn other_rsa_key() -> &'static RsaPrivateKey {
    static KEY: OnceLock<RsaPrivateKey> = OnceLock::new();
    KEY.get_or_init(|| RsaPrivateKey::new(&mut rand::thread_rng(), 2048).unwrap())
}

/// `publickey:` + base64url of the bare modulus, the way HyperBEAM nodes publish keys.
pub fn rsa_key_id(key: &RsaPrivateKey) -> String {
    format!(
        "publickey:{}",
        bytes_to_base64url(&key.to_public_key().n().to_bytes_be())
    )
}

pub fn rsa_pss_signer(key: &'static RsaPrivateKey) -> impl Fn(&[u8]) -> Vec<u8> {
    move |data: &[u8]| {
        key.sign_with_rng(
            &mut rand::thread_rng(),
            Pss::new_with_salt::<Sha512>(64),
            &Sha512::digest(data),
        )
        .unwrap()
    }
}

pub fn ed25519_key() -> ed25519_dalek::SigningKey {
    ed25519_dalek::SigningKey::from_bytes(&[3; 32])
}

pub fn ed25519_key_id(key: &ed25519_dalek::SigningKey) -> String {
    bytes_to_base64url(key.verifying_key().as_bytes())
}

pub fn ed25519_signer(key: ed25519_dalek::SigningKey) -> impl Fn(&[u8]) -> Vec<u8> {
    move |data: &[u8]| key.sign(data).to_bytes().to_vec()
}

/// A response to `GET /~meta@1.0/info` with no signature headers yet.
pub fn response() -> HttpMessage {
    HttpMessage::new(
        Method::GET,
        Uri::from_static("http://node.example:8734/~meta@1.0/info"),
    )
    .with_status(StatusCode::OK)
    .with_header("content-type", "application/json")
    .unwrap()
    .with_header("ao-types", "status=\"integer\"")
    .unwrap()
}

/// Signs `message` and returns `(signature, signature-input)` header values.
pub fn sign(
    message: &HttpMessage,
    label: &str,
    fields: &[&str],
    algorithm: &str,
    key_id: &str,
    signer: impl Fn(&[u8]) -> Vec<u8>,
) -> (String, String) {
    let list = fields
        .iter()
        .map(|field| format!("\"{field}\""))
        .collect::<Vec<_>>()
        .join(" ");
    let input = format!(r#"{label}=({list});alg="{algorithm}";keyid="{key_id}""#);
    let entry = parse_signature_input(&input).remove(0);
    let base = build_signature_base(message, &entry).unwrap();
    let signature = format!("{label}=:{}:", STANDARD.encode(signer(base.as_bytes())));
    (signature, input)
}

/// Returns `message` with both signature headers attached.
pub fn attach(message: HttpMessage, signature: &str, input: &str) -> HttpMessage {
    message
        .with_header("signature", signature)
        .unwrap()
        .with_header("signature-input", input)
        .unwrap()
}

/// Flips one bit inside the base64 payload of a `label=:...:` value.
pub fn flip_signature_byte(signature: &str) -> String {
    let (label, rest) = signature.split_once("=:").unwrap();
    let encoded = rest.trim_end_matches(':');
    let mut bytes = STANDARD.decode(encoded).unwrap();
    bytes[5] ^= 0x01;
    format!("{label}=:{}:", STANDARD.encode(bytes))
}
