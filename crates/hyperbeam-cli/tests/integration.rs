//! Integration tests for CLI commands.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use ed25519_dalek::{Signer, SigningKey};
use http::{Method, StatusCode, Uri};
use hyperbeam_httpsig::{build_signature_base, bytes_to_base64url, parse_signature_input, HttpMessage};
use std::process::Command;
use tempfile::TempDir;

const URL: &str = "http://node.example:8734/~meta@1.0/info";

fn run_cli(args: &[&str]) -> (bool, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_hbsig"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run hbsig");

    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    let success = output.status.success();

    (success, stdout, stderr)
}

fn signing_key() -> SigningKey {
    SigningKey::from_bytes(&[9; 32])
}

fn signature_input() -> String {
    let key_id = bytes_to_base64url(signing_key().verifying_key().as_bytes());
    format!(r#"sig1=("@method" "@path" "@status" "content-type");alg="ed25519";keyid="{key_id}""#)
}

/// Writes a signed raw response; `tamper` changes the content type after signing.
fn write_response(dir: &TempDir, tamper: bool) -> String {
    let message = HttpMessage::new(Method::GET, Uri::from_static(URL))
        .with_status(StatusCode::OK)
        .with_header("content-type", "application/json")
        .unwrap();
    let input = signature_input();
    let entry = parse_signature_input(&input).remove(0);
    let base = build_signature_base(&message, &entry).unwrap();
    let signature = STANDARD.encode(signing_key().sign(base.as_bytes()).to_bytes());

    let content_type = if tamper { "text/html" } else { "application/json" };
    let raw = format!(
        "HTTP/1.1 200 OK\r\nContent-Type: {content_type}\r\nSignature: sig1=:{signature}:\r\nSignature-Input: {input}\r\n\r\n{{\"ok\":true}}\r\n"
    );

    let path = dir.path().join(if tamper { "tampered.http" } else { "signed.http" });
    std::fs::write(&path, raw).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn test_verify_command_valid() {
    let dir = TempDir::new().unwrap();
    let path = write_response(&dir, false);

    let (success, stdout, _) = run_cli(&["verify", &path, "--url", URL, "--strict"]);
    assert!(success);
    assert!(stdout.contains("SIGNATURE"));
    let row = stdout.lines().nth(2).unwrap();
    assert!(row.starts_with("valid"));
    assert!(row.contains("ed25519"));
}

#[test]
fn test_verify_command_json_output() {
    let dir = TempDir::new().unwrap();
    let path = write_response(&dir, false);

    let (success, stdout, _) = run_cli(&["verify", &path, "--url", URL, "--json"]);
    assert!(success);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("Invalid JSON");
    assert_eq!(value["signature_valid"], true);
    assert_eq!(value["algorithm"], "ed25519");
    assert_eq!(value["signer"].as_str().unwrap().len(), 43);
}

#[test]
fn test_verify_command_tampered_strict_fails() {
    let dir = TempDir::new().unwrap();
    let path = write_response(&dir, true);

    let (success, stdout, _) = run_cli(&["verify", &path, "--url", URL]);
    assert!(success);
    assert!(stdout.lines().nth(2).unwrap().starts_with("invalid"));

    let (success, _, stderr) = run_cli(&["verify", &path, "--url", URL, "--strict"]);
    assert!(!success);
    assert!(stderr.contains("Error: Signature not valid"));
}

#[test]
fn test_verify_command_wrong_url_fails() {
    let dir = TempDir::new().unwrap();
    let path = write_response(&dir, false);

    let (success, _, _) = run_cli(&["verify", &path, "--url", "/elsewhere", "--strict"]);
    assert!(!success);
}

#[test]
fn test_verify_command_missing_file() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.http");

    let (success, _, stderr) = run_cli(&["verify", missing.to_str().unwrap()]);
    assert!(!success);
    assert!(stderr.contains("Failed to read file"));
}

#[test]
fn test_parse_command() {
    let (success, stdout, _) = run_cli(&[
        "parse",
        r#"sig1=("@method" "date");alg="rsa-pss-sha512";keyid="abc123""#,
    ]);
    assert!(success);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("Invalid JSON");
    assert_eq!(value[0]["label"], "sig1");
    assert_eq!(value[0]["fields"], serde_json::json!(["@method", "date"]));
    assert_eq!(value[0]["key_id"], "abc123");
}

#[test]
fn test_parse_command_empty() {
    let (success, _, stderr) = run_cli(&["parse", " , "]);
    assert!(!success);
    assert!(stderr.contains("Error:"));
}

#[test]
fn test_address_command() {
    let (success, stdout, _) = run_cli(&[
        "address",
        r#"s=("a");alg="rsa-pss-sha512";keyid="publickey:dGVzdA""#,
    ]);
    assert!(success);
    assert_eq!(stdout.trim(), "n4bQgYhMfWWaL-qgxVrQFaO_TxsrC4Is0V1sFbDwCgg");
}

#[test]
fn test_message_id_command() {
    let (success, stdout, _) = run_cli(&["message-id", "http-sig-dGVzdA:rest"]);
    assert!(success);
    assert_eq!(stdout.trim(), "n4bQgYhMfWWaL-qgxVrQFaO_TxsrC4Is0V1sFbDwCgg");

    let (success, stdout, _) = run_cli(&["message-id", "--scheme", "sig", "sig-dGVzdA:rest"]);
    assert!(success);
    assert_eq!(stdout.trim(), "n4bQgYhMfWWaL-qgxVrQFaO_TxsrC4Is0V1sFbDwCgg");

    let (success, _, stderr) = run_cli(&["message-id", "dGVzdA"]);
    assert!(!success);
    assert!(stderr.contains("http-sig-"));
}

#[test]
fn test_resolve_command() {
    let key_id = bytes_to_base64url(signing_key().verifying_key().as_bytes());
    let (success, stdout, _) = run_cli(&["resolve", "--alg", "ed25519", &key_id]);
    assert!(success);
    assert_eq!(stdout.trim(), "ed25519");

    let (success, stdout, _) = run_cli(&["resolve", "--alg", "hmac-sha256", "constant:ao"]);
    assert!(success);
    assert_eq!(stdout.trim(), "unverifiable (hmac-sha256)");

    let (success, _, stderr) = run_cli(&["resolve", "--alg", "rsa-pss-sha512", "AAAA"]);
    assert!(!success);
    assert!(stderr.contains("Error:"));
}
