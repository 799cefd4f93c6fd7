use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine;

use crate::errors::KeyError;

/// Decodes base64url text into bytes.
///
/// The URL-safe alphabet is mapped onto the standard one (`-` to `+`, `_` to
/// `/`) and the input is padded with `=` to a multiple of four before
/// decoding, so standard base64 and unpadded input are accepted as well.
pub fn base64url_to_bytes(input: &str) -> Result<Vec<u8>, KeyError> {
    let trimmed = input.trim().trim_end_matches('=');
    let mut normalized: String = trimmed
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();
    while normalized.len() % 4 != 0 {
        normalized.push('=');
    }

    STANDARD
        .decode(normalized.as_bytes())
        .map_err(|e| KeyError::InvalidKeyEncoding(e.to_string()))
}

/// Encodes bytes as base64url without padding.
pub fn bytes_to_base64url(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}
