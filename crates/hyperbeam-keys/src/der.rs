//! Minimal DER encoding for the structures an RSA SPKI envelope needs.
//!
//! Only definite-length encodings are produced. Lengths use the short form
//! below 128 and one to three length octets above it, which covers every key
//! size a signer could plausibly emit.

use crate::errors::DerError;

/// `INTEGER` tag.
pub const TAG_INTEGER: u8 = 0x02;
/// `BIT STRING` tag.
pub const TAG_BIT_STRING: u8 = 0x03;
/// `NULL` tag.
pub const TAG_NULL: u8 = 0x05;
/// `OBJECT IDENTIFIER` tag.
pub const TAG_OID: u8 = 0x06;
/// Constructed `SEQUENCE` tag.
pub const TAG_SEQUENCE: u8 = 0x30;

/// Encodes a DER length prefix.
///
/// At most three length octets are emitted, so `len` must be below 16 MiB
/// (`1 << 24`).
pub fn encode_length(len: usize) -> Vec<u8> {
    debug_assert!(len < 1 << 24, "DER length {len} exceeds three length octets");
    if len < 0x80 {
        vec![len as u8]
    } else if len < 0x100 {
        vec![0x81, len as u8]
    } else if len < 0x1_0000 {
        vec![0x82, (len >> 8) as u8, len as u8]
    } else {
        vec![0x83, (len >> 16) as u8, (len >> 8) as u8, len as u8]
    }
}

/// Decodes a DER length prefix, returning the declared length and the number
/// of bytes the prefix occupied.
pub fn decode_length(bytes: &[u8]) -> Result<(usize, usize), DerError> {
    let first = *bytes.first().ok_or(DerError::Truncated { offset: 0 })?;
    if first < 0x80 {
        return Ok((first as usize, 1));
    }

    let octets = (first & 0x7f) as usize;
    if octets == 0 || octets > 3 {
        return Err(DerError::UnsupportedLength(first));
    }
    if bytes.len() < 1 + octets {
        return Err(DerError::Truncated {
            offset: bytes.len(),
        });
    }

    let len = bytes[1..=octets]
        .iter()
        .fold(0usize, |acc, b| (acc << 8) | *b as usize);
    Ok((len, 1 + octets))
}

/// Encodes a tag-length-value triple.
pub fn tlv(tag: u8, content: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(content.len() + 5);
    out.push(tag);
    out.extend_from_slice(&encode_length(content.len()));
    out.extend_from_slice(content);
    out
}

/// Encodes unsigned big-endian bytes as a non-negative `INTEGER`.
///
/// Redundant leading zeros are dropped and a single zero byte is prepended
/// when the high bit of the leading byte is set.
pub fn integer(unsigned_be: &[u8]) -> Vec<u8> {
    let start = unsigned_be
        .iter()
        .position(|b| *b != 0)
        .unwrap_or(unsigned_be.len());
    let digits = &unsigned_be[start..];

    let mut content = Vec::with_capacity(digits.len() + 1);
    if digits.first().map_or(true, |b| *b >= 0x80) {
        content.push(0x00);
    }
    content.extend_from_slice(digits);
    tlv(TAG_INTEGER, &content)
}

/// Wraps already-encoded elements in a `SEQUENCE`.
pub fn sequence(elements: &[&[u8]]) -> Vec<u8> {
    tlv(TAG_SEQUENCE, &elements.concat())
}

/// Encodes a `BIT STRING` with zero unused bits.
pub fn bit_string(bytes: &[u8]) -> Vec<u8> {
    let mut content = Vec::with_capacity(bytes.len() + 1);
    content.push(0x00);
    content.extend_from_slice(bytes);
    tlv(TAG_BIT_STRING, &content)
}

/// Encodes `NULL`.
pub fn null() -> Vec<u8> {
    vec![TAG_NULL, 0x00]
}

/// Encodes an `OBJECT IDENTIFIER` from its already-packed content octets.
pub fn oid(content: &[u8]) -> Vec<u8> {
    tlv(TAG_OID, content)
}

/// Reads one TLV with the expected tag, returning its content and the rest of
/// the input.
pub fn read_tlv(bytes: &[u8], expected: u8) -> Result<(&[u8], &[u8]), DerError> {
    let tag = *bytes.first().ok_or(DerError::Truncated { offset: 0 })?;
    if tag != expected {
        return Err(DerError::UnexpectedTag {
            expected,
            found: tag,
        });
    }
    let (len, prefix) = decode_length(&bytes[1..])?;
    let start = 1 + prefix;
    let end = start + len;
    if bytes.len() < end {
        return Err(DerError::Truncated {
            offset: bytes.len(),
        });
    }
    Ok((&bytes[start..end], &bytes[end..]))
}
