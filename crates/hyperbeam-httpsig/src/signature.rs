use hyperbeam_keys::base64url_to_bytes;

use crate::errors::SignatureHeaderError;
use crate::input::split_top_level;

/// One `label=:base64:` member of a `Signature` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureValue {
    /// Label linking this value to its `Signature-Input` entry.
    pub label: String,
    /// Decoded signature bytes.
    pub bytes: Vec<u8>,
}

/// Parses a `Signature` header into its members.
///
/// Both base64 alphabets are accepted, padded or not.
pub fn parse_signature_header(header: &str) -> Result<Vec<SignatureValue>, SignatureHeaderError> {
    split_top_level(header, ',')
        .into_iter()
        .map(str::trim)
        .filter(|member| !member.is_empty())
        .map(parse_member)
        .collect()
}

fn parse_member(member: &str) -> Result<SignatureValue, SignatureHeaderError> {
    let (label, value) = member
        .split_once('=')
        .ok_or_else(|| SignatureHeaderError::MalformedMember(member.to_string()))?;
    let label = label.trim().to_string();

    let encoded = value
        .trim()
        .strip_prefix(':')
        .and_then(|rest| rest.split_once(':'))
        .map(|(encoded, _params)| encoded)
        .ok_or_else(|| SignatureHeaderError::NotByteSequence {
            label: label.clone(),
        })?;

    let bytes = base64url_to_bytes(encoded).map_err(|source| {
        SignatureHeaderError::InvalidBase64 {
            label: label.clone(),
            source,
        }
    })?;

    Ok(SignatureValue { label, bytes })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_multiple_members() {
        let values = parse_signature_header("sig1=:dGVzdA==:, sig2=:AQID:").unwrap();
        assert_eq!(values.len(), 2);
        assert_eq!(values[0].label, "sig1");
        assert_eq!(values[0].bytes, b"test");
        assert_eq!(values[1].bytes, vec![1, 2, 3]);
    }

    #[test]
    fn accepts_url_safe_alphabet() {
        let values = parse_signature_header("s=:-_-_:").unwrap();
        assert_eq!(values[0].bytes, vec![0xfb, 0xff, 0xbf]);
    }

    #[test]
    fn rejects_values_without_colons() {
        let err = parse_signature_header("sig1=dGVzdA==").unwrap_err();
        assert!(matches!(err, SignatureHeaderError::NotByteSequence { .. }));
    }

    #[test]
    fn rejects_members_without_label() {
        let err = parse_signature_header("dGVzdA").unwrap_err();
        assert!(matches!(err, SignatureHeaderError::MalformedMember(_)));
    }

    #[test]
    fn rejects_invalid_base64() {
        let err = parse_signature_header("sig1=:@@@@:").unwrap_err();
        assert!(matches!(err, SignatureHeaderError::InvalidBase64 { .. }));
    }
}
