//! Parser for the `Signature-Input` header.
//!
//! Input looks like
//! `sig1=("@method" "@path" "date");alg="rsa-pss-sha512";keyid="publickey:..."`,
//! possibly with several comma-separated members. Parsing never fails:
//! missing structure degrades to empty values so that one malformed member
//! does not hide its neighbours.

use serde::{Deserialize, Serialize};

/// Algorithm whose entries are skipped when choosing what to verify.
const HMAC_SHA256: &str = "hmac-sha256";

/// One signature descriptor from a `Signature-Input` header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureInputEntry {
    /// Signature label (text before the first `=`).
    pub label: String,
    /// Covered fields, as written.
    pub fields: Vec<String>,
    /// `alg` parameter, empty when absent.
    pub algorithm: String,
    /// `keyid` parameter, empty when absent.
    pub key_id: String,
    /// `tag` parameter, only when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// Every parameter in header order, values unquoted.
    pub params: Vec<(String, String)>,
    /// Serialized inner list and parameters, verbatim from the header.
    pub signature_params: String,
}

impl SignatureInputEntry {
    /// Returns `true` when `field` is covered, ignoring ASCII case.
    pub fn covers(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f.eq_ignore_ascii_case(field))
    }

    /// Looks up a parameter by name, ignoring ASCII case.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Returns `true` for the HMAC entries a client cannot verify.
    pub fn is_hmac(&self) -> bool {
        self.algorithm.eq_ignore_ascii_case(HMAC_SHA256)
    }
}

/// Parses a `Signature-Input` header value into its entries, in order.
pub fn parse_signature_input(header: &str) -> Vec<SignatureInputEntry> {
    split_top_level(header, ',')
        .into_iter()
        .map(str::trim)
        .filter(|member| !member.is_empty())
        .map(parse_entry)
        .collect()
}

/// Picks the entry to verify: the first non-HMAC entry, else the first entry.
pub fn select_candidate(entries: &[SignatureInputEntry]) -> Option<&SignatureInputEntry> {
    entries
        .iter()
        .find(|entry| !entry.is_hmac())
        .or_else(|| entries.first())
}

fn parse_entry(member: &str) -> SignatureInputEntry {
    let (label, rest) = match member.split_once('=') {
        Some((label, rest)) => (label.trim(), rest.trim()),
        None => (member, ""),
    };

    let mut fields = Vec::new();
    let mut params_text = rest;
    if let Some(inner) = rest.strip_prefix('(') {
        match find_unquoted(inner, ')') {
            Some(close) => {
                fields = quoted_strings(&inner[..close]);
                params_text = &inner[close + 1..];
            }
            // Unterminated list: nothing reliable to read
            None => params_text = "",
        }
    }

    let params: Vec<(String, String)> = split_top_level(params_text, ';')
        .into_iter()
        .filter_map(|segment| segment.split_once('='))
        .map(|(key, value)| (key.trim().to_string(), unquote(value.trim()).to_string()))
        .filter(|(key, _)| !key.is_empty())
        .collect();

    let lookup = |name: &str| {
        params
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.clone())
    };

    SignatureInputEntry {
        label: label.to_string(),
        fields,
        algorithm: lookup("alg").unwrap_or_default(),
        key_id: lookup("keyid").unwrap_or_default(),
        tag: lookup("tag"),
        params,
        signature_params: rest.to_string(),
    }
}

/// Splits on `separator` outside double quotes and parentheses.
pub(crate) fn split_top_level(input: &str, separator: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut in_quotes = false;
    let mut depth = 0usize;
    let mut start = 0;

    for (idx, c) in input.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            '(' if !in_quotes => depth += 1,
            ')' if !in_quotes => depth = depth.saturating_sub(1),
            c if c == separator && !in_quotes && depth == 0 => {
                parts.push(&input[start..idx]);
                start = idx + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(&input[start..]);
    parts
}

fn find_unquoted(input: &str, target: char) -> Option<usize> {
    let mut in_quotes = false;
    for (idx, c) in input.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            c if c == target && !in_quotes => return Some(idx),
            _ => {}
        }
    }
    None
}

fn quoted_strings(list: &str) -> Vec<String> {
    list.split('"')
        .skip(1)
        .step_by(2)
        .map(str::to_string)
        .collect()
}

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}
