//! Signature base construction (RFC 9421, section 2.5).
//!
//! The base is one `"<component>": <value>` line per covered field followed
//! by the `@signature-params` line, which repeats the entry's parameters
//! exactly as the signer serialized them.

use std::fmt::Write as _;

use crate::errors::SignatureBaseError;
use crate::input::SignatureInputEntry;
use crate::message::HttpMessage;

/// Builds the signature base `entry` was computed over.
pub fn build_signature_base(
    message: &HttpMessage,
    entry: &SignatureInputEntry,
) -> Result<String, SignatureBaseError> {
    let mut base = String::new();
    for field in &entry.fields {
        let value = component_value(message, field)?;
        // Writing to a String cannot fail
        let _ = writeln!(base, "\"{field}\": {value}");
    }
    let _ = write!(base, "\"@signature-params\": {}", entry.signature_params);
    Ok(base)
}

fn component_value(message: &HttpMessage, field: &str) -> Result<String, SignatureBaseError> {
    let name = field.to_ascii_lowercase();
    if let Some(derived) = name.strip_prefix('@') {
        return derived_component(message, derived, field);
    }

    let values = message.headers().get_all(name.as_str());
    let mut parts = Vec::new();
    for value in values.iter() {
        let text = value
            .to_str()
            .map_err(|_| SignatureBaseError::InvalidHeaderValue(field.to_string()))?;
        parts.push(text.trim());
    }
    if parts.is_empty() {
        return Err(SignatureBaseError::MissingComponent(field.to_string()));
    }
    Ok(parts.join(", "))
}

fn derived_component(
    message: &HttpMessage,
    derived: &str,
    field: &str,
) -> Result<String, SignatureBaseError> {
    let missing = || SignatureBaseError::MissingComponent(field.to_string());
    let uri = message.uri();

    match derived {
        "method" => Ok(message.method().as_str().to_string()),
        "target-uri" => Ok(uri.to_string()),
        "authority" => uri
            .authority()
            .map(|authority| authority.as_str().to_ascii_lowercase())
            .or_else(|| message.header_text("host").map(|h| h.to_ascii_lowercase()))
            .ok_or_else(missing),
        "scheme" => uri
            .scheme_str()
            .map(str::to_ascii_lowercase)
            .ok_or_else(missing),
        "request-target" => Ok(uri
            .path_and_query()
            .map(|pq| pq.as_str().to_string())
            .unwrap_or_else(|| "/".to_string())),
        "path" => Ok(match uri.path() {
            "" => "/".to_string(),
            path => path.to_string(),
        }),
        "query" => Ok(format!("?{}", uri.query().unwrap_or_default())),
        "status" => message
            .status()
            .map(|status| status.as_str().to_string())
            .ok_or_else(missing),
        _ => Err(SignatureBaseError::UnsupportedComponent(field.to_string())),
    }
}
