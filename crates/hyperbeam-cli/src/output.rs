//! Output formatting utilities.

use hyperbeam_httpsig::VerificationResult;

/// Formats a result as pretty JSON.
pub fn format_json(result: &VerificationResult) -> String {
    serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
}

/// One-word verdict for a result.
pub fn verdict(result: &VerificationResult) -> &'static str {
    match (result.signature_valid, &result.algorithm) {
        (Some(true), _) => "valid",
        (Some(false), _) => "invalid",
        (None, Some(_)) => "unverifiable",
        (None, None) => "unsigned",
    }
}

/// Formats a result as a simple table row.
pub fn format_table_row(result: &VerificationResult) -> String {
    format!(
        "{:<13} {:<16} {:<44} {}",
        verdict(result),
        result.algorithm.as_deref().unwrap_or("-"),
        result.signer.as_deref().unwrap_or("-"),
        truncate(result.key_id.as_deref().unwrap_or("-"), 40)
    )
}

/// Prints table header.
#[allow(clippy::print_literal)]
pub fn print_table_header() {
    println!(
        "{:<13} {:<16} {:<44} {}",
        "SIGNATURE", "ALGORITHM", "SIGNER", "KEYID"
    );
    println!("{}", "-".repeat(100));
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
