//! Verify command implementation.

use crate::output;
use crate::response;
use hyperbeam_httpsig::inspect_message;

pub fn run(
    path: String,
    method: String,
    url: String,
    json_output: bool,
    strict: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let raw = std::fs::read_to_string(&path)
        .map_err(|e| format!("Failed to read file {}: {}", path, e))?;
    let message = response::parse_response(&raw, &method, &url)?;

    let result = inspect_message(&message);
    tracing::debug!(?result, "inspected response");

    if json_output {
        println!("{}", output::format_json(&result));
    } else {
        output::print_table_header();
        println!("{}", output::format_table_row(&result));
    }

    if strict && result.signature_valid != Some(true) {
        return Err(format!("Signature not valid: {}", output::verdict(&result)).into());
    }

    Ok(())
}
