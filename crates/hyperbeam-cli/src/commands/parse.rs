//! Parse command implementation.

use hyperbeam_httpsig::parse_signature_input;

pub fn run(header: String) -> Result<(), Box<dyn std::error::Error>> {
    let entries = parse_signature_input(&header);
    if entries.is_empty() {
        return Err("No signature-input entries found".into());
    }

    println!("{}", serde_json::to_string_pretty(&entries)?);
    Ok(())
}
