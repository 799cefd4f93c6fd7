//! Message id command implementation.

use hyperbeam_httpsig::derive_message_id_with_scheme;

pub fn run(signature: String, scheme: String) -> Result<(), Box<dyn std::error::Error>> {
    let id = derive_message_id_with_scheme(&signature, &scheme)
        .map_err(|e| format!("Message id derivation failed: {}", e))?;
    println!("{}", id);
    Ok(())
}
