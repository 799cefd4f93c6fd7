//! Address command implementation.

use hyperbeam_httpsig::derive_signer_address;

pub fn run(signature_input: String) -> Result<(), Box<dyn std::error::Error>> {
    let address = derive_signer_address(&signature_input)
        .map_err(|e| format!("Address derivation failed: {}", e))?;
    println!("{}", address);
    Ok(())
}
