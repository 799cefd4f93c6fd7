//! Resolve command implementation.

use hyperbeam_keys::{resolve_verification_key, KeyResolution};

pub fn run(alg: String, key_id: String) -> Result<(), Box<dyn std::error::Error>> {
    match resolve_verification_key(&alg, &key_id)? {
        KeyResolution::Unverifiable { algorithm } => {
            println!("unverifiable ({})", algorithm);
        }
        KeyResolution::Resolved(key) => {
            let mut line = key.algorithm().family().to_string();
            if let Some(import) = key.rsa_import() {
                line.push_str(&format!(" via {}", import));
            }
            println!("{}", line);
        }
    }
    Ok(())
}
