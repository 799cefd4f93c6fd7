//! hbsig - inspect and verify HTTP message signatures on HyperBEAM responses.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod output;
mod response;

use commands::{address, message_id, parse, resolve, verify};

#[derive(Parser)]
#[command(name = "hbsig")]
#[command(about = "HyperBEAM HTTP message signature tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a Signature-Input header value
    Parse {
        /// Signature-Input header value
        header: String,
    },
    /// Verify the signature on a raw HTTP response
    Verify {
        /// File holding the status line, headers and optional body
        response: String,
        /// Method of the request that produced the response
        #[arg(long, default_value = "GET")]
        method: String,
        /// URL of the request that produced the response
        #[arg(long, default_value = "/")]
        url: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Exit with error code unless the signature is valid
        #[arg(long)]
        strict: bool,
    },
    /// Derive the signer address from a Signature-Input header value
    Address {
        /// Signature-Input header value
        signature_input: String,
    },
    /// Derive a message id from a full signature value
    MessageId {
        /// Full signature value (`http-sig-<base64url>:...`)
        signature: String,
        /// Scheme token preceding the signature bytes
        #[arg(long, default_value = hyperbeam_httpsig::MESSAGE_ID_SCHEME)]
        scheme: String,
    },
    /// Show how a keyid resolves for an algorithm
    Resolve {
        /// Algorithm name as it appears on the wire
        #[arg(long)]
        alg: String,
        /// Key identifier
        key_id: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse { header } => parse::run(header),
        Commands::Verify {
            response,
            method,
            url,
            json,
            strict,
        } => verify::run(response, method, url, json, strict),
        Commands::Address { signature_input } => address::run(signature_input),
        Commands::MessageId { signature, scheme } => message_id::run(signature, scheme),
        Commands::Resolve { alg, key_id } => resolve::run(alg, key_id),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
