//! Sigil CLI - hash, generate keys, sign and verify from the shell
//!
//! Usage:
//!   sigil hash "some text"
//!   sigil keygen
//!   sigil sign --pubkey <HEX> --secret <HEX> "message"
//!   sigil verify --pubkey <HEX> --sig <SIG> "message"

use anyhow::Result;
use clap::{Parser, Subcommand};
use sigil_core::crypto::Backend;
use sigil_core::CryptoConfig;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

mod commands;
mod ui;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Crypto backend (der, raw). Defaults to $SIGIL_BACKEND, then der
    #[arg(short, long, global = true)]
    backend: Option<Backend>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the SHA-256 of a text or file
    Hash {
        /// Text to hash (UTF-8)
        #[arg(required_unless_present = "file", conflicts_with = "file")]
        text: Option<String>,

        /// Hash the contents of a file instead
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Generate a keypair and print it as JSON
    Keygen,

    /// Sign a message
    Sign {
        /// Public key (64 hex chars)
        #[arg(long)]
        pubkey: String,

        /// Secret key (64 hex chars)
        #[arg(long)]
        secret: String,

        /// Message to sign (UTF-8)
        message: String,
    },

    /// Verify a signature; exits 0 if valid, 1 otherwise
    Verify {
        /// Public key (64 hex chars)
        #[arg(long)]
        pubkey: String,

        /// Encoded signature
        #[arg(long)]
        sig: String,

        /// Signed message (UTF-8)
        message: String,
    },
}

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let args = Args::parse();

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            ui::print_error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    let config = match args.backend {
        Some(backend) => CryptoConfig { backend },
        None => CryptoConfig::from_env()?,
    };
    debug!("{} using {} backend", sigil_core::version_string(), config.backend);

    let crypto = config.crypto();

    match args.command {
        Command::Hash { text, file } => commands::hash(crypto, text, file),
        Command::Keygen => commands::keygen(crypto),
        Command::Sign {
            pubkey,
            secret,
            message,
        } => commands::sign(crypto, &pubkey, &secret, &message),
        Command::Verify {
            pubkey,
            sig,
            message,
        } => commands::verify(crypto, &pubkey, &sig, &message),
    }
}
