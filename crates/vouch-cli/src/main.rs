mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "vouch", version, about = "Signed token toolkit")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Key management (generate/init)
    Keys {
        #[command(subcommand)]
        cmd: KeysCommand,
    },

    /// Token operations (sign/verify/inspect)
    Token {
        #[command(subcommand)]
        cmd: TokenCommand,
    },
}

#[derive(Subcommand, Debug)]
enum KeysCommand {
    /// Generate a new Ed25519 keypair
    Generate {
        /// Directory to write private.key / public.key into
        #[arg(long = "out-dir")]
        out_dir: Option<PathBuf>,
    },

    /// Load the keypair from a directory, generating it on first run
    Init {
        /// Directory holding private.key / public.key
        #[arg(long)]
        dir: PathBuf,
    },
}

#[derive(Subcommand, Debug)]
enum TokenCommand {
    /// Sign a claims payload into a token
    Sign {
        /// Private key: hex string or path to a key file
        #[arg(long, env = "VOUCH_PRIVATE_KEY")]
        key: Option<String>,

        /// Payload JSON, e.g. '{"sub":"alice"}'
        #[arg(long)]
        claims: String,

        /// Key identifier to put in the header
        #[arg(long)]
        kid: Option<String>,

        /// HTTPS URL the verifier can fetch the key from (requires --kid)
        #[arg(long)]
        jku: Option<String>,

        /// Expiry relative to now, e.g. "30s", "45m", "24h", "7d"
        #[arg(long = "expires-in")]
        expires_in: Option<String>,

        /// Write the token here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Verify a token
    Verify {
        /// Public key: hex string or path to a key file
        #[arg(long, env = "VOUCH_PUBLIC_KEY")]
        key: Option<String>,

        /// Reject claims payloads that carry no exp claim
        #[arg(long, default_value_t = false)]
        require_expiration: bool,

        /// Token text or path to a token file
        token: String,
    },

    /// Decode a token without verifying it
    Inspect {
        /// Token text or path to a token file
        token: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Keys { cmd } => match cmd {
            KeysCommand::Generate { out_dir } => commands::keys::generate(out_dir),
            KeysCommand::Init { dir } => commands::keys::init(dir),
        },
        Command::Token { cmd } => match cmd {
            TokenCommand::Sign {
                key,
                claims,
                kid,
                jku,
                expires_in,
                output,
            } => commands::token::sign(key, claims, kid, jku, expires_in, output),
            TokenCommand::Verify {
                key,
                require_expiration,
                token,
            } => commands::token::verify(key, require_expiration, token),
            TokenCommand::Inspect { token } => commands::token::inspect(token),
        },
    }
}
