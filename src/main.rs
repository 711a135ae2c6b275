use anyhow::Result;
use clap::{Parser, Subcommand};

use sealbox::cli::{handle_file_command, handle_open_command, handle_seal_command, FileCommands};
use sealbox::crypto::DEFAULT_KDF_ITERATIONS;

#[derive(Parser)]
#[command(
    name = "sealbox",
    version,
    about = "Password-based authenticated encryption for text values",
    long_about = "sealbox seals text values into portable AES-256-GCM envelopes \
                  keyed from a password, one value at a time or in bulk from \
                  line-delimited or CSV input. Every envelope carries its own \
                  salt and nonce, so any later invocation that knows the \
                  password can open it."
)]
struct Cli {
    /// Password (prompted interactively when omitted)
    #[arg(
        short,
        long,
        global = true,
        env = "SEALBOX_PASSWORD",
        hide_env_values = true
    )]
    password: Option<String>,

    /// PBKDF2 iteration count; must match between sealing and opening
    #[arg(long, global = true, default_value_t = DEFAULT_KDF_ITERATIONS)]
    kdf_iterations: u32,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seal a single value
    Seal {
        /// Value to seal (prompted when omitted)
        value: Option<String>,
    },

    /// Open a single sealed value
    Open {
        /// Sealed value to open (prompted when omitted)
        value: Option<String>,
    },

    /// Process every value in a file
    #[command(subcommand)]
    File(FileCommands),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Seal { value } => handle_seal_command(value, cli.password, cli.kdf_iterations)?,
        Commands::Open { value } => handle_open_command(value, cli.password, cli.kdf_iterations)?,
        Commands::File(cmd) => handle_file_command(cmd, cli.password, cli.kdf_iterations)?,
    }

    Ok(())
}
