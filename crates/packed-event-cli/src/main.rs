//! Packed event CLI - pack Nostr events and inspect packed event buffers.

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod input;
mod output;

use commands::{inspect, pack, tag_match};

#[derive(Parser)]
#[command(name = "packed-event")]
#[command(about = "Pack Nostr events and inspect packed event buffers")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pack a Nostr event JSON into its binary form
    Pack {
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
        /// Write raw packed bytes to FILE instead of printing hex
        #[arg(long)]
        output: Option<String>,
    },
    /// Show the fields and tags of a packed event
    Inspect {
        /// Path to packed event file
        input: String,
        /// Input file holds hex text instead of raw bytes
        #[arg(long)]
        hex: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Treat a truncated tag region as its end instead of failing
        #[arg(long)]
        permissive: bool,
    },
    /// Check whether a packed event carries a tag value (exit code 2 if not)
    Match {
        /// Path to packed event file
        input: String,
        /// Tag name; only the first character is significant
        #[arg(long)]
        tag: String,
        /// Tag value (hex event id / pubkey for e and p tags)
        #[arg(long)]
        value: String,
        /// Compare VALUE as raw bytes without hex-decoding e/p values
        #[arg(long)]
        raw_value: bool,
        /// Input file holds hex text instead of raw bytes
        #[arg(long)]
        hex: bool,
        /// Treat a truncated tag region as its end instead of failing
        #[arg(long)]
        permissive: bool,
    },
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Pack { input, output } => pack::run(input, output),
        Commands::Inspect {
            input,
            hex,
            json,
            permissive,
        } => inspect::run(input, hex, json, permissive),
        Commands::Match {
            input,
            tag,
            value,
            raw_value,
            hex,
            permissive,
        } => tag_match::run(input, tag, value, raw_value, hex, permissive),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
