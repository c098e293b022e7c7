//! ifident: local network interface identity lookup.
//!
//! Entry point for the ifident command-line tool.

use std::process::ExitCode;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use ifident::resolve::{ResolvedInterface, resolve};

/// Resolve a local network interface's identity.
///
/// Takes an OS interface name ("eth0") or a bound IP address
/// ("192.168.1.10") and prints the interface's IP, MAC, OS name,
/// and packet-capture device name.
#[derive(Debug, Parser)]
#[command(name = "ifident")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Interface name or bound IP address
    identifier: String,

    /// Print the record as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(long, short)]
    verbose: bool,
}

/// Exit code for resolution failures, distinct from clap's usage errors (2
/// is taken by clap, so resolution failures use 1).
const RESOLVE_FAILURE: u8 = 1;

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    match resolve(&cli.identifier) {
        Ok(record) => print_record(&record, cli.json),
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(RESOLVE_FAILURE)
        }
    }
}

/// Prints the resolved record as text or JSON.
fn print_record(record: &ResolvedInterface, json: bool) -> ExitCode {
    if json {
        match serde_json::to_string_pretty(record) {
            Ok(body) => println!("{body}"),
            Err(e) => {
                eprintln!("Error: {e}");
                return ExitCode::from(RESOLVE_FAILURE);
            }
        }
    } else {
        println!("{record}");
    }
    ExitCode::SUCCESS
}

/// Sets up the tracing subscriber for logging.
fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
