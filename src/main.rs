//! Hex Digest CLI
//!
//! Inspection tool for the Hex proof-of-work digest.
//!
//! # Commands
//!
//! - `algorithms` - List the selector → algorithm table
//! - `select` - Show which algorithm the first round of a header runs

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use hexhash::algorithm::{Registry, ROUNDS, SELECTOR_OFFSET};
use hexhash::input::parse_hex;
use hexhash::{first_algorithm, Algorithm};

#[derive(Parser)]
#[command(name = "hexhash")]
#[command(author = "Cyberia")]
#[command(version)]
#[command(about = "Hex proof-of-work digest inspection tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// List the sixteen algorithms in selector order
    Algorithms,

    /// Show the first-round algorithm of a header
    Select {
        /// Header bytes as hex (0x prefix and whitespace allowed)
        #[arg(long)]
        input: String,
    },

}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Algorithms => cmd_algorithms(),
        Commands::Select { input } => cmd_select(&input),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_algorithms() -> anyhow::Result<()> {
    let builtins = Registry::builder().with_builtins();

    println!("Selector  Algorithm  Implementation");
    for algorithm in Algorithm::ALL {
        let source = if builtins.is_registered(algorithm) {
            "built-in"
        } else {
            "external"
        };
        println!(
            "{:>8}  {:<9}  {}",
            algorithm.selector(),
            algorithm.name(),
            source
        );
    }

    println!("\nRounds per digest: {}", ROUNDS);
    println!(
        "First selector: high nibble of input byte {}",
        SELECTOR_OFFSET
    );

    Ok(())
}

fn cmd_select(input_hex: &str) -> anyhow::Result<()> {
    let input = parse_hex(input_hex).context("parsing --input")?;
    debug!(len = input.len(), "parsed header");

    let algorithm = first_algorithm(&input)?;
    info!(%algorithm, "first round selected");

    println!("Input: {} bytes", input.len());
    println!(
        "Selector byte (offset {}): 0x{:02x}",
        SELECTOR_OFFSET, input[SELECTOR_OFFSET]
    );
    println!(
        "First algorithm: {} (selector {})",
        algorithm,
        algorithm.selector()
    );

    Ok(())
}
