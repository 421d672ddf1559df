//! Adorly Market CLI - Database migrations and seeding.
//!
//! # Usage
//!
//! ```bash
//! # Run database migrations
//! adorly-cli migrate
//!
//! # Seed the catalog with the fallback product list
//! adorly-cli seed
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run database migrations against `MARKET_DATABASE_URL`
//! - `seed` - Insert the fallback catalog (idempotent: skips when the
//!   products table is non-empty, unless `--force` is given)

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "adorly-cli")]
#[command(author, version, about = "Adorly Market CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Seed the catalog with the fallback product list
    Seed {
        /// Insert even when the products table already has rows
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Seed { force } => commands::seed::run(force).await?,
    }
    Ok(())
}
