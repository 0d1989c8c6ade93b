//! Shelf CLI - search the Open Library catalog from the terminal

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use shelf_core::{Catalog, CatalogConfig, CatalogMode};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "shelf")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use bundled sample data instead of the live catalog
    #[arg(long, global = true)]
    mock: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for books by title
    Search {
        /// Search string
        query: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show details for a book
    Show {
        /// Catalog key (e.g. /works/OL262758W)
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "shelf_cli=debug,shelf_core=debug"
    } else {
        "shelf_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = CatalogConfig::from_env().context("Invalid catalog configuration")?;
    if cli.mock {
        config.mode = CatalogMode::Mock;
    }
    let catalog = Catalog::from_config(&config).context("Failed to build catalog client")?;

    match cli.command {
        Commands::Search { query, json } => commands::search(&catalog, &query, json).await,

        Commands::Show { id, json } => commands::show(&catalog, &id, json).await,
    }
}
