//! CLI entry point for postgen

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "postgen")]
#[command(version)]
#[command(about = "Turn markdown posts into blog pages and a home page listing", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    /// Defaults to `generate`
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render every post and update the home page listing
    #[command(alias = "g")]
    Generate,

    /// Create a new post
    New {
        /// Title of the new post
        title: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "postgen=debug,info"
    } else {
        "postgen=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("reading current directory")?,
    };

    let blog = postgen::Blog::new(&base_dir)?;

    match cli.command.unwrap_or(Commands::Generate) {
        Commands::Generate => {
            tracing::info!("Generating blog in {:?}", base_dir);
            blog.generate()?;
        }

        Commands::New { title } => {
            tracing::info!("Creating new post with title: {}", title);
            blog.new_post(&title)?;
        }
    }

    Ok(())
}
