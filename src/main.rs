//! elemcraft - a deterministic combine-the-elements discovery game
//!
//! Command-line front end over a persisted player session.

mod commands;
mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use config::{GameConfig, DEFAULT_CONFIG_PATH};
use elemcraft_core::Universe;
use elemcraft_game::{DirStore, Session};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Combine elements, discover the universe", long_about = None)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Override the save directory
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Override the universe seed
    #[arg(long)]
    seed: Option<u32>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Universe summary, digest and progress
    Info,
    /// List held elements
    Inventory {
        /// Case-insensitive name filter
        filter: Option<String>,
    },
    /// Combine two elements
    Craft { a: String, b: String },
    /// Show shop listings
    Shop,
    /// Buy a listed element
    Buy { name: String },
    /// Browse every element
    Gallery {
        /// Case-insensitive name filter
        filter: Option<String>,
    },
    /// Reset progress to the four base elements
    Reset {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },
    /// Print the resolved configuration
    Config {
        /// Also write it to the configuration path
        #[arg(long)]
        write: bool,
    },
}

fn main() -> Result<()> {
    // WARN by default, overridable through RUST_LOG
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = GameConfig::load_from_path(&cli.config);
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }

    if let Command::Config { write } = cli.command {
        return commands::show_config(&config, write.then_some(cli.config.as_path()));
    }

    info!("Starting elemcraft v{}", env!("CARGO_PKG_VERSION"));
    let universe = Arc::new(Universe::generate(&config.universe()));
    let store = DirStore::open(&config.data_dir)
        .with_context(|| format!("failed to open save directory {}", config.data_dir.display()))?;
    let mut session = Session::open(universe, store).with_shop_size(config.shop_size);

    match cli.command {
        Command::Info => commands::info(&session),
        Command::Inventory { filter } => {
            commands::inventory(&session, filter.as_deref().unwrap_or(""));
            Ok(())
        }
        Command::Craft { a, b } => {
            commands::craft(&mut session, &a, &b);
            Ok(())
        }
        Command::Shop => {
            commands::shop(&session);
            Ok(())
        }
        Command::Buy { name } => {
            commands::buy(&mut session, &name);
            Ok(())
        }
        Command::Gallery { filter } => {
            commands::gallery(&session, filter.as_deref().unwrap_or(""));
            Ok(())
        }
        Command::Reset { yes } => {
            commands::reset(&mut session, yes);
            Ok(())
        }
        Command::Config { .. } => Ok(()),
    }
}
