//! switch-shelf CLI
//!
//! Command-line interface for inventorying a Switch game library and
//! checking it against the online patch table.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "switch-shelf")]
#[command(about = "Inventory Switch game folders, updates, and DLC", long_about = None)]
struct Cli {
    /// Games root containing one folder per game (defaults to the saved
    /// settings entry, then the current directory)
    #[arg(short, long, global = true)]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan the games root and list each game with its updates and DLC
    Scan {
        /// Write the inventory to a semicolon-delimited CSV file
        #[arg(short, long)]
        export: Option<PathBuf>,

        /// Short-name policy of older releases: the last qualifying file
        /// wins instead of the first
        #[arg(long)]
        legacy_short_name: bool,
    },

    /// Compare the local inventory against the online patch table
    Reconcile {
        /// Patch-table URL (defaults to the saved settings entry, then the
        /// built-in endpoint)
        #[arg(long)]
        url: Option<String>,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let cli = Cli::parse();
    let root = switch_shelf_lib::settings::resolve_games_root(cli.root);

    match cli.command {
        Commands::Scan {
            export,
            legacy_short_name,
        } => {
            commands::scan::run_scan(&root, export, legacy_short_name);
        }
        Commands::Reconcile { url } => {
            commands::reconcile::run_reconcile(&root, url);
        }
    }
}
