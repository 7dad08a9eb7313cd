//! Shuban CLI - batch converter from plain text to vertical traditional-Chinese EPUB

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use shuban_core::{Profile, Settings, TraversalOrder, WriteMode};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Parse a conversion profile name (s2t, s2tw, s2hk)
fn parse_profile(s: &str) -> Result<Profile, String> {
    s.parse().map_err(|e: shuban_core::ConfigError| e.to_string())
}

/// Parse a traversal order (lexicographic, filesystem)
fn parse_order(s: &str) -> Result<TraversalOrder, String> {
    s.parse().map_err(|e: shuban_core::ConfigError| e.to_string())
}

#[derive(Parser)]
#[command(name = "shuban")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Settings file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Overrides shared by the converting commands
#[derive(clap::Args)]
struct ConversionArgs {
    /// Conversion profile (s2t, s2tw, s2hk)
    #[arg(short, long, value_parser = parse_profile)]
    profile: Option<Profile>,

    /// Write through a temporary file and rename it over the output
    #[arg(long)]
    atomic: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Batch convert every text file under a directory tree
    Batch {
        /// Root directory to walk
        root: PathBuf,

        #[command(flatten)]
        conversion: ConversionArgs,

        /// Processing order (lexicographic, filesystem)
        #[arg(long, value_parser = parse_order)]
        order: Option<TraversalOrder>,

        /// Log failures and continue with the next file
        #[arg(long)]
        keep_going: bool,
    },

    /// Convert a single text file
    Convert {
        /// Input text file
        input: PathBuf,

        /// Output file path (defaults to a sibling .epub)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        conversion: ConversionArgs,
    },

    /// Display information about a converted package
    Info {
        /// EPUB file path
        input: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn load_settings(path: Option<&Path>) -> Result<Settings> {
    match path {
        Some(path) => Settings::load(path)
            .with_context(|| format!("Failed to load settings from {}", path.display())),
        None => Ok(Settings::default()),
    }
}

fn apply_conversion_args(settings: &mut Settings, args: &ConversionArgs) {
    if let Some(profile) = args.profile {
        settings.profile = profile;
    }
    if args.atomic {
        settings.write_mode = WriteMode::Atomic;
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "shuban_cli=debug,shuban_core=debug"
    } else {
        "shuban_cli=info,shuban_core=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut settings = load_settings(cli.config.as_deref())?;

    match cli.command {
        Commands::Batch {
            root,
            conversion,
            order,
            keep_going,
        } => {
            apply_conversion_args(&mut settings, &conversion);
            if let Some(order) = order {
                settings.order = order;
            }
            if keep_going {
                settings.keep_going = true;
            }
            commands::batch(&root, &settings)
        }

        Commands::Convert {
            input,
            output,
            conversion,
        } => {
            apply_conversion_args(&mut settings, &conversion);
            commands::convert(&input, output.as_deref(), &settings)
        }

        Commands::Info { input, json } => commands::info(&input, json),
    }
}
