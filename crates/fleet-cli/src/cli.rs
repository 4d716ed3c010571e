//! CLI definition using clap

use clap::{Parser, Subcommand};
use fleet_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fleet-manager")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Manage the car fleet of a rental company")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Fleet CSV file to use instead of the configured one
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Log errors only
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the fleet sorted by brand
    List {
        /// Show only cars that can be rented
        #[arg(long)]
        available: bool,
    },

    /// Show a single vehicle by code
    Show {
        /// Vehicle code (e.g. "A1")
        code: String,
    },

    /// Add a new vehicle and save the fleet
    Add {
        /// Brand (e.g. "Fiat")
        brand: String,

        /// Model (e.g. "Panda")
        model: String,

        /// Year of manufacture
        year: String,

        /// Number of seats
        #[arg(long, short = 's', default_value = "0")]
        seats: u32,
    },

    /// Show or change the fleet manager
    Manager {
        /// New manager name
        #[arg(long)]
        set: Option<String>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set company name
        #[arg(long)]
        set_company: Option<String>,

        /// Set fleet CSV file
        #[arg(long)]
        set_file: Option<PathBuf>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Start the GUI in dark mode
        #[arg(long)]
        set_dark_theme: Option<bool>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
