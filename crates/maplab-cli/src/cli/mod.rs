//! CLI command definitions and handlers for the `maplab` binary.
//!
//! Uses clap derive macros for argument parsing. Running `maplab` with
//! no subcommand opens the interactive menu; one-shot subcommands exist
//! so the pipeline is usable without a TTY.

pub mod build;
pub mod demo;
pub mod menu;
pub mod render;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Build themed maps step by step and clone them.
#[derive(Parser)]
#[command(name = "maplab", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive menu (default when no subcommand is given).
    Menu,

    /// Construct one map and print it.
    Build {
        /// Builder variant: forest or dungeon.
        variant: String,
    },

    /// Run a scripted walkthrough of the build / clone / modify lifecycle.
    Demo,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
