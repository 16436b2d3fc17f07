//! Maplab CLI entry point.
//!
//! Binary name: `maplab`
//!
//! Parses CLI arguments, initializes tracing, creates the session, then
//! dispatches to the appropriate command handler. With no subcommand it
//! opens the interactive menu.

mod cli;

use clap::Parser;
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use maplab_core::session::Session;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,maplab_core=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    // Shell completions don't need a session
    if let Some(Commands::Completions { shell }) = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "maplab", &mut std::io::stdout());
        return Ok(());
    }

    // The one session for this process, handed by reference to handlers.
    let mut session = Session::new();

    match cli.command {
        None | Some(Commands::Menu) => {
            cli::menu::run_menu(&mut session)?;
        }

        Some(Commands::Build { variant }) => {
            cli::build::build_once(&variant, cli.json)?;
        }

        Some(Commands::Demo) => {
            cli::demo::run_demo(&mut session)?;
        }

        Some(Commands::Completions { .. }) => unreachable!("handled above"),
    }

    Ok(())
}
