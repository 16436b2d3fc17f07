//! Interactive menu loop.
//!
//! Redraws a small dashboard (current original plus the tail of the
//! clone history), then waits on an arrow-key menu. Every action runs
//! against the one `Session` passed in from `main`; a `NoOriginal`
//! failure prints a styled message and the loop carries on with the
//! session untouched.

use std::thread;
use std::time::Duration;

use anyhow::Result;
use console::{style, Term};
use dialoguer::Select;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use maplab_core::builder::variant::BuilderVariant;
use maplab_core::session::Session;

use super::render;

/// Number of history entries shown on the dashboard.
const HISTORY_WINDOW: usize = 3;

const MENU_ITEMS: [&str; 5] = [
    "Build: Forest map",
    "Build: Dungeon map",
    "Clone: make a copy of the current map",
    "Modify: change the original in place",
    "Quit",
];

/// Run the interactive loop until the user quits.
pub fn run_menu(session: &mut Session) -> Result<()> {
    let term = Term::stdout();

    loop {
        term.clear_screen()?;
        draw_dashboard(session);

        let choice = Select::new()
            .with_prompt("Select")
            .items(&MENU_ITEMS)
            .default(0)
            .interact()?;
        debug!(choice, "menu selection");

        match choice {
            0 => build(session, BuilderVariant::Forest),
            1 => build(session, BuilderVariant::Dungeon),
            2 => clone_current(session),
            3 => modify_original(session),
            _ => break,
        }

        pause(&term)?;
    }

    Ok(())
}

fn draw_dashboard(session: &Session) {
    println!();
    println!(
        "  {} {}",
        style("MAPLAB").cyan().bold(),
        style("builder + prototype playground").dim()
    );
    println!();

    match session.original() {
        Some(original) => {
            println!("  {}", style("Current original:").bold());
            render::print_map(original);
        }
        None => {
            println!("  {}", style("No map built yet.").dim());
        }
    }

    let clones = session.clones();
    if !clones.is_empty() {
        println!();
        println!(
            "  {} {}",
            style("Clones:").bold(),
            style(format!(
                "{} total, showing last {}",
                clones.len(),
                HISTORY_WINDOW.min(clones.len())
            ))
            .dim()
        );
        let start = clones.len().saturating_sub(HISTORY_WINDOW);
        let table = render::clones_table(&clones[start..]);
        for line in table.to_string().lines() {
            println!("  {line}");
        }
    }

    println!();
}

fn build(session: &mut Session, variant: BuilderVariant) {
    println!();
    simulate_work(&format!("Building {variant}..."));

    let map = session.build(variant);
    println!(
        "  {} {} built.",
        style("✓").green().bold(),
        style(&map.name).cyan()
    );
    render::print_map(map);
}

fn clone_current(session: &mut Session) {
    println!();
    match session.clone_original() {
        Ok(clone) => {
            println!("  {} Clone created instantly.", style("✓").green().bold());
            render::print_map(clone);
        }
        Err(err) => render::print_user_error(&format!("{err} -- build one first")),
    }
}

fn modify_original(session: &mut Session) {
    println!();
    match session.modify_original() {
        Ok(original) => {
            println!(
                "  {} Original modified in place. Clones are unaffected.",
                style("!").yellow().bold()
            );
            render::print_map(original);
        }
        Err(err) => render::print_user_error(&format!("{err} -- build one first")),
    }
}

/// Cosmetic ten-tick build bar. The construction itself is instant.
fn simulate_work(message: &str) {
    let bar = ProgressBar::new(10);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("  {bar:20.cyan/blue} {msg}")
            .unwrap(),
    );
    bar.set_message(message.to_string());
    for _ in 0..10 {
        thread::sleep(Duration::from_millis(100));
        bar.inc(1);
    }
    bar.finish_and_clear();
}

fn pause(term: &Term) -> Result<()> {
    println!();
    println!("  {}", style("press any key to continue").dim());
    term.read_key()?;
    Ok(())
}
