//! Scripted walkthrough of the build / clone / modify lifecycle.
//!
//! Runs the same sequence a user would click through in the menu and
//! narrates what each step demonstrates, ending with the clone left
//! intact after the original is wrecked.

use anyhow::Result;
use console::style;

use maplab_core::builder::variant::BuilderVariant;
use maplab_core::session::Session;

use super::render;

pub fn run_demo(session: &mut Session) -> Result<()> {
    step("Build a Forest map through the director");
    let original = session.build(BuilderVariant::Forest);
    render::print_map(original);

    step("Clone it -- a deep copy, nothing shared with the original");
    let clone = session.clone_original()?;
    render::print_map(clone);

    step("Modify the original in place");
    let original = session.modify_original()?;
    render::print_map(original);

    step("The clone kept its own tiles");
    render::print_map(&session.clones()[0]);

    step("Build a Dungeon map -- a new generation, history is discarded");
    let original = session.build(BuilderVariant::Dungeon);
    render::print_map(original);
    println!(
        "  {}",
        style(format!("clones in history: {}", session.clones().len())).dim()
    );
    println!();

    Ok(())
}

fn step(title: &str) {
    println!();
    println!("  {} {}", style("▸").cyan().bold(), style(title).bold());
}
