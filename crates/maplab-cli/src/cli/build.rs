//! One-shot `maplab build <variant>`: construct a map and print it.

use anyhow::Result;
use console::style;
use tracing::info;

use maplab_core::builder::variant::BuilderVariant;
use maplab_core::director;

use super::render;

pub fn build_once(variant_arg: &str, json: bool) -> Result<()> {
    let variant: BuilderVariant = variant_arg
        .parse()
        .map_err(|e: String| anyhow::anyhow!("{e} (expected 'forest' or 'dungeon')"))?;

    info!(%variant, "one-shot build");

    let map = director::construct_full_map(variant);

    if json {
        println!("{}", serde_json::to_string_pretty(&map)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} {} map constructed.",
        style("✓").green().bold(),
        style(&map.name).cyan()
    );
    render::print_map(&map);
    println!();

    Ok(())
}
