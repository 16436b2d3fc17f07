//! Construction sequencing.
//!
//! The director owns no state: it takes the builder (or variant) as an
//! explicit parameter, runs the five steps in canonical order, and
//! returns the finished map by value.

use tracing::info;

use maplab_types::map::GameMap;

use crate::builder::variant::BuilderVariant;
use crate::builder::{GridBuilder, MapBuilder};

/// Run the five construction steps in canonical order against any builder.
pub fn run_build_steps(builder: &mut dyn MapBuilder) {
    builder.reset();
    builder.build_terrain();
    builder.build_walls();
    builder.build_enemies();
    builder.build_loot();
}

/// Construct the canonical map for a variant and hand it to the caller.
pub fn construct_full_map(variant: BuilderVariant) -> GameMap {
    let mut builder = Box::new(GridBuilder::new(variant));
    run_build_steps(builder.as_mut());
    let map = builder.take_map();
    info!(%variant, name = %map.name, "constructed full map");
    map
}
