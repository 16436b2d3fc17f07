//! Step-by-step map construction.
//!
//! [`MapBuilder`] is the seam the director drives: five ordered steps
//! plus accessors for the map under construction. [`GridBuilder`] is
//! the single implementation, generic over a [`VariantSpec`] table row
//! instead of one hand-rolled builder per variant.

pub mod variant;

use tracing::debug;

use maplab_types::map::{GameMap, TILE_COUNT};

use self::variant::{BuilderVariant, VariantSpec};

/// A step-by-step map builder.
///
/// Steps are individually idempotent, but the canonical layout only
/// falls out of the order reset -> terrain -> walls -> enemies -> loot,
/// because later steps deliberately overwrite tiles earlier steps
/// touched. Calling them out of order is not an error, just a
/// non-canonical grid.
pub trait MapBuilder {
    /// Discard any in-progress map and start over from the variant's
    /// seed name and theme.
    fn reset(&mut self);

    /// Fill every tile with the base terrain glyph.
    fn build_terrain(&mut self);

    /// Write the boundary glyph at both ends of the grid.
    fn build_walls(&mut self);

    /// Place the enemy glyph on its fixed interior tile.
    fn build_enemies(&mut self);

    /// Place the loot glyph on its fixed interior tile.
    fn build_loot(&mut self);

    /// Borrow the map under construction for inspection.
    fn map(&self) -> &GameMap;

    /// Hand the finished map off to the caller. The builder is consumed;
    /// there is no way to keep an alias to the map it built.
    fn take_map(self: Box<Self>) -> GameMap;
}

/// The table-driven builder behind every variant.
pub struct GridBuilder {
    spec: &'static VariantSpec,
    map: GameMap,
}

impl GridBuilder {
    /// Create a builder for the given variant, already reset.
    pub fn new(variant: BuilderVariant) -> Self {
        let spec = variant.spec();
        Self {
            spec,
            map: GameMap::new(spec.name, spec.theme),
        }
    }
}

impl MapBuilder for GridBuilder {
    fn reset(&mut self) {
        debug!(name = self.spec.name, "builder reset");
        self.map = GameMap::new(self.spec.name, self.spec.theme);
    }

    fn build_terrain(&mut self) {
        debug!(glyph = %self.spec.terrain_glyph, "terrain fill");
        for index in 0..TILE_COUNT {
            self.map.set_tile(index, self.spec.terrain_glyph);
        }
    }

    fn build_walls(&mut self) {
        debug!(glyph = %self.spec.wall_glyph, "walls");
        self.map.set_tile(0, self.spec.wall_glyph);
        self.map.set_tile(TILE_COUNT - 1, self.spec.wall_glyph);
    }

    fn build_enemies(&mut self) {
        debug!(glyph = %self.spec.enemy_glyph, index = self.spec.enemy_index, "enemies");
        self.map.set_tile(self.spec.enemy_index, self.spec.enemy_glyph);
    }

    fn build_loot(&mut self) {
        debug!(glyph = %self.spec.loot_glyph, index = self.spec.loot_index, "loot");
        self.map.set_tile(self.spec.loot_index, self.spec.loot_glyph);
    }

    fn map(&self) -> &GameMap {
        &self.map
    }

    fn take_map(self: Box<Self>) -> GameMap {
        self.map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn built(variant: BuilderVariant) -> GridBuilder {
        let mut builder = GridBuilder::new(variant);
        builder.build_terrain();
        builder.build_walls();
        builder.build_enemies();
        builder.build_loot();
        builder
    }

    #[test]
    fn test_forest_canonical_layout() {
        let builder = built(BuilderVariant::Forest);
        assert_eq!(
            builder.map().tiles,
            ['T', 'w', 'w', 'w', '*', 'W', 'w', 'w', 'w', 'T']
        );
    }

    #[test]
    fn test_dungeon_canonical_layout() {
        let builder = built(BuilderVariant::Dungeon);
        assert_eq!(
            builder.map().tiles,
            ['#', '.', '.', 'S', '.', '.', '$', '.', '.', '#']
        );
    }

    #[test]
    fn test_new_builder_is_already_seeded() {
        let builder = GridBuilder::new(BuilderVariant::Forest);
        assert_eq!(builder.map().name, "Forest");
        assert_eq!(builder.map().tiles, [' '; TILE_COUNT]);
    }

    #[test]
    fn test_reset_discards_progress() {
        let mut builder = built(BuilderVariant::Dungeon);
        builder.reset();
        assert_eq!(builder.map().tiles, [' '; TILE_COUNT]);
        assert_eq!(builder.map().name, "Dungeon");
    }

    #[test]
    fn test_terrain_fill_is_idempotent() {
        let mut once = GridBuilder::new(BuilderVariant::Forest);
        once.build_terrain();
        let mut twice = GridBuilder::new(BuilderVariant::Forest);
        twice.build_terrain();
        twice.build_terrain();

        assert_eq!(once.map().tiles, twice.map().tiles);
    }

    #[test]
    fn test_walls_win_after_repeated_terrain_fills() {
        let mut builder = GridBuilder::new(BuilderVariant::Forest);
        builder.build_terrain();
        builder.build_terrain();
        builder.build_walls();
        builder.build_enemies();
        builder.build_loot();

        assert_eq!(
            builder.map().tiles,
            ['T', 'w', 'w', 'w', '*', 'W', 'w', 'w', 'w', 'T']
        );
    }

    #[test]
    fn test_take_map_hands_off_ownership() {
        let builder = Box::new(built(BuilderVariant::Forest));
        let map = builder.take_map();
        assert_eq!(map.name, "Forest");
    }
}
