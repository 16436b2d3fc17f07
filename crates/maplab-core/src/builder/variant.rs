use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

use maplab_types::map::Theme;

/// The two shipped builder variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuilderVariant {
    Forest,
    Dungeon,
}

impl BuilderVariant {
    pub const ALL: [BuilderVariant; 2] = [BuilderVariant::Forest, BuilderVariant::Dungeon];

    /// The fixed configuration driving every build step for this variant.
    pub fn spec(self) -> &'static VariantSpec {
        match self {
            BuilderVariant::Forest => &FOREST,
            BuilderVariant::Dungeon => &DUNGEON,
        }
    }
}

impl fmt::Display for BuilderVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuilderVariant::Forest => write!(f, "forest"),
            BuilderVariant::Dungeon => write!(f, "dungeon"),
        }
    }
}

impl FromStr for BuilderVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "forest" => Ok(BuilderVariant::Forest),
            "dungeon" => Ok(BuilderVariant::Dungeon),
            other => Err(format!("invalid builder variant: '{other}'")),
        }
    }
}

/// Fixed per-variant configuration consumed by the grid builder.
///
/// One table entry replaces one hand-written builder implementation:
/// the four build steps are generic over this struct, so adding a
/// variant means adding a row, not code.
#[derive(Debug)]
pub struct VariantSpec {
    /// Seed name given to the map on reset.
    pub name: &'static str,
    /// Seed theme given to the map on reset.
    pub theme: Theme,
    /// Glyph the terrain step fills every tile with.
    pub terrain_glyph: char,
    /// Glyph the walls step writes at both grid ends.
    pub wall_glyph: char,
    /// Interior tile the enemy step overwrites.
    pub enemy_index: usize,
    pub enemy_glyph: char,
    /// Interior tile the loot step overwrites.
    pub loot_index: usize,
    pub loot_glyph: char,
}

static FOREST: VariantSpec = VariantSpec {
    name: "Forest",
    theme: Theme::Green,
    terrain_glyph: 'w',
    wall_glyph: 'T',
    enemy_index: 5,
    enemy_glyph: 'W',
    loot_index: 4,
    loot_glyph: '*',
};

static DUNGEON: VariantSpec = VariantSpec {
    name: "Dungeon",
    theme: Theme::DarkGray,
    terrain_glyph: '.',
    wall_glyph: '#',
    enemy_index: 3,
    enemy_glyph: 'S',
    loot_index: 6,
    loot_glyph: '$',
};

#[cfg(test)]
mod tests {
    use super::*;
    use maplab_types::map::TILE_COUNT;

    #[test]
    fn test_variant_display_round_trip() {
        for variant in BuilderVariant::ALL {
            let parsed: BuilderVariant = variant.to_string().parse().unwrap();
            assert_eq!(parsed, variant);
        }
        assert!("swamp".parse::<BuilderVariant>().is_err());
    }

    #[test]
    fn test_spec_indices_are_interior_and_in_bounds() {
        for variant in BuilderVariant::ALL {
            let spec = variant.spec();
            for index in [spec.enemy_index, spec.loot_index] {
                assert!(index > 0 && index < TILE_COUNT - 1);
            }
        }
    }

    #[test]
    fn test_spec_seed_attributes() {
        assert_eq!(BuilderVariant::Forest.spec().name, "Forest");
        assert_eq!(BuilderVariant::Forest.spec().theme, Theme::Green);
        assert_eq!(BuilderVariant::Dungeon.spec().name, "Dungeon");
        assert_eq!(BuilderVariant::Dungeon.spec().theme, Theme::DarkGray);
    }
}
