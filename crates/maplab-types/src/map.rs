use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

/// Number of tiles in every map grid. Every map holds exactly this many
/// tiles for its entire lifetime.
pub const TILE_COUNT: usize = 10;

/// Unique identifier for a map, wrapping a UUID v7 (time-sortable).
///
/// Every construction and every clone gets a fresh id, so an original
/// and its copies are distinguishable by identity, not just by content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MapId(pub Uuid);

impl MapId {
    /// Create a new MapId using UUID v7.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for MapId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MapId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Display theme of a map, a color-like tag set at construction time.
///
/// The presentation layer maps this onto a terminal color; the core
/// never interprets it beyond copying it into clones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    Green,
    DarkGray,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Green => write!(f, "green"),
            Theme::DarkGray => write!(f, "dark-gray"),
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "green" => Ok(Theme::Green),
            "dark-gray" | "darkgray" => Ok(Theme::DarkGray),
            other => Err(format!("invalid theme: '{other}'")),
        }
    }
}

/// A game map: a named, themed grid of ten tiles.
///
/// Maps are built step by step by the builder pipeline in maplab-core
/// and duplicated through [`GameMap::clone_map`], which produces a fully
/// independent copy -- no tile storage is ever shared between a map and
/// its clones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameMap {
    pub id: MapId,
    /// Freeform display name. Mutable; the modify command renames it.
    pub name: String,
    /// The tile grid. The array type pins the exactly-ten invariant.
    pub tiles: [char; TILE_COUNT],
    /// Color-like display tag, fixed at construction.
    pub theme: Theme,
    /// Sky/biome descriptor. Defaults to the sentinel "Empty".
    pub environment: String,
    pub created_at: DateTime<Utc>,
}

impl GameMap {
    /// Create a blank map with the given name and theme.
    ///
    /// Tiles start as spaces, environment as the "Empty" sentinel.
    pub fn new(name: impl Into<String>, theme: Theme) -> Self {
        Self {
            id: MapId::new(),
            name: name.into(),
            tiles: [' '; TILE_COUNT],
            theme,
            environment: "Empty".to_string(),
            created_at: Utc::now(),
        }
    }

    /// Deep-copy this map into a new, fully independent entity.
    ///
    /// The copy gets a fresh id, the name with a " (Clone)" suffix, and
    /// its own tile storage; theme and environment are copied by value.
    /// Mutating the source afterwards never affects the copy.
    pub fn clone_map(&self) -> GameMap {
        GameMap {
            id: MapId::new(),
            name: format!("{} (Clone)", self.name),
            tiles: self.tiles,
            theme: self.theme,
            environment: self.environment.clone(),
            created_at: Utc::now(),
        }
    }

    /// Overwrite a single tile.
    ///
    /// Every index used by the build pipeline is a constant below
    /// [`TILE_COUNT`]; the assert keeps that invariant honest if a
    /// future variant ships an out-of-range index.
    pub fn set_tile(&mut self, index: usize, glyph: char) {
        assert!(
            index < TILE_COUNT,
            "tile index {index} out of range (grid holds {TILE_COUNT} tiles)"
        );
        self.tiles[index] = glyph;
    }

    /// The tile grid as a bracketed row, e.g. `[Twww*Wwww T]`.
    pub fn tile_row(&self) -> String {
        let mut row = String::with_capacity(TILE_COUNT + 2);
        row.push('[');
        row.extend(self.tiles);
        row.push(']');
        row
    }

    /// Pure multi-line description: header line plus the tile row.
    ///
    /// No color here -- the presentation layer styles the output using
    /// [`GameMap::theme`] as its hint.
    pub fn render(&self) -> String {
        format!(
            "Map: {} | Env: {}\n{}",
            self.name,
            self.environment,
            self.tile_row()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_map_defaults() {
        let map = GameMap::new("Forest", Theme::Green);

        assert_eq!(map.name, "Forest");
        assert_eq!(map.theme, Theme::Green);
        assert_eq!(map.environment, "Empty");
        assert_eq!(map.tiles, [' '; TILE_COUNT]);
    }

    #[test]
    fn test_clone_map_derives_name_and_fresh_id() {
        let map = GameMap::new("Forest", Theme::Green);
        let copy = map.clone_map();

        assert_eq!(copy.name, "Forest (Clone)");
        assert_eq!(copy.theme, map.theme);
        assert_eq!(copy.environment, map.environment);
        assert_eq!(copy.tiles, map.tiles);
        assert_ne!(copy.id, map.id);
    }

    #[test]
    fn test_clone_map_storage_is_independent() {
        let mut map = GameMap::new("Forest", Theme::Green);
        map.set_tile(5, 'W');
        let copy = map.clone_map();

        map.set_tile(5, 'X');

        assert_eq!(map.tiles[5], 'X');
        assert_eq!(copy.tiles[5], 'W');
    }

    #[test]
    fn test_map_equality_is_by_value() {
        let map = GameMap::new("Forest", Theme::Green);

        // A plain copy compares equal; the prototype op does not, since
        // it re-derives the name and mints a fresh id.
        assert_eq!(map.clone(), map);
        assert_ne!(map.clone_map(), map);
    }

    #[test]
    fn test_set_tile_writes_in_bounds() {
        let mut map = GameMap::new("Dungeon", Theme::DarkGray);
        map.set_tile(0, '#');
        map.set_tile(TILE_COUNT - 1, '#');

        assert_eq!(map.tiles[0], '#');
        assert_eq!(map.tiles[9], '#');
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_set_tile_rejects_out_of_range_index() {
        let mut map = GameMap::new("Dungeon", Theme::DarkGray);
        map.set_tile(TILE_COUNT, '#');
    }

    #[test]
    fn test_render_format() {
        let mut map = GameMap::new("Forest", Theme::Green);
        for i in 0..TILE_COUNT {
            map.set_tile(i, 'w');
        }

        assert_eq!(map.render(), "Map: Forest | Env: Empty\n[wwwwwwwwww]");
    }

    #[test]
    fn test_theme_display_round_trip() {
        for theme in [Theme::Green, Theme::DarkGray] {
            let parsed: Theme = theme.to_string().parse().unwrap();
            assert_eq!(parsed, theme);
        }
        assert!("mauve".parse::<Theme>().is_err());
    }

    #[test]
    fn test_map_serde_round_trip() {
        let map = GameMap::new("Dungeon", Theme::DarkGray);
        let json = serde_json::to_string(&map).unwrap();
        let back: GameMap = serde_json::from_str(&json).unwrap();

        assert_eq!(back.id, map.id);
        assert_eq!(back.tiles, map.tiles);
        assert_eq!(back.theme, map.theme);
    }
}
