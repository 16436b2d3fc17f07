//! Session state: the current original map and its clone history.
//!
//! One `Session` is created at program start and passed by mutable
//! reference into every command handler. The history is scoped to one
//! original's generation: building a new map -- even of the same
//! variant -- discards all existing clones.

use tracing::info;

use maplab_types::error::SessionError;
use maplab_types::map::GameMap;

use crate::builder::variant::BuilderVariant;
use crate::director;

/// Tile the modify command overwrites on the original.
pub const MODIFY_INDEX: usize = 5;
/// Glyph the modify command writes.
pub const MODIFY_GLYPH: char = 'X';
/// Name the modify command gives the original.
pub const DESTROYED_NAME: &str = "DESTROYED MAP";

/// The single original map plus the ordered history of clones derived
/// from it.
///
/// Every entry in `clones` is structurally independent of the original
/// and of its siblings: mutating the original's tiles never shows up in
/// any clone.
#[derive(Debug, Default)]
pub struct Session {
    original: Option<GameMap>,
    clones: Vec<GameMap>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct the canonical map for `variant`, make it the original,
    /// and discard the previous generation's clone history.
    pub fn build(&mut self, variant: BuilderVariant) -> &GameMap {
        let map = director::construct_full_map(variant);
        info!(%variant, discarded_clones = self.clones.len(), "new original");
        self.clones.clear();
        self.original.insert(map)
    }

    /// Deep-copy the original into the history and return the new clone.
    pub fn clone_original(&mut self) -> Result<&GameMap, SessionError> {
        let original = self.original.as_ref().ok_or(SessionError::NoOriginal)?;
        let clone = original.clone_map();
        info!(name = %clone.name, total = self.clones.len() + 1, "cloned original");
        self.clones.push(clone);
        Ok(self.clones.last().expect("just pushed"))
    }

    /// Mutate the original in place: mark one tile and rename it.
    ///
    /// Existing clones are untouched -- that is the point of the demo.
    pub fn modify_original(&mut self) -> Result<&GameMap, SessionError> {
        let original = self.original.as_mut().ok_or(SessionError::NoOriginal)?;
        original.set_tile(MODIFY_INDEX, MODIFY_GLYPH);
        original.name = DESTROYED_NAME.to_string();
        info!("modified original in place");
        Ok(original)
    }

    /// The current original, if any map has been built yet.
    pub fn original(&self) -> Option<&GameMap> {
        self.original.as_ref()
    }

    /// Clone history for the current original's generation, oldest first.
    pub fn clones(&self) -> &[GameMap] {
        &self.clones
    }
}
