//! Lock toggling.
//!
//! # State Machine
//! `Unlocked ⇄ Locked` via `toggle_lock`. Occupant, status and memos are
//! untouched by the toggle.

use tracing::debug;

use super::GridEngine;
use crate::models::{CellKey, CellTable};

impl GridEngine {
    /// Flips the cell's lock flag. Always permitted.
    pub fn toggle_lock(&self, table: &CellTable, key: &CellKey) -> CellTable {
        let mut next = table.clone();
        next.update(key, |s| s.locked = !s.locked);
        debug!(cell = %key, locked = next.is_locked(key), "lock toggled");
        next
    }
}
