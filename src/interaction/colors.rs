//! Cosmetic per-cell color overrides.
//!
//! Kept apart from [`CellTable`](crate::models::CellTable): colors are
//! not part of the grid state, are not lock-gated, and carry none of
//! its guarantees.

use std::collections::BTreeMap;

/// Cell id → color side-table.
#[derive(Debug, Clone, Default)]
pub struct CellColors {
    overrides: BTreeMap<String, String>,
    default_color: Option<String>,
}

impl CellColors {
    /// Creates an empty side-table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fallback color.
    pub fn with_default(mut self, color: Option<String>) -> Self {
        self.default_color = color;
        self
    }

    /// Sets or clears a cell's override.
    pub fn set(&mut self, cell_id: impl Into<String>, color: Option<String>) {
        let cell_id = cell_id.into();
        match color {
            Some(c) => {
                self.overrides.insert(cell_id, c);
            }
            None => {
                self.overrides.remove(&cell_id);
            }
        }
    }

    /// Color to render for a cell.
    pub fn color_for(&self, cell_id: &str) -> Option<&str> {
        self.overrides
            .get(cell_id)
            .or(self.default_color.as_ref())
            .map(String::as_str)
    }

    /// Number of overrides.
    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    /// Whether no overrides are set.
    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }

    /// Drops all overrides.
    pub fn clear(&mut self) {
        self.overrides.clear();
    }
}
