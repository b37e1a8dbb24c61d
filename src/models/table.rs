//! Cell table: the whole-grid state value.
//!
//! A persistent map from [`CellKey`] to [`CellState`], plus a reverse
//! occupancy index from staff ID to the key that holds them. Cloning is
//! O(1) and updates copy only the touched path, so every operation can
//! derive a new table from an immutable snapshot and swap it in whole.
//!
//! # Sparsity
//! Keys absent from the map read as the default state. An update that
//! leaves a cell pristine removes its entry.
//!
//! # Snapshots
//! A table serializes as its list of non-default cells. The occupancy
//! index is rebuilt on load, so check loaded tables with
//! `validation::validate_table` before trusting them.

use im::{HashMap, OrdMap};
use serde::{Deserialize, Serialize};

use super::{CellKey, CellState, Memo, StaffRef, StatusTag};

/// Whole-grid state value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "TableSnapshot", into = "TableSnapshot")]
pub struct CellTable {
    cells: OrdMap<CellKey, CellState>,
    occupancy: HashMap<String, CellKey>,
}

impl CellTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cells with non-default state.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether every cell is in its default state.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Stored state for a key, if any mutation has touched it.
    pub fn state(&self, key: &CellKey) -> Option<&CellState> {
        self.cells.get(key)
    }

    /// Effective state for a key (default when never mutated).
    pub fn get(&self, key: &CellKey) -> CellState {
        self.cells.get(key).cloned().unwrap_or_default()
    }

    /// Whether the cell is locked.
    pub fn is_locked(&self, key: &CellKey) -> bool {
        self.cells.get(key).is_some_and(|s| s.locked)
    }

    /// Current status tag.
    pub fn status(&self, key: &CellKey) -> StatusTag {
        self.cells.get(key).map(|s| s.status).unwrap_or_default()
    }

    /// Current occupant.
    pub fn occupant(&self, key: &CellKey) -> Option<&StaffRef> {
        self.cells.get(key).and_then(|s| s.occupant.as_ref())
    }

    /// Memo thread in append order.
    pub fn memos(&self, key: &CellKey) -> &[Memo] {
        self.cells
            .get(key)
            .map(|s| s.memos.as_slice())
            .unwrap_or(&[])
    }

    /// Key currently holding a staff member.
    pub fn locate(&self, staff_id: &str) -> Option<&CellKey> {
        self.occupancy.get(staff_id)
    }

    /// Iterates stored cells in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&CellKey, &CellState)> {
        self.cells.iter()
    }

    /// Keys with an occupant, in key order.
    pub fn occupied_keys(&self) -> Vec<&CellKey> {
        self.cells
            .iter()
            .filter(|(_, s)| s.is_occupied())
            .map(|(k, _)| k)
            .collect()
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.occupancy.len()
    }

    /// Applies `f` to one cell and keeps the occupancy index in step.
    ///
    /// Performs no precondition checks; callers enforce lock and
    /// availability rules.
    pub(crate) fn update(&mut self, key: &CellKey, f: impl FnOnce(&mut CellState)) {
        let mut state = self.get(key);
        let before = state.occupant.as_ref().map(|o| o.id.clone());
        f(&mut state);
        let after = state.occupant.as_ref().map(|o| o.id.clone());

        if before != after {
            if let Some(id) = before {
                if self.occupancy.get(&id) == Some(key) {
                    self.occupancy.remove(&id);
                }
            }
            if let Some(id) = after {
                self.occupancy.insert(id, key.clone());
            }
        }

        if state.is_pristine() {
            self.cells.remove(key);
        } else {
            self.cells.insert(key.clone(), state);
        }
    }

    /// Occupancy index entries (staff ID → key).
    pub(crate) fn occupancy_index(&self) -> impl Iterator<Item = (&String, &CellKey)> {
        self.occupancy.iter()
    }
}

#[derive(Serialize, Deserialize)]
struct TableSnapshot {
    cells: Vec<(CellKey, CellState)>,
}

impl From<CellTable> for TableSnapshot {
    fn from(table: CellTable) -> Self {
        Self {
            cells: table.cells.into_iter().collect(),
        }
    }
}

impl From<TableSnapshot> for CellTable {
    fn from(snapshot: TableSnapshot) -> Self {
        let mut table = CellTable::new();
        for (key, state) in snapshot.cells {
            table.update(&key, |s| *s = state);
        }
        table
    }
}
