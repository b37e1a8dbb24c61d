//! Grid materialization.
//!
//! # Algorithm
//!
//! 1. Select venues (all, or those listed in the filter) in catalog order.
//! 2. Emit one row per demand slot, in slot order.
//! 3. Emit one cell per date in the inclusive range, resolving
//!    availability and reading the effective state from the table.
//!
//! # Complexity
//! O(v * s * d * p) where v=venues, s=slots/venue, d=dates, p=policies.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::engine::GridEngine;
use crate::models::{CellKey, CellState, CellTable, DateCell, RoleCategory};

/// Date range and venue selection shown by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridFilter {
    /// First date (inclusive).
    pub start: NaiveDate,
    /// Last date (inclusive).
    pub end: NaiveDate,
    /// Venue IDs to show. Empty = all venues.
    pub venue_ids: Vec<String>,
}

impl GridFilter {
    /// Creates a filter over all venues.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end,
            venue_ids: Vec::new(),
        }
    }

    /// Restricts to one venue (may be called repeatedly).
    pub fn with_venue(mut self, venue_id: impl Into<String>) -> Self {
        self.venue_ids.push(venue_id.into());
        self
    }

    /// Whether a venue passes the filter.
    pub fn includes_venue(&self, venue_id: &str) -> bool {
        self.venue_ids.is_empty() || self.venue_ids.iter().any(|v| v == venue_id)
    }
}

/// One rendered cell.
#[derive(Debug, Clone, Serialize)]
pub struct GridCell {
    /// Address.
    pub key: CellKey,
    /// Derived availability.
    pub available: bool,
    /// Effective state.
    pub state: CellState,
}

/// One (venue, slot) row.
#[derive(Debug, Clone, Serialize)]
pub struct GridRow {
    /// Venue ID.
    pub venue_id: String,
    /// Agency name.
    pub agency_name: String,
    /// Location label.
    pub location_label: String,
    /// Slot ID.
    pub order_id: String,
    /// Role the slot requires.
    pub role_category: RoleCategory,
    /// Cells, one per date column.
    pub cells: Vec<GridCell>,
}

/// The materialized matrix for one filter and one table snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct GridView {
    /// Column axis.
    pub dates: Vec<DateCell>,
    /// Rows in venue, then slot order.
    pub rows: Vec<GridRow>,
}

impl GridView {
    /// Builds the matrix.
    pub fn build(engine: &GridEngine, table: &CellTable, filter: &GridFilter) -> Self {
        let dates = DateCell::range(filter.start, filter.end);
        let mut rows = Vec::new();

        for venue in engine
            .catalog()
            .venues
            .iter()
            .filter(|v| filter.includes_venue(&v.id))
        {
            for slot in &venue.demand_slots {
                let cells = dates
                    .iter()
                    .map(|d| {
                        let key = CellKey::new(venue.id.clone(), slot.id.clone(), d.date);
                        GridCell {
                            available: engine.available(&key),
                            state: table.get(&key),
                            key,
                        }
                    })
                    .collect();
                rows.push(GridRow {
                    venue_id: venue.id.clone(),
                    agency_name: venue.agency_name.clone(),
                    location_label: venue.location_label.clone(),
                    order_id: slot.id.clone(),
                    role_category: slot.role_category,
                    cells,
                });
            }
        }

        Self { dates, rows }
    }

    /// Iterates every cell.
    pub fn cells(&self) -> impl Iterator<Item = &GridCell> {
        self.rows.iter().flat_map(|r| r.cells.iter())
    }

    /// Finds a cell by key.
    pub fn cell(&self, key: &CellKey) -> Option<&GridCell> {
        self.cells().find(|c| &c.key == key)
    }
}
