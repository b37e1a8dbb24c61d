//! Grid engine: the mutating operations on a [`CellTable`].
//!
//! Every operation takes the current table by reference and returns the
//! next table value. The input is never modified, so a renderer holding
//! the previous snapshot never observes a partial update.
//!
//! # Operation Forms
//!
//! | Form | Returns | On rejection |
//! |------|---------|--------------|
//! | `try_*` | `GridResult<CellTable>` | `Err(GridError)` |
//! | plain | `CellTable` | the input table, unchanged; rejection logged |
//!
//! # Lock Gate
//! `toggle_lock` is the only operation permitted on a locked cell.

mod assign;
mod lock;
mod memo;
mod status;

use std::sync::Arc;

use tracing::{debug, warn};

use crate::availability::AvailabilityResolver;
use crate::error::{GridError, GridResult};
use crate::models::{Catalog, CellKey, CellTable, Staff};

/// Stateless operation set over cell tables.
#[derive(Debug, Clone)]
pub struct GridEngine {
    resolver: AvailabilityResolver,
}

impl GridEngine {
    /// Creates an engine over the given resolver.
    pub fn new(resolver: AvailabilityResolver) -> Self {
        Self { resolver }
    }

    /// Availability resolver in use.
    pub fn resolver(&self) -> &AvailabilityResolver {
        &self.resolver
    }

    /// Catalog in use.
    pub fn catalog(&self) -> &Catalog {
        self.resolver.catalog()
    }

    /// Shared handle to the catalog.
    pub fn catalog_arc(&self) -> Arc<Catalog> {
        self.resolver.catalog_arc()
    }

    /// Whether a cell accepts placement.
    pub fn available(&self, key: &CellKey) -> bool {
        self.resolver.is_available(key)
    }

    /// Fresh table for a new date range or venue filter.
    ///
    /// Cell state does not survive a filter change.
    pub fn reset_for_filter(&self, table: &CellTable) -> CellTable {
        if !table.is_empty() {
            debug!(discarded = table.len(), "grid filter changed; cell state discarded");
        }
        CellTable::new()
    }

    /// Staff not placed in any cell, in roster order.
    pub fn unassigned_staff<'a>(&'a self, table: &CellTable) -> Vec<&'a Staff> {
        self.catalog()
            .staff
            .iter()
            .filter(|s| table.locate(&s.id).is_none())
            .collect()
    }

    /// Rejects the operation if the cell is locked.
    fn ensure_unlocked(table: &CellTable, key: &CellKey) -> GridResult<()> {
        if table.is_locked(key) {
            return Err(GridError::LockedCell(key.clone()));
        }
        Ok(())
    }

    /// Collapses a fallible result into the fail-quiet form.
    fn settle(op: &'static str, table: &CellTable, result: GridResult<CellTable>) -> CellTable {
        match result {
            Ok(next) => next,
            Err(err) => {
                if err.is_silent() {
                    debug!(op, %err, "operation rejected");
                } else {
                    warn!(op, %err, "operation rejected");
                }
                table.clone()
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::availability::rules::CalendarRule;
    use crate::models::{OrderSlot, RoleCategory, Venue, VenueCalendar};
    use chrono::NaiveDate;

    /// V1: every day, O1 closer + O2/O3 girl. V2: weekends only, O1 girl.
    pub(crate) fn engine() -> GridEngine {
        let catalog = Catalog::new()
            .with_venue(
                Venue::new("V1")
                    .with_slot(OrderSlot::closer("O1"))
                    .with_slot(OrderSlot::girl("O2"))
                    .with_slot(OrderSlot::girl("O3")),
            )
            .with_venue(
                Venue::new("V2")
                    .with_calendar(VenueCalendar::weekends_only())
                    .with_slot(OrderSlot::girl("O1")),
            )
            .with_staff(Staff::new("S1", "Aiko", RoleCategory::Girl))
            .with_staff(Staff::new("S2", "Ben", RoleCategory::Closer))
            .with_staff(Staff::new("S3", "Chika", RoleCategory::Girl));
        GridEngine::new(AvailabilityResolver::new(catalog).with_policy(CalendarRule))
    }

    pub(crate) fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 10).unwrap()
    }

    pub(crate) fn key(venue: &str, order: &str) -> CellKey {
        CellKey::new(venue, order, date())
    }
}
