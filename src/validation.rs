//! Integrity checks for catalog input and cell tables.
//!
//! Catalog checks run before a grid is built. Detects:
//! - Duplicate venue, slot (within a venue) and staff IDs
//! - Empty staff display names
//! - Venues whose calendar never opens
//!
//! Table checks verify the grid invariants on a snapshot:
//! - Occupants only on available cells
//! - Each staff ID in at most one cell, matching the occupancy index

use std::collections::HashSet;

use crate::engine::GridEngine;
use crate::models::{Catalog, CellTable};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A staff record has no display name.
    MissingName,
    /// A venue calendar has no open weekday.
    NeverOpen,
    /// An occupied cell is not available.
    OccupiedUnavailable,
    /// A staff ID occupies more than one cell.
    DuplicatePlacement,
    /// The occupancy index disagrees with the cells.
    IndexMismatch,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates catalog reference data.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_catalog(catalog: &Catalog) -> ValidationResult {
    let mut errors = Vec::new();

    let mut venue_ids = HashSet::new();
    for venue in &catalog.venues {
        if !venue_ids.insert(venue.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate venue ID: {}", venue.id),
            ));
        }

        let mut slot_ids = HashSet::new();
        for slot in &venue.demand_slots {
            if !slot_ids.insert(slot.id.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateId,
                    format!("Duplicate order ID '{}' in venue '{}'", slot.id, venue.id),
                ));
            }
        }

        if venue.calendar.open_days.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::NeverOpen,
                format!("Venue '{}' has no open weekday", venue.id),
            ));
        }
    }

    let mut staff_ids = HashSet::new();
    for staff in &catalog.staff {
        if !staff_ids.insert(staff.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate staff ID: {}", staff.id),
            ));
        }
        if staff.display_name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingName,
                format!("Staff '{}' has no display name", staff.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates grid invariants on a table snapshot.
pub fn validate_table(engine: &GridEngine, table: &CellTable) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (key, state) in table.iter() {
        let Some(occupant) = &state.occupant else {
            continue;
        };
        if !engine.available(key) {
            errors.push(ValidationError::new(
                ValidationErrorKind::OccupiedUnavailable,
                format!("Cell {key} holds '{}' but is not available", occupant.id),
            ));
        }
        if !seen.insert(occupant.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicatePlacement,
                format!("Staff '{}' occupies more than one cell", occupant.id),
            ));
        }
        if table.locate(&occupant.id) != Some(key) {
            errors.push(ValidationError::new(
                ValidationErrorKind::IndexMismatch,
                format!("Index does not map '{}' to {key}", occupant.id),
            ));
        }
    }

    for (staff_id, key) in table.occupancy_index() {
        if table.occupant(key).map(|o| o.id.as_str()) != Some(staff_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::IndexMismatch,
                format!("Index maps '{staff_id}' to {key}, which does not hold them"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_support::{engine, key};
    use crate::models::{OrderSlot, RoleCategory, Staff, Venue, VenueCalendar};

    fn sample_catalog() -> Catalog {
        Catalog::new()
            .with_venue(
                Venue::new("V1")
                    .with_slot(OrderSlot::closer("O1"))
                    .with_slot(OrderSlot::girl("O2")),
            )
            .with_venue(Venue::new("V2").with_slot(OrderSlot::girl("O1")))
            .with_staff(Staff::new("S1", "Aiko", RoleCategory::Girl))
            .with_staff(Staff::new("S2", "Ben", RoleCategory::Closer))
    }

    #[test]
    fn test_valid_catalog() {
        assert!(validate_catalog(&sample_catalog()).is_ok());
    }

    #[test]
    fn test_duplicate_ids() {
        let catalog = sample_catalog()
            .with_venue(Venue::new("V1"))
            .with_staff(Staff::new("S1", "Aiko 2", RoleCategory::Girl));
        let errors = validate_catalog(&catalog).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("venue")));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("staff")));
    }

    #[test]
    fn test_duplicate_order_within_venue() {
        let catalog = Catalog::new().with_venue(
            Venue::new("V1")
                .with_slot(OrderSlot::girl("O1"))
                .with_slot(OrderSlot::closer("O1")),
        );
        let errors = validate_catalog(&catalog).unwrap_err();
        assert!(errors.iter().any(|e| e.message.contains("order ID 'O1'")));
    }

    #[test]
    fn test_missing_name_and_never_open() {
        let catalog = Catalog::new()
            .with_venue(Venue::new("V1").with_calendar(VenueCalendar::new([])))
            .with_staff(Staff::new("S1", "  ", RoleCategory::Girl));
        let errors = validate_catalog(&catalog).unwrap_err();
        assert!(errors.iter().any(|e| e.kind == ValidationErrorKind::MissingName));
        assert!(errors.iter().any(|e| e.kind == ValidationErrorKind::NeverOpen));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_engine_tables_validate() {
        let e = engine();
        let t = e.place(&CellTable::new(), &key("V1", "O1"), "S2");
        let t = e.place(&t, &key("V1", "O2"), "S1");
        let t = e.move_or_swap(&t, &key("V1", "O1"), &key("V1", "O2"), "S2");
        assert!(validate_table(&e, &t).is_ok());
    }

    #[test]
    fn test_detects_corrupt_table() {
        let e = engine();
        let mut t = CellTable::new();
        let s1 = Staff::new("S1", "Aiko", RoleCategory::Girl).to_ref();
        t.update(&key("V1", "O1"), |s| s.occupant = Some(s1.clone()));
        t.update(&key("V1", "O2"), |s| s.occupant = Some(s1.clone()));
        t.update(&key("V2", "O1"), |s| s.occupant = Some(Staff::new("S3", "C", RoleCategory::Girl).to_ref()));

        let errors = validate_table(&e, &t).unwrap_err();
        assert!(errors.iter().any(|e| e.kind == ValidationErrorKind::DuplicatePlacement));
        assert!(errors.iter().any(|e| e.kind == ValidationErrorKind::OccupiedUnavailable));
        assert!(errors.iter().any(|e| e.kind == ValidationErrorKind::IndexMismatch));
    }
}
