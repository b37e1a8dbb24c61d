//! Placement, moves and two-cell swaps.
//!
//! # Algorithm (move_or_swap)
//!
//! 1. Same source and destination → no-op.
//! 2. Source must still hold the dragged staff.
//! 3. Neither cell may be locked (all-or-nothing).
//! 4. Destination must be available.
//! 5. Capture the destination occupant from the input snapshot.
//! 6. Write the staff into the destination, then write the captured
//!    occupant (or nothing) into the source.
//!
//! All reads come from the input table and all writes go to a clone, so
//! the caller sees either the old table or the complete new one.
//!
//! # Invariant
//! A staff ID occupies at most one cell before and after every call.

use tracing::debug;

use super::GridEngine;
use crate::error::{GridError, GridResult};
use crate::models::{CellKey, CellTable};

impl GridEngine {
    /// Places a staff member from the unassigned pool into an empty cell.
    ///
    /// Requires the staff ID to exist in the catalog and to be unplaced,
    /// and the cell to be available, unlocked and empty.
    pub fn try_place(&self, table: &CellTable, key: &CellKey, staff_id: &str) -> GridResult<CellTable> {
        let staff = self
            .catalog()
            .staff(staff_id)
            .ok_or_else(|| GridError::UnknownStaff(staff_id.to_string()))?;
        Self::ensure_unlocked(table, key)?;
        if !self.available(key) {
            return Err(GridError::Unavailable(key.clone()));
        }
        if table.occupant(key).is_some() {
            return Err(GridError::Occupied(key.clone()));
        }
        if let Some(at) = table.locate(staff_id) {
            return Err(GridError::StaffAlreadyPlaced {
                staff_id: staff_id.to_string(),
                at: at.clone(),
            });
        }

        let occupant = staff.to_ref();
        let mut next = table.clone();
        next.update(key, |s| s.occupant = Some(occupant));
        debug!(cell = %key, staff = staff_id, "staff placed");
        Ok(next)
    }

    /// Fail-quiet form of [`try_place`](Self::try_place).
    pub fn place(&self, table: &CellTable, key: &CellKey, staff_id: &str) -> CellTable {
        Self::settle("place", table, self.try_place(table, key, staff_id))
    }

    /// Moves a staff member between cells, swapping if the destination
    /// is occupied.
    pub fn try_move_or_swap(
        &self,
        table: &CellTable,
        source: &CellKey,
        dest: &CellKey,
        staff_id: &str,
    ) -> GridResult<CellTable> {
        if source == dest {
            return Err(GridError::SameCell(source.clone()));
        }

        let moving = match table.occupant(source) {
            Some(occupant) if occupant.id == staff_id => occupant.clone(),
            _ => {
                return Err(GridError::SourceOccupantMismatch {
                    key: source.clone(),
                    staff_id: staff_id.to_string(),
                })
            }
        };

        Self::ensure_unlocked(table, source)?;
        Self::ensure_unlocked(table, dest)?;
        if !self.available(dest) {
            return Err(GridError::Unavailable(dest.clone()));
        }

        let displaced = table.occupant(dest).cloned();
        let swapped = displaced.as_ref().map(|d| d.id.clone());

        let mut next = table.clone();
        next.update(dest, |s| s.occupant = Some(moving));
        next.update(source, |s| s.occupant = displaced);

        debug!(
            from = %source,
            to = %dest,
            staff = staff_id,
            swapped_with = swapped.as_deref().unwrap_or("-"),
            "staff moved"
        );
        Ok(next)
    }

    /// Fail-quiet form of [`try_move_or_swap`](Self::try_move_or_swap).
    pub fn move_or_swap(
        &self,
        table: &CellTable,
        source: &CellKey,
        dest: &CellKey,
        staff_id: &str,
    ) -> CellTable {
        Self::settle(
            "move_or_swap",
            table,
            self.try_move_or_swap(table, source, dest, staff_id),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    #[test]
    fn test_place() {
        let e = engine();
        let k = key("V1", "O1");
        let t = e.try_place(&CellTable::new(), &k, "S1").unwrap();
        assert_eq!(t.occupant(&k).map(|o| o.id.as_str()), Some("S1"));
        assert_eq!(t.locate("S1"), Some(&k));
    }

    #[test]
    fn test_place_preconditions() {
        let e = engine();
        let k = key("V1", "O1");
        let t = e.place(&CellTable::new(), &k, "S1");

        assert!(matches!(e.try_place(&t, &k, "S2"), Err(GridError::Occupied(_))));
        assert!(matches!(
            e.try_place(&t, &key("V1", "O2"), "S1"),
            Err(GridError::StaffAlreadyPlaced { .. })
        ));
        assert!(matches!(
            e.try_place(&t, &key("V2", "O1"), "S2"),
            Err(GridError::Unavailable(_))
        ));
        assert!(matches!(
            e.try_place(&t, &key("V1", "O2"), "S99"),
            Err(GridError::UnknownStaff(_))
        ));

        let locked = e.toggle_lock(&t, &key("V1", "O2"));
        assert!(matches!(
            e.try_place(&locked, &key("V1", "O2"), "S2"),
            Err(GridError::LockedCell(_))
        ));
        assert_eq!(e.place(&locked, &key("V1", "O2"), "S2"), locked);
    }

    #[test]
    fn test_plain_move() {
        let e = engine();
        let (a, b) = (key("V1", "O1"), key("V1", "O2"));
        let t = e.place(&CellTable::new(), &a, "S1");
        let t = e.try_move_or_swap(&t, &a, &b, "S1").unwrap();
        assert!(t.occupant(&a).is_none());
        assert_eq!(t.occupant(&b).map(|o| o.id.as_str()), Some("S1"));
        assert_eq!(t.locate("S1"), Some(&b));
    }

    #[test]
    fn test_swap() {
        let e = engine();
        let (a, b) = (key("V1", "O1"), key("V1", "O2"));
        let t = e.place(&CellTable::new(), &a, "S1");
        let t = e.place(&t, &b, "S2");
        let t = e.try_move_or_swap(&t, &a, &b, "S1").unwrap();
        assert_eq!(t.occupant(&a).map(|o| o.id.as_str()), Some("S2"));
        assert_eq!(t.occupant(&b).map(|o| o.id.as_str()), Some("S1"));
        assert_eq!(t.locate("S1"), Some(&b));
        assert_eq!(t.locate("S2"), Some(&a));
        assert_eq!(t.occupied_count(), 2);
    }

    #[test]
    fn test_same_cell_noop() {
        let e = engine();
        let a = key("V1", "O1");
        let t = e.place(&CellTable::new(), &a, "S1");
        assert_eq!(e.move_or_swap(&t, &a, &a, "S1"), t);
    }

    #[test]
    fn test_source_mismatch_aborts() {
        let e = engine();
        let (a, b) = (key("V1", "O1"), key("V1", "O2"));
        let t = e.place(&CellTable::new(), &a, "S1");
        assert!(matches!(
            e.try_move_or_swap(&t, &a, &b, "S2"),
            Err(GridError::SourceOccupantMismatch { .. })
        ));
        assert!(matches!(
            e.try_move_or_swap(&t, &b, &a, "S1"),
            Err(GridError::SourceOccupantMismatch { .. })
        ));
        assert_eq!(e.move_or_swap(&t, &a, &b, "S2"), t);
    }

    #[test]
    fn test_locked_either_side_aborts() {
        let e = engine();
        let (a, b) = (key("V1", "O1"), key("V1", "O2"));
        let t = e.place(&CellTable::new(), &a, "S1");
        let t = e.place(&t, &b, "S2");

        let dest_locked = e.toggle_lock(&t, &b);
        assert_eq!(e.move_or_swap(&dest_locked, &a, &b, "S1"), dest_locked);

        let source_locked = e.toggle_lock(&t, &a);
        assert_eq!(e.move_or_swap(&source_locked, &a, &b, "S1"), source_locked);
    }

    #[test]
    fn test_move_to_unavailable_aborts() {
        let e = engine();
        let a = key("V1", "O2");
        let t = e.place(&CellTable::new(), &a, "S1");
        assert!(matches!(
            e.try_move_or_swap(&t, &a, &key("V2", "O1"), "S1"),
            Err(GridError::Unavailable(_))
        ));
    }

    #[test]
    fn test_move_keeps_other_attributes() {
        let e = engine();
        let (a, b) = (key("V1", "O1"), key("V1", "O2"));
        let t = e.place(&CellTable::new(), &a, "S1");
        let t = e.append_memo(&t, &a, "keep me", "Kim");
        let t = e.set_status(&t, &b, crate::models::StatusTag::Selected);
        let t = e.move_or_swap(&t, &a, &b, "S1");
        assert_eq!(t.memos(&a).len(), 1);
        assert_eq!(t.status(&b), crate::models::StatusTag::Selected);
    }
}
