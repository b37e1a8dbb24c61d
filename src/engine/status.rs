//! Status annotation.

use tracing::debug;

use super::GridEngine;
use crate::error::GridResult;
use crate::models::{CellKey, CellTable, StatusTag};

impl GridEngine {
    /// Replaces the cell's status tag. Requires the cell to be unlocked.
    ///
    /// Setting `StatusTag::None` is equivalent to clearing.
    pub fn try_set_status(
        &self,
        table: &CellTable,
        key: &CellKey,
        tag: StatusTag,
    ) -> GridResult<CellTable> {
        Self::ensure_unlocked(table, key)?;
        let mut next = table.clone();
        next.update(key, |s| s.status = tag);
        debug!(cell = %key, status = tag.label(), "status set");
        Ok(next)
    }

    /// Fail-quiet form of [`try_set_status`](Self::try_set_status).
    pub fn set_status(&self, table: &CellTable, key: &CellKey, tag: StatusTag) -> CellTable {
        Self::settle("set_status", table, self.try_set_status(table, key, tag))
    }

    /// Removes the cell's status tag. Requires the cell to be unlocked.
    pub fn try_clear_status(&self, table: &CellTable, key: &CellKey) -> GridResult<CellTable> {
        self.try_set_status(table, key, StatusTag::None)
    }

    /// Fail-quiet form of [`try_clear_status`](Self::try_clear_status).
    pub fn clear_status(&self, table: &CellTable, key: &CellKey) -> CellTable {
        Self::settle("clear_status", table, self.try_clear_status(table, key))
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use crate::error::GridError;
    use crate::models::{CellTable, StatusTag};

    #[test]
    fn test_status_replaces() {
        let e = engine();
        let k = key("V1", "O1");
        let t = e.set_status(&CellTable::new(), &k, StatusTag::Absent);
        let t = e.set_status(&t, &k, StatusTag::Selected);
        assert_eq!(t.status(&k), StatusTag::Selected);
    }

    #[test]
    fn test_clear_status() {
        let e = engine();
        let k = key("V1", "O1");
        let t = e.set_status(&CellTable::new(), &k, StatusTag::TM);
        let t = e.clear_status(&t, &k);
        assert_eq!(t.status(&k), StatusTag::None);
        assert!(t.is_empty());
    }

    #[test]
    fn test_status_rejected_when_locked() {
        let e = engine();
        let k = key("V1", "O1");
        let locked = e.toggle_lock(&CellTable::new(), &k);

        let err = e.try_set_status(&locked, &k, StatusTag::Absent).unwrap_err();
        assert_eq!(err, GridError::LockedCell(k.clone()));
        assert_eq!(e.set_status(&locked, &k, StatusTag::Absent), locked);
        assert_eq!(e.clear_status(&locked, &k).status(&k), StatusTag::None);
    }

    #[test]
    fn test_status_independent_of_availability() {
        let e = engine();
        let k = key("V2", "O1"); // closed on Thursdays
        let t = e.set_status(&CellTable::new(), &k, StatusTag::Absent);
        assert_eq!(t.status(&k), StatusTag::Absent);
    }
}
