//! Memo threads.
//!
//! Append-only: there is no edit or delete. Memos are blocked on locked
//! cells like every other mutation.

use chrono::{DateTime, Utc};
use tracing::debug;

use super::GridEngine;
use crate::error::{GridError, GridResult};
use crate::models::{CellKey, CellTable, Memo};

impl GridEngine {
    /// Appends a memo stamped with `created_at`.
    ///
    /// Rejects text that is empty after trimming. The stored text is the
    /// text as given.
    pub fn try_append_memo_at(
        &self,
        table: &CellTable,
        key: &CellKey,
        text: &str,
        author: &str,
        created_at: DateTime<Utc>,
    ) -> GridResult<CellTable> {
        Self::ensure_unlocked(table, key)?;
        if text.trim().is_empty() {
            return Err(GridError::EmptyMemo);
        }
        let memo = Memo::new(text, author, created_at);
        let mut next = table.clone();
        next.update(key, |s| s.memos.push(memo));
        debug!(cell = %key, author, thread_len = next.memos(key).len(), "memo appended");
        Ok(next)
    }

    /// Appends a memo stamped with the current time.
    pub fn try_append_memo(
        &self,
        table: &CellTable,
        key: &CellKey,
        text: &str,
        author: &str,
    ) -> GridResult<CellTable> {
        self.try_append_memo_at(table, key, text, author, Utc::now())
    }

    /// Fail-quiet form of [`try_append_memo`](Self::try_append_memo).
    pub fn append_memo(&self, table: &CellTable, key: &CellKey, text: &str, author: &str) -> CellTable {
        Self::settle("append_memo", table, self.try_append_memo(table, key, text, author))
    }

    /// Fail-quiet form of [`try_append_memo_at`](Self::try_append_memo_at).
    pub fn append_memo_at(
        &self,
        table: &CellTable,
        key: &CellKey,
        text: &str,
        author: &str,
        created_at: DateTime<Utc>,
    ) -> CellTable {
        Self::settle(
            "append_memo",
            table,
            self.try_append_memo_at(table, key, text, author, created_at),
        )
    }
}
