//! Cell addressing and per-cell state.
//!
//! A cell is addressed solely by `(venue_id, order_id, date)`. State is
//! sparse: a key that was never mutated reads as [`CellState::default`].
//!
//! # Invariants
//! - `status` is single-valued; setting replaces.
//! - `memos` only grows; storage order is append order.
//! - Availability is derived, never stored here.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::StaffRef;
use crate::error::GridError;

/// Separator in the textual form of a cell key.
pub const KEY_SEPARATOR: char = '|';

/// Composite address of a grid cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellKey {
    /// Venue ID.
    pub venue_id: String,
    /// Demand slot ID within the venue.
    pub order_id: String,
    /// Calendar date.
    pub date: NaiveDate,
}

impl CellKey {
    /// Creates a cell key.
    pub fn new(venue_id: impl Into<String>, order_id: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            venue_id: venue_id.into(),
            order_id: order_id.into(),
            date,
        }
    }

    /// Textual id used as a gesture target (`venue|order|YYYY-MM-DD`).
    pub fn cell_id(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CellKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{sep}{}{sep}{}",
            self.venue_id,
            self.order_id,
            self.date.format("%Y-%m-%d"),
            sep = KEY_SEPARATOR
        )
    }
}

impl FromStr for CellKey {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(KEY_SEPARATOR).collect();
        let [venue, order, date] = parts.as_slice() else {
            return Err(GridError::invalid_target(
                s,
                format!("expected 3 parts, found {}", parts.len()),
            ));
        };
        if venue.trim().is_empty() || order.trim().is_empty() {
            return Err(GridError::invalid_target(s, "empty venue or order id"));
        }
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|e| GridError::invalid_target(s, format!("bad date: {e}")))?;
        Ok(CellKey::new(*venue, *order, date))
    }
}

/// Non-staffing planning annotation on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StatusTag {
    /// No annotation.
    #[default]
    None,
    /// Planned staff will be absent.
    Absent,
    /// Team-manager coverage.
    TM,
    /// Selected for follow-up.
    Selected,
}

impl StatusTag {
    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            StatusTag::None => "",
            StatusTag::Absent => "Absent",
            StatusTag::TM => "TM",
            StatusTag::Selected => "Selected",
        }
    }
}

/// A timestamped, attributed note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memo {
    /// Unique memo ID.
    pub id: Uuid,
    /// Note body (as entered, untrimmed).
    pub text: String,
    /// Author display name.
    pub author_name: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

impl Memo {
    /// Creates a memo with a fresh ID.
    pub fn new(text: impl Into<String>, author_name: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            author_name: author_name.into(),
            created_at,
        }
    }
}

/// Mutable attributes of one cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellState {
    /// Lock flag; gates every mutation except toggling itself.
    pub locked: bool,
    /// Planning tag.
    pub status: StatusTag,
    /// Assigned staff, if any.
    pub occupant: Option<StaffRef>,
    /// Memo thread in append order.
    pub memos: Vec<Memo>,
}

impl CellState {
    /// Whether the state equals the implicit default.
    pub fn is_pristine(&self) -> bool {
        *self == CellState::default()
    }

    /// Whether a staff member is assigned.
    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    /// Memos ordered newest first.
    pub fn memos_newest_first(&self) -> Vec<&Memo> {
        let mut memos: Vec<&Memo> = self.memos.iter().collect();
        memos.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        memos
    }
}
