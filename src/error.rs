//! Error types for grid operations.
//!
//! Every variant is recovered locally. Engine operations come in a
//! fallible `try_*` form returning these errors and a fail-quiet form that
//! logs the rejection and hands back the unchanged table.

use crate::models::CellKey;

/// Result alias for fallible grid operations.
pub type GridResult<T> = Result<T, GridError>;

/// Reasons a grid operation was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// A gesture target does not parse to a cell key.
    #[error("invalid target `{target}`: {reason}")]
    InvalidTarget {
        /// Raw target id.
        target: String,
        /// Why parsing failed.
        reason: String,
    },

    /// Mutation attempted on a locked cell.
    #[error("cell {0} is locked")]
    LockedCell(CellKey),

    /// Memo text was empty after trimming.
    #[error("memo text is empty")]
    EmptyMemo,

    /// The dragged staff is no longer in the source cell.
    #[error("cell {key} no longer holds staff `{staff_id}`")]
    SourceOccupantMismatch {
        /// Source cell.
        key: CellKey,
        /// Staff the gesture started with.
        staff_id: String,
    },

    /// The cell does not accept placement.
    #[error("cell {0} is not available")]
    Unavailable(CellKey),

    /// The cell already has an occupant.
    #[error("cell {0} is already occupied")]
    Occupied(CellKey),

    /// The staff member already occupies another cell.
    #[error("staff `{staff_id}` is already placed at {at}")]
    StaffAlreadyPlaced {
        /// Staff ID.
        staff_id: String,
        /// Cell currently holding the staff member.
        at: CellKey,
    },

    /// The staff ID is not in the catalog.
    #[error("unknown staff `{0}`")]
    UnknownStaff(String),

    /// Source and destination are the same cell.
    #[error("source and destination are both {0}")]
    SameCell(CellKey),
}

impl GridError {
    /// Creates an invalid-target error.
    pub fn invalid_target(target: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidTarget {
            target: target.into(),
            reason: reason.into(),
        }
    }

    /// Whether the rejection needs no diagnostic beyond the lock icon.
    #[inline]
    #[must_use]
    pub fn is_silent(&self) -> bool {
        matches!(self, Self::LockedCell(_) | Self::SameCell(_))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON could not be parsed.
    #[error("invalid config json: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value is outside its accepted range.
    #[error("invalid config value `{field}`: {message}")]
    OutOfRange {
        /// Field name.
        field: &'static str,
        /// Description.
        message: String,
    },
}

/// Tracing subscriber setup errors.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// The filter directive does not parse.
    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    /// A global subscriber is already installed.
    #[error("failed to install subscriber: {0}")]
    Install(#[from] tracing_subscriber::util::TryInitError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn key() -> CellKey {
        CellKey::new("V1", "O1", NaiveDate::from_ymd_opt(2025, 4, 10).unwrap())
    }

    #[test]
    fn test_error_display() {
        let e = GridError::LockedCell(key());
        assert_eq!(e.to_string(), "cell V1|O1|2025-04-10 is locked");

        let e = GridError::SourceOccupantMismatch {
            key: key(),
            staff_id: "S1".into(),
        };
        assert!(e.to_string().contains("S1"));
    }

    #[test]
    fn test_silent_classification() {
        assert!(GridError::LockedCell(key()).is_silent());
        assert!(!GridError::EmptyMemo.is_silent());
        assert!(!GridError::invalid_target("x", "missing parts").is_silent());
    }
}
