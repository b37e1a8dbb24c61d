//! Raw pointer gestures delivered by the host toolkit.
//!
//! Targets arrive as textual cell ids (`venue|order|YYYY-MM-DD`) and are
//! parsed by the dispatcher; a target that fails to parse is ignored.

use serde::{Deserialize, Serialize};

use crate::models::StatusTag;

/// What is being dragged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragPayload {
    /// A staff card from the unassigned pool.
    PoolStaff {
        /// Staff ID.
        staff_id: String,
    },
    /// A staff card already sitting in a cell.
    CellStaff {
        /// Source cell id.
        source: String,
        /// Staff ID.
        staff_id: String,
    },
    /// A status token from the palette.
    StatusToken(StatusTag),
}

/// Entries of the right-click side menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SideMenuAction {
    /// Read-only edit history of the cell.
    EditHistory,
    /// Cosmetic color override.
    CellColor,
}

/// Side menu offered on right-click.
pub const SIDE_MENU: [SideMenuAction; 2] = [SideMenuAction::EditHistory, SideMenuAction::CellColor];

/// A discrete UI event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gesture {
    /// Primary-button click.
    Click {
        /// Cell id.
        target: String,
    },
    /// Toolkit double-click event (follows the second click).
    DoubleClick {
        /// Cell id.
        target: String,
    },
    /// Secondary-button click.
    RightClick {
        /// Cell id.
        target: String,
    },
    /// Drag released over a cell.
    Drop {
        /// Dragged item.
        payload: DragPayload,
        /// Cell id under the pointer.
        target: String,
    },
    /// Per-cell "remove status" affordance.
    RemoveStatus {
        /// Cell id.
        target: String,
    },
    /// Memo composer submitted.
    SubmitMemo {
        /// Cell id.
        target: String,
        /// Entered text.
        text: String,
    },
    /// Side menu entry chosen.
    MenuSelect {
        /// Cell id.
        target: String,
        /// Chosen entry.
        action: SideMenuAction,
    },
    /// Color picked for a cell (`None` clears the override).
    PickColor {
        /// Cell id.
        target: String,
        /// CSS-style color value.
        color: Option<String>,
    },
}

impl Gesture {
    /// Cell id the gesture resolves against.
    pub fn target(&self) -> &str {
        match self {
            Gesture::Click { target }
            | Gesture::DoubleClick { target }
            | Gesture::RightClick { target }
            | Gesture::Drop { target, .. }
            | Gesture::RemoveStatus { target }
            | Gesture::SubmitMemo { target, .. }
            | Gesture::MenuSelect { target, .. }
            | Gesture::PickColor { target, .. } => target,
        }
    }

    /// Short name for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Gesture::Click { .. } => "click",
            Gesture::DoubleClick { .. } => "double_click",
            Gesture::RightClick { .. } => "right_click",
            Gesture::Drop { .. } => "drop",
            Gesture::RemoveStatus { .. } => "remove_status",
            Gesture::SubmitMemo { .. } => "submit_memo",
            Gesture::MenuSelect { .. } => "menu_select",
            Gesture::PickColor { .. } => "pick_color",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_accessor() {
        let g = Gesture::Drop {
            payload: DragPayload::StatusToken(StatusTag::TM),
            target: "V1|O1|2025-04-10".into(),
        };
        assert_eq!(g.target(), "V1|O1|2025-04-10");
        assert_eq!(g.kind(), "drop");
    }

    #[test]
    fn test_gesture_json_shape() {
        let g: Gesture = serde_json::from_str(
            r#"{"Drop":{"payload":{"PoolStaff":{"staff_id":"S1"}},"target":"V1|O1|2025-04-10"}}"#,
        )
        .unwrap();
        assert_eq!(
            g,
            Gesture::Drop {
                payload: DragPayload::PoolStaff { staff_id: "S1".into() },
                target: "V1|O1|2025-04-10".into(),
            }
        );
    }
}
