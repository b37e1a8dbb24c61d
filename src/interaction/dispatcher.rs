//! Gesture → operation dispatch.
//!
//! # Mapping
//!
//! | Gesture | Effect |
//! |---------|--------|
//! | Click | debounced; opens the memo thread if no double click follows |
//! | DoubleClick | cancels pending click, toggles lock (even when locked) |
//! | RightClick | opens the side menu |
//! | Drop (pool staff) | `place` |
//! | Drop (cell staff) | `move_or_swap` |
//! | Drop (status token) | `set_status` |
//! | RemoveStatus | `clear_status` |
//! | SubmitMemo | `append_memo` as the current operator |
//! | MenuSelect / PickColor | edit history / cosmetic color side-table |
//!
//! Nothing propagates to the host as an error: a rejected gesture returns
//! the input table and publishes nothing.

use std::str::FromStr;
use std::time::Instant;

use tracing::{debug, warn};

use super::click::ClickDisambiguator;
use super::colors::CellColors;
use super::gesture::{DragPayload, Gesture, SideMenuAction, SIDE_MENU};
use crate::config::GridConfig;
use crate::engine::GridEngine;
use crate::error::{GridError, GridResult};
use crate::models::{CellKey, CellTable, Memo};

/// The signed-in user attributed with memos and changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operator {
    /// User ID.
    pub id: String,
    /// Name written onto memos.
    pub display_name: String,
}

impl Operator {
    /// Creates an operator identity.
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
        }
    }
}

/// Callbacks into the hosting page.
pub trait GridHost {
    /// Receives the next whole-table snapshot after a successful change.
    fn publish(&mut self, table: &CellTable);

    /// Opens the memo thread of a cell.
    fn open_memo_thread(&mut self, key: &CellKey, memos: &[Memo]);

    /// Opens the right-click side menu.
    fn open_side_menu(&mut self, _key: &CellKey, _actions: &[SideMenuAction]) {}

    /// Opens the read-only edit history of a cell.
    fn open_edit_history(&mut self, _key: &CellKey) {}
}

/// Turns gestures into grid operations.
#[derive(Debug)]
pub struct InteractionDispatcher {
    engine: GridEngine,
    operator: Operator,
    clicks: ClickDisambiguator,
    colors: CellColors,
}

impl InteractionDispatcher {
    /// Creates a dispatcher.
    pub fn new(engine: GridEngine, operator: Operator, config: &GridConfig) -> Self {
        Self {
            engine,
            operator,
            clicks: ClickDisambiguator::new(config.click_window()),
            colors: CellColors::new().with_default(config.default_cell_color.clone()),
        }
    }

    /// Engine in use.
    pub fn engine(&self) -> &GridEngine {
        &self.engine
    }

    /// Current operator.
    pub fn operator(&self) -> &Operator {
        &self.operator
    }

    /// Color side-table.
    pub fn colors(&self) -> &CellColors {
        &self.colors
    }

    /// Click debounce state.
    pub fn clicks(&self) -> &ClickDisambiguator {
        &self.clicks
    }

    /// When the host should next call [`poll`](Self::poll).
    pub fn next_deadline(&self) -> Option<Instant> {
        self.clicks.next_deadline()
    }

    /// Handles one gesture and returns the next table.
    ///
    /// `host.publish` is called only when the table changed.
    pub fn handle<H: GridHost>(
        &mut self,
        host: &mut H,
        table: &CellTable,
        gesture: Gesture,
        now: Instant,
    ) -> CellTable {
        let key = match CellKey::from_str(gesture.target()) {
            Ok(key) => key,
            Err(err) => {
                warn!(gesture = gesture.kind(), %err, "gesture ignored");
                return table.clone();
            }
        };

        match gesture {
            Gesture::Click { .. } => {
                if table.is_locked(&key) {
                    debug!(cell = %key, "click on locked cell ignored");
                } else {
                    self.clicks.on_click(key, now);
                }
                table.clone()
            }
            Gesture::DoubleClick { .. } => {
                self.clicks.on_double_click();
                let next = self.engine.toggle_lock(table, &key);
                debug!(operator = %self.operator.id, cell = %key, locked = next.is_locked(&key), "lock changed");
                host.publish(&next);
                next
            }
            Gesture::RightClick { .. } => {
                host.open_side_menu(&key, &SIDE_MENU);
                table.clone()
            }
            Gesture::Drop { payload, .. } => {
                let result = self.drop_payload(table, &key, payload);
                self.commit(host, table, "drop", result)
            }
            Gesture::RemoveStatus { .. } => {
                let result = self.engine.try_clear_status(table, &key);
                self.commit(host, table, "remove_status", result)
            }
            Gesture::SubmitMemo { text, .. } => {
                let result =
                    self.engine
                        .try_append_memo(table, &key, &text, &self.operator.display_name);
                self.commit(host, table, "submit_memo", result)
            }
            Gesture::MenuSelect { action, .. } => {
                match action {
                    SideMenuAction::EditHistory => host.open_edit_history(&key),
                    SideMenuAction::CellColor => {}
                }
                table.clone()
            }
            Gesture::PickColor { color, .. } => {
                self.colors.set(key.cell_id(), color);
                table.clone()
            }
        }
    }

    /// Fires the click timer if due, opening the memo thread for a
    /// confirmed single click.
    pub fn poll<H: GridHost>(&mut self, host: &mut H, table: &CellTable, now: Instant) {
        if let Some(key) = self.clicks.poll(now) {
            host.open_memo_thread(&key, table.memos(&key));
        }
    }

    /// Cancels pending timers so nothing fires against a stale table.
    pub fn teardown(&mut self) {
        if self.clicks.cancel() {
            debug!("pending click timer cancelled on teardown");
        }
    }

    fn drop_payload(
        &self,
        table: &CellTable,
        target: &CellKey,
        payload: DragPayload,
    ) -> GridResult<CellTable> {
        match payload {
            DragPayload::PoolStaff { staff_id } => self.engine.try_place(table, target, &staff_id),
            DragPayload::CellStaff { source, staff_id } => {
                let source = CellKey::from_str(&source)?;
                self.engine
                    .try_move_or_swap(table, &source, target, &staff_id)
            }
            DragPayload::StatusToken(tag) => self.engine.try_set_status(table, target, tag),
        }
    }

    fn commit<H: GridHost>(
        &self,
        host: &mut H,
        table: &CellTable,
        op: &'static str,
        result: GridResult<CellTable>,
    ) -> CellTable {
        match result {
            Ok(next) => {
                debug!(operator = %self.operator.id, op, "change committed");
                host.publish(&next);
                next
            }
            Err(err) => {
                log_rejection(op, &err);
                table.clone()
            }
        }
    }
}

impl Drop for InteractionDispatcher {
    fn drop(&mut self) {
        self.teardown();
    }
}

fn log_rejection(op: &'static str, err: &GridError) {
    if err.is_silent() {
        debug!(op, %err, "gesture rejected");
    } else {
        warn!(op, %err, "gesture rejected");
    }
}
