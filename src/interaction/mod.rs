//! Interaction dispatcher: pointer gestures to grid operations.
//!
//! Single-threaded and event-driven. Each gesture is handled
//! synchronously; the only deferred work is the click debounce timer,
//! which the host drives by calling `poll` at or after `next_deadline`.
//!
//! # Usage
//!
//! ```
//! use std::time::Instant;
//! use u_staffgrid::config::GridConfig;
//! use u_staffgrid::engine::GridEngine;
//! use u_staffgrid::interaction::{Gesture, GridHost, InteractionDispatcher, Operator};
//! use u_staffgrid::models::{Catalog, CellKey, CellTable, Memo};
//!
//! struct Page;
//! impl GridHost for Page {
//!     fn publish(&mut self, _table: &CellTable) {}
//!     fn open_memo_thread(&mut self, _key: &CellKey, _memos: &[Memo]) {}
//! }
//!
//! let config = GridConfig::default();
//! let engine = GridEngine::new(config.resolver(Catalog::new()));
//! let mut dispatcher = InteractionDispatcher::new(engine, Operator::new("u1", "Kim"), &config);
//! let table = dispatcher.handle(
//!     &mut Page,
//!     &CellTable::new(),
//!     Gesture::DoubleClick { target: "V1|O1|2025-04-10".into() },
//!     Instant::now(),
//! );
//! assert_eq!(table.len(), 1);
//! ```

mod click;
mod colors;
mod dispatcher;
mod gesture;

pub use click::{ClickDisambiguator, ClickState, DEFAULT_CLICK_WINDOW};
pub use colors::CellColors;
pub use dispatcher::{GridHost, InteractionDispatcher, Operator};
pub use gesture::{DragPayload, Gesture, SideMenuAction, SIDE_MENU};
