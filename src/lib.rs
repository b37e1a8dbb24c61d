//! Staffing assignment grid for the U-Engine ecosystem.
//!
//! An in-memory state engine for a matrix of (venue, demand slot, date)
//! cells onto which staff are placed, with per-cell locks, status tags,
//! append-only memo threads, atomic two-cell swaps and click /
//! double-click disambiguation.
//!
//! # Modules
//!
//! - **`models`**: Domain types (`Venue`, `OrderSlot`, `Staff`, `CellKey`,
//!   `CellState`, `CellTable`, `VenueCalendar`)
//! - **`availability`**: Injectable policies deciding which cells accept staff
//! - **`engine`**: Lock, status, memo, place and move/swap operations
//! - **`interaction`**: Gesture dispatch and the click debounce state machine
//! - **`view`**: Row/column materialization and fill metrics for hosts
//! - **`validation`**: Catalog and table integrity checks
//!
//! # State Model
//!
//! The whole grid is one persistent value (`CellTable`). Every operation
//! reads an immutable snapshot and returns the next value; the host keeps
//! the single current reference and persists nothing.

pub mod availability;
pub mod config;
pub mod engine;
pub mod error;
pub mod interaction;
pub mod models;
pub mod telemetry;
pub mod validation;
pub mod view;

pub use config::GridConfig;
pub use engine::GridEngine;
pub use error::{ConfigError, GridError, GridResult, TelemetryError};
pub use interaction::{Gesture, GridHost, InteractionDispatcher, Operator};
pub use models::{CellKey, CellState, CellTable, StatusTag};
