//! Staffing grid domain models.
//!
//! Provides the reference data (venues, demand slots, staff) and the
//! cell state the grid engine operates on.
//!
//! # Grid Shape
//!
//! | Axis | Type | Source |
//! |------|------|--------|
//! | Row group | `Venue` | Catalog |
//! | Row | `OrderSlot` | `Venue::demand_slots` |
//! | Column | `DateCell` | Date range filter |
//! | Cell | `CellKey` → `CellState` | `CellTable` |

mod calendar;
mod catalog;
mod cell;
mod staff;
mod table;
mod venue;

pub use calendar::{DateCell, VenueCalendar};
pub use catalog::Catalog;
pub use cell::{CellKey, CellState, Memo, StatusTag, KEY_SEPARATOR};
pub use staff::{GenderFlag, Staff, StaffRef};
pub use table::CellTable;
pub use venue::{OrderSlot, RoleCategory, Venue};
