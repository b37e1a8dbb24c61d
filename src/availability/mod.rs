//! Availability policies and resolver.
//!
//! Decides whether a cell accepts placement. A resolver composes any
//! number of policies over the catalog; a cell is available only when
//! every policy permits it.
//!
//! # Usage
//!
//! ```
//! use u_staffgrid::availability::{rules, AvailabilityResolver};
//! use u_staffgrid::models::Catalog;
//!
//! let resolver = AvailabilityResolver::new(Catalog::new())
//!     .with_policy(rules::CalendarRule)
//!     .with_policy(rules::BlackoutRule::new(0.3));
//! ```
//!
//! # Determinism
//! Policies must be pure: identical arguments yield identical answers,
//! with no hidden mutable state.

mod resolver;
pub mod rules;

pub use resolver::AvailabilityResolver;

use crate::models::{OrderSlot, Venue};
use chrono::NaiveDate;
use std::fmt::Debug;

/// A rule deciding whether a (venue, slot, date) triple may be staffed.
pub trait AvailabilityPolicy: Send + Sync + Debug {
    /// Policy name (e.g., "CALENDAR", "BLACKOUT").
    fn name(&self) -> &'static str;

    /// Whether the slot may be staffed on `date`.
    fn permits(&self, venue: &Venue, slot: &OrderSlot, date: NaiveDate) -> bool;

    /// Policy description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
