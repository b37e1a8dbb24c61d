//! Built-in availability policies.
//!
//! - **Calendar**: the venue's own operating days.
//! - **Blackout**: a deterministic hash that withholds a fixed share of
//!   otherwise-valid slots, standing in for operational constraints.
//! - **AllowAll**: permits everything.

use chrono::NaiveDate;

use super::AvailabilityPolicy;
use crate::models::{OrderSlot, Venue};

/// Buckets used to turn a hash into a ratio.
const BLACKOUT_BUCKETS: u64 = 10_000;

/// Permits a slot only on dates the venue's calendar marks open.
#[derive(Debug, Clone, Copy)]
pub struct CalendarRule;

impl AvailabilityPolicy for CalendarRule {
    fn name(&self) -> &'static str {
        "CALENDAR"
    }

    fn permits(&self, venue: &Venue, _slot: &OrderSlot, date: NaiveDate) -> bool {
        venue.calendar.is_open(date)
    }

    fn description(&self) -> &'static str {
        "Venue operating calendar"
    }
}

/// Withholds roughly `ratio` of slots by hashing the cell address.
///
/// The hash is `blake3(salt | venue | order | date)`, so the same
/// address always lands in the same bucket across runs and platforms.
/// Changing `salt` reshuffles which slots are withheld.
#[derive(Debug, Clone)]
pub struct BlackoutRule {
    ratio: f64,
    salt: String,
}

impl BlackoutRule {
    /// Creates a rule withholding `ratio` (clamped to 0.0..=1.0) of slots.
    pub fn new(ratio: f64) -> Self {
        Self {
            ratio: ratio.clamp(0.0, 1.0),
            salt: String::new(),
        }
    }

    /// Sets the hash salt.
    pub fn with_salt(mut self, salt: impl Into<String>) -> Self {
        self.salt = salt.into();
        self
    }

    /// Configured ratio.
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    fn bucket(&self, venue_id: &str, order_id: &str, date: NaiveDate) -> u64 {
        let mut hasher = blake3::Hasher::new();
        for part in [self.salt.as_str(), venue_id, order_id] {
            hasher.update(part.as_bytes());
            hasher.update(b"|");
        }
        hasher.update(date.format("%Y-%m-%d").to_string().as_bytes());
        let digest = hasher.finalize();
        let mut head = [0u8; 8];
        head.copy_from_slice(&digest.as_bytes()[..8]);
        u64::from_le_bytes(head) % BLACKOUT_BUCKETS
    }
}

impl AvailabilityPolicy for BlackoutRule {
    fn name(&self) -> &'static str {
        "BLACKOUT"
    }

    fn permits(&self, venue: &Venue, slot: &OrderSlot, date: NaiveDate) -> bool {
        let threshold = (self.ratio * BLACKOUT_BUCKETS as f64).round() as u64;
        self.bucket(&venue.id, &slot.id, date) >= threshold
    }

    fn description(&self) -> &'static str {
        "Deterministic operational blackout"
    }
}

/// Permits every slot.
#[derive(Debug, Clone, Copy)]
pub struct AllowAll;

impl AvailabilityPolicy for AllowAll {
    fn name(&self) -> &'static str {
        "ALLOW_ALL"
    }

    fn permits(&self, _venue: &Venue, _slot: &OrderSlot, _date: NaiveDate) -> bool {
        true
    }
}
