//! Availability resolver: catalog lookup plus policy composition.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::trace;

use super::AvailabilityPolicy;
use crate::models::{Catalog, CellKey};

/// Resolves cell availability against the catalog.
///
/// A cell is available iff its venue and slot exist in the catalog and
/// every registered policy permits it. With no policies, every known
/// slot is available on every date.
#[derive(Clone)]
pub struct AvailabilityResolver {
    catalog: Arc<Catalog>,
    policies: Vec<Arc<dyn AvailabilityPolicy>>,
}

impl AvailabilityResolver {
    /// Creates a resolver with no policies.
    pub fn new(catalog: impl Into<Arc<Catalog>>) -> Self {
        Self {
            catalog: catalog.into(),
            policies: Vec::new(),
        }
    }

    /// Adds a policy.
    pub fn with_policy<P: AvailabilityPolicy + 'static>(mut self, policy: P) -> Self {
        self.policies.push(Arc::new(policy));
        self
    }

    /// Adds a shared policy.
    pub fn with_shared_policy(mut self, policy: Arc<dyn AvailabilityPolicy>) -> Self {
        self.policies.push(policy);
        self
    }

    /// Catalog the resolver reads from.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Shared handle to the catalog.
    pub fn catalog_arc(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    /// Names of registered policies, in evaluation order.
    pub fn policy_names(&self) -> Vec<&'static str> {
        self.policies.iter().map(|p| p.name()).collect()
    }

    /// Whether `(venue_id, order_id, date)` accepts placement.
    pub fn available(&self, venue_id: &str, order_id: &str, date: NaiveDate) -> bool {
        let Some((venue, slot)) = self.catalog.slot(venue_id, order_id) else {
            trace!(venue = venue_id, order = order_id, "unknown slot");
            return false;
        };
        match self.policies.iter().find(|p| !p.permits(venue, slot, date)) {
            Some(policy) => {
                trace!(venue = venue_id, order = order_id, %date, rule = policy.name(), "cell refused");
                false
            }
            None => true,
        }
    }

    /// Whether a cell accepts placement.
    pub fn is_available(&self, key: &CellKey) -> bool {
        self.available(&key.venue_id, &key.order_id, key.date)
    }
}

impl std::fmt::Debug for AvailabilityResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AvailabilityResolver")
            .field("venues", &self.catalog.venues.len())
            .field("policies", &self.policy_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::availability::rules::{AllowAll, BlackoutRule, CalendarRule};
    use crate::models::{OrderSlot, Venue, VenueCalendar};

    fn catalog() -> Catalog {
        Catalog::new()
            .with_venue(
                Venue::new("V1")
                    .with_calendar(VenueCalendar::weekdays_only())
                    .with_slot(OrderSlot::closer("O1")),
            )
            .with_venue(
                Venue::new("V2")
                    .with_calendar(VenueCalendar::weekends_only())
                    .with_slot(OrderSlot::girl("O1")),
            )
    }

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, d).unwrap()
    }

    #[test]
    fn test_unknown_venue_or_slot_unavailable() {
        let r = AvailabilityResolver::new(catalog()).with_policy(AllowAll);
        assert!(r.available("V1", "O1", date(10)));
        assert!(!r.available("V9", "O1", date(10)));
        assert!(!r.available("V1", "O9", date(10)));
    }

    #[test]
    fn test_calendar_policy_applies() {
        let r = AvailabilityResolver::new(catalog()).with_policy(CalendarRule);
        assert!(r.available("V1", "O1", date(10))); // Thu
        assert!(!r.available("V1", "O1", date(12))); // Sat
        assert!(r.available("V2", "O1", date(12)));
    }

    #[test]
    fn test_all_policies_must_permit() {
        let r = AvailabilityResolver::new(catalog())
            .with_policy(CalendarRule)
            .with_policy(BlackoutRule::new(1.0));
        assert!(!r.available("V1", "O1", date(10)));
        assert_eq!(r.policy_names(), vec!["CALENDAR", "BLACKOUT"]);
    }

    #[test]
    fn test_repeatable() {
        let r = AvailabilityResolver::new(catalog())
            .with_policy(CalendarRule)
            .with_policy(BlackoutRule::new(0.3));
        let first = r.available("V2", "O1", date(12));
        assert_eq!(r.available("V2", "O1", date(12)), first);
        assert_eq!(r.is_available(&CellKey::new("V2", "O1", date(12))), first);
    }

    #[test]
    fn test_shared_policy_across_resolvers() {
        let blackout: Arc<dyn AvailabilityPolicy> = Arc::new(BlackoutRule::new(1.0));
        let blackout_only = AvailabilityResolver::new(catalog()).with_shared_policy(Arc::clone(&blackout));
        let all = AvailabilityResolver::new(catalog())
            .with_policy(AllowAll)
            .with_shared_policy(Arc::clone(&blackout));

        assert_eq!(Arc::strong_count(&blackout), 3);
        assert_eq!(all.policy_names(), vec!["ALLOW_ALL", "BLACKOUT"]);
        assert!(!blackout_only.available("V1", "O1", date(10)));
        assert!(!all.available("V2", "O1", date(12)));
    }
}
