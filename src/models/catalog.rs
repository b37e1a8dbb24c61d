//! Read-only reference data: venues and staff.

use serde::{Deserialize, Serialize};

use super::{OrderSlot, RoleCategory, Staff, Venue};

/// Venue and staff lists supplied by upstream roster/sales modules.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    /// Venues in display order.
    pub venues: Vec<Venue>,
    /// Staff roster.
    pub staff: Vec<Staff>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a venue.
    pub fn with_venue(mut self, venue: Venue) -> Self {
        self.venues.push(venue);
        self
    }

    /// Adds a staff record.
    pub fn with_staff(mut self, staff: Staff) -> Self {
        self.staff.push(staff);
        self
    }

    /// Finds a venue by ID.
    pub fn venue(&self, venue_id: &str) -> Option<&Venue> {
        self.venues.iter().find(|v| v.id == venue_id)
    }

    /// Finds a venue and one of its slots.
    pub fn slot(&self, venue_id: &str, order_id: &str) -> Option<(&Venue, &OrderSlot)> {
        let venue = self.venue(venue_id)?;
        venue.slot(order_id).map(|slot| (venue, slot))
    }

    /// Finds a staff record by ID.
    pub fn staff(&self, staff_id: &str) -> Option<&Staff> {
        self.staff.iter().find(|s| s.id == staff_id)
    }

    /// Staff working the given role.
    pub fn staff_by_role(&self, role: RoleCategory) -> Vec<&Staff> {
        self.staff
            .iter()
            .filter(|s| s.role_category == role)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_lookups() {
        let catalog = Catalog::new()
            .with_venue(Venue::new("V1").with_slot(OrderSlot::closer("O1")))
            .with_staff(Staff::new("S1", "Aiko", RoleCategory::Girl))
            .with_staff(Staff::new("S2", "Ben", RoleCategory::Closer));

        assert!(catalog.venue("V1").is_some());
        assert!(catalog.venue("V9").is_none());
        assert!(catalog.slot("V1", "O1").is_some());
        assert!(catalog.slot("V1", "O2").is_none());
        assert_eq!(catalog.staff("S2").map(|s| s.display_name.as_str()), Some("Ben"));
        assert_eq!(catalog.staff_by_role(RoleCategory::Girl).len(), 1);
    }
}
