//! Venue and demand slot models.
//!
//! A venue is a location an agency staffs. Each venue declares an ordered
//! list of demand slots ("orders"), each requiring one staff member of a
//! given role category per operating date.

use serde::{Deserialize, Serialize};

use super::VenueCalendar;

/// Role category a slot demands and a staff member fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RoleCategory {
    /// Sales closer.
    Closer,
    /// Floor staff.
    Girl,
}

impl RoleCategory {
    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            RoleCategory::Closer => "Closer",
            RoleCategory::Girl => "Girl",
        }
    }
}

/// One demand unit within a venue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSlot {
    /// Slot identifier (unique within its venue).
    pub id: String,
    /// Role category this slot requires.
    pub role_category: RoleCategory,
}

impl OrderSlot {
    /// Creates a new slot.
    pub fn new(id: impl Into<String>, role_category: RoleCategory) -> Self {
        Self {
            id: id.into(),
            role_category,
        }
    }

    /// Creates a closer slot.
    pub fn closer(id: impl Into<String>) -> Self {
        Self::new(id, RoleCategory::Closer)
    }

    /// Creates a floor-staff slot.
    pub fn girl(id: impl Into<String>) -> Self {
        Self::new(id, RoleCategory::Girl)
    }
}

/// An agency-assigned location with staffing demand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Venue {
    /// Unique venue identifier.
    pub id: String,
    /// Agency the venue belongs to.
    pub agency_name: String,
    /// Human-readable location.
    pub location_label: String,
    /// Staff travel overnight to this venue.
    pub has_business_trip: bool,
    /// Venue is outdoors (weather-dependent).
    pub is_outdoor_venue: bool,
    /// Demand slots in display order.
    pub demand_slots: Vec<OrderSlot>,
    /// Base operating calendar.
    pub calendar: VenueCalendar,
}

impl Venue {
    /// Creates a venue open every day with no slots.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            agency_name: String::new(),
            location_label: String::new(),
            has_business_trip: false,
            is_outdoor_venue: false,
            demand_slots: Vec::new(),
            calendar: VenueCalendar::default(),
        }
    }

    /// Sets the agency name.
    pub fn with_agency(mut self, agency_name: impl Into<String>) -> Self {
        self.agency_name = agency_name.into();
        self
    }

    /// Sets the location label.
    pub fn with_location(mut self, location_label: impl Into<String>) -> Self {
        self.location_label = location_label.into();
        self
    }

    /// Marks the venue as a business-trip venue.
    pub fn with_business_trip(mut self, has_business_trip: bool) -> Self {
        self.has_business_trip = has_business_trip;
        self
    }

    /// Marks the venue as outdoors.
    pub fn with_outdoor(mut self, is_outdoor_venue: bool) -> Self {
        self.is_outdoor_venue = is_outdoor_venue;
        self
    }

    /// Appends a demand slot.
    pub fn with_slot(mut self, slot: OrderSlot) -> Self {
        self.demand_slots.push(slot);
        self
    }

    /// Sets the operating calendar.
    pub fn with_calendar(mut self, calendar: VenueCalendar) -> Self {
        self.calendar = calendar;
        self
    }

    /// Finds a slot by ID.
    pub fn slot(&self, order_id: &str) -> Option<&OrderSlot> {
        self.demand_slots.iter().find(|s| s.id == order_id)
    }

    /// Number of slots requiring the given role.
    pub fn demand_for(&self, role: RoleCategory) -> usize {
        self.demand_slots
            .iter()
            .filter(|s| s.role_category == role)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_venue_builder() {
        let v = Venue::new("V1")
            .with_agency("Bright Events")
            .with_location("Hall A")
            .with_business_trip(true)
            .with_slot(OrderSlot::closer("O1"))
            .with_slot(OrderSlot::girl("O2"))
            .with_slot(OrderSlot::girl("O3"))
            .with_calendar(VenueCalendar::weekends_only());

        assert_eq!(v.id, "V1");
        assert_eq!(v.agency_name, "Bright Events");
        assert!(v.has_business_trip);
        assert!(!v.is_outdoor_venue);
        assert_eq!(v.demand_slots.len(), 3);
        assert_eq!(v.demand_for(RoleCategory::Girl), 2);
        assert_eq!(v.demand_for(RoleCategory::Closer), 1);
    }

    #[test]
    fn test_slot_lookup() {
        let v = Venue::new("V1").with_slot(OrderSlot::closer("O1"));
        assert_eq!(v.slot("O1").map(|s| s.role_category), Some(RoleCategory::Closer));
        assert!(v.slot("O9").is_none());
    }
}
