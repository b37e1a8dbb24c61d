//! Staff model.
//!
//! Staff are the people placed into grid cells. The grid stores a
//! denormalized [`StaffRef`] per occupied cell; identity is the staff ID.

use serde::{Deserialize, Serialize};

use super::RoleCategory;

/// Gender flag carried on roster records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GenderFlag {
    /// Male.
    Male,
    /// Female.
    Female,
    /// Not recorded.
    #[default]
    Unspecified,
}

/// A roster record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Staff {
    /// Unique staff identifier.
    pub id: String,
    /// Name shown in the grid.
    pub display_name: String,
    /// Role the staff member works as.
    pub role_category: RoleCategory,
    /// Gender flag.
    pub gender_flag: GenderFlag,
}

impl Staff {
    /// Creates a staff record.
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        role_category: RoleCategory,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            role_category,
            gender_flag: GenderFlag::Unspecified,
        }
    }

    /// Sets the gender flag.
    pub fn with_gender(mut self, gender_flag: GenderFlag) -> Self {
        self.gender_flag = gender_flag;
        self
    }

    /// Reference stored in an occupied cell.
    pub fn to_ref(&self) -> StaffRef {
        StaffRef {
            id: self.id.clone(),
            display_name: self.display_name.clone(),
            role_category: self.role_category,
        }
    }
}

/// Occupant reference stored in a cell.
///
/// Equality is by `id` only; the other fields are denormalized for
/// rendering and may lag the roster.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct StaffRef {
    /// Staff ID.
    pub id: String,
    /// Display name at placement time.
    pub display_name: String,
    /// Role at placement time.
    pub role_category: RoleCategory,
}

impl PartialEq for StaffRef {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl std::hash::Hash for StaffRef {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl From<&Staff> for StaffRef {
    fn from(staff: &Staff) -> Self {
        staff.to_ref()
    }
}
