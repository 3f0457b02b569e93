//! Restaurant update builder.

use dine_core::entities::Restaurant;
use dine_core::enums::RestaurantStatus;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RestaurantUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RestaurantStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuisines: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<String>>,
}

impl RestaurantUpdate {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.status.is_none() && self.cuisines.is_none() && self.notes.is_none()
    }

    /// Merge the set fields onto `restaurant`. Returns `true` if any value changed.
    ///
    /// Timestamps are left alone; the repository stamps `updated_at`.
    pub fn apply_to(&self, restaurant: &mut Restaurant) -> bool {
        let mut changed = false;
        if let Some(name) = &self.name {
            changed |= restaurant.name != *name;
            restaurant.name.clone_from(name);
        }
        if let Some(status) = self.status {
            changed |= restaurant.status != status;
            restaurant.status = status;
        }
        if let Some(cuisines) = &self.cuisines {
            changed |= restaurant.cuisines != *cuisines;
            restaurant.cuisines.clone_from(cuisines);
        }
        if let Some(notes) = &self.notes {
            changed |= restaurant.notes != *notes;
            restaurant.notes.clone_from(notes);
        }
        changed
    }
}

pub struct RestaurantUpdateBuilder(RestaurantUpdate);

impl RestaurantUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(RestaurantUpdate::default())
    }

    #[must_use]
    pub fn name(mut self, val: impl Into<String>) -> Self {
        self.0.name = Some(val.into());
        self
    }

    #[must_use]
    pub const fn status(mut self, val: RestaurantStatus) -> Self {
        self.0.status = Some(val);
        self
    }

    #[must_use]
    pub fn cuisines(mut self, val: Vec<String>) -> Self {
        self.0.cuisines = Some(val);
        self
    }

    #[must_use]
    pub fn notes(mut self, val: Option<String>) -> Self {
        self.0.notes = Some(val);
        self
    }

    #[must_use]
    pub fn build(self) -> RestaurantUpdate {
        self.0
    }
}

impl Default for RestaurantUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
