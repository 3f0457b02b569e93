//! Visit update builder. The parent restaurant cannot be changed.

use dine_core::entities::Visit;
use dine_core::enums::{ServiceType, Thumb};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VisitUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visit_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_type: Option<ServiceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall_thumb: Option<Thumb>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<String>>,
}

impl VisitUpdate {
    /// Merge the set fields onto `visit`. Returns `true` if any value changed.
    pub fn apply_to(&self, visit: &mut Visit) -> bool {
        let mut changed = false;
        if let Some(date) = &self.visit_date {
            changed |= visit.visit_date != *date;
            visit.visit_date.clone_from(date);
        }
        if let Some(service_type) = self.service_type {
            changed |= visit.service_type != service_type;
            visit.service_type = service_type;
        }
        if let Some(thumb) = self.overall_thumb {
            changed |= visit.overall_thumb != thumb;
            visit.overall_thumb = thumb;
        }
        if let Some(notes) = &self.notes {
            changed |= visit.notes != *notes;
            visit.notes.clone_from(notes);
        }
        changed
    }
}

#[derive(Default)]
pub struct VisitUpdateBuilder(VisitUpdate);

impl VisitUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn visit_date(mut self, val: impl Into<String>) -> Self {
        self.0.visit_date = Some(val.into());
        self
    }

    #[must_use]
    pub const fn service_type(mut self, val: ServiceType) -> Self {
        self.0.service_type = Some(val);
        self
    }

    #[must_use]
    pub const fn overall_thumb(mut self, val: Thumb) -> Self {
        self.0.overall_thumb = Some(val);
        self
    }

    #[must_use]
    pub fn notes(mut self, val: Option<String>) -> Self {
        self.0.notes = Some(val);
        self
    }

    #[must_use]
    pub fn build(self) -> VisitUpdate {
        self.0
    }
}
