//! Visit item update builder. The parent visit cannot be changed.

use dine_core::entities::VisitItem;
use dine_core::enums::Thumb;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VisitItemUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb: Option<Thumb>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<String>>,
}

impl VisitItemUpdate {
    pub fn apply_to(&self, item: &mut VisitItem) -> bool {
        let mut changed = false;
        if let Some(name) = &self.name {
            changed |= item.name != *name;
            item.name.clone_from(name);
        }
        if let Some(thumb) = self.thumb {
            changed |= item.thumb != thumb;
            item.thumb = thumb;
        }
        if let Some(notes) = &self.notes {
            changed |= item.notes != *notes;
            item.notes.clone_from(notes);
        }
        changed
    }
}

#[derive(Default)]
pub struct VisitItemUpdateBuilder(VisitItemUpdate);

impl VisitItemUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn name(mut self, val: impl Into<String>) -> Self {
        self.0.name = Some(val.into());
        self
    }

    #[must_use]
    pub const fn thumb(mut self, val: Thumb) -> Self {
        self.0.thumb = Some(val);
        self
    }

    #[must_use]
    pub fn notes(mut self, val: Option<String>) -> Self {
        self.0.notes = Some(val);
        self
    }

    #[must_use]
    pub fn build(self) -> VisitItemUpdate {
        self.0
    }
}
