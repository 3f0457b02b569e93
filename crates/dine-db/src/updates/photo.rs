//! Visit photo update builder.

use dine_core::entities::VisitPhoto;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VisitPhotoUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<Option<String>>,
}

impl VisitPhotoUpdate {
    pub fn apply_to(&self, photo: &mut VisitPhoto) -> bool {
        match &self.caption {
            Some(caption) if photo.caption != *caption => {
                photo.caption.clone_from(caption);
                true
            }
            _ => false,
        }
    }
}

#[derive(Default)]
pub struct VisitPhotoUpdateBuilder(VisitPhotoUpdate);

impl VisitPhotoUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn caption(mut self, val: Option<String>) -> Self {
        self.0.caption = Some(val);
        self
    }

    #[must_use]
    pub fn build(self) -> VisitPhotoUpdate {
        self.0
    }
}
