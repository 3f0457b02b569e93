//! Visit logging with nested items and photos.

use std::sync::Arc;

use serde::Deserialize;

use dine_core::entities::{Visit, VisitItem, VisitPhoto};
use dine_core::enums::{RestaurantStatus, ServiceType, Thumb};
use dine_core::errors::validate_visit_date;
use dine_db::DineService;
use dine_db::repos::item::NewVisitItem;
use dine_db::repos::restaurant::{NewRestaurant, RestaurantFilter};
use dine_db::repos::visit::NewVisit;
use dine_db::updates::item::VisitItemUpdate;
use dine_db::updates::restaurant::RestaurantUpdateBuilder;
use dine_db::updates::visit::VisitUpdate;

use crate::error::AppError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDraft {
    pub name: String,
    /// Defaults to neutral.
    #[serde(default)]
    pub thumb: Option<Thumb>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoDraft {
    pub storage_path: String,
    #[serde(default)]
    pub caption: Option<String>,
}

/// Input for [`VisitsUsecases::add_visit`].
///
/// `service_type` and `overall_thumb` are optional here so that a missing
/// value is reported as a validation error rather than a parse failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitDraft {
    #[serde(default)]
    pub restaurant_id: String,
    pub visit_date: String,
    #[serde(default)]
    pub service_type: Option<ServiceType>,
    #[serde(default)]
    pub overall_thumb: Option<Thumb>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub items: Vec<ItemDraft>,
    #[serde(default)]
    pub photos: Vec<PhotoDraft>,
}

impl VisitDraft {
    /// Check the required fields and return the visit to create.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` naming the first missing or malformed field.
    pub fn validate(&self) -> Result<NewVisit, AppError> {
        validate_visit_date(&self.visit_date)?;
        let service_type = self
            .service_type
            .ok_or_else(|| AppError::Validation("service type is required".into()))?;
        let overall_thumb = self
            .overall_thumb
            .ok_or_else(|| AppError::Validation("overall thumb is required".into()))?;
        Ok(NewVisit {
            restaurant_id: self.restaurant_id.clone(),
            visit_date: self.visit_date.clone(),
            service_type,
            overall_thumb,
            notes: self.notes.clone(),
        })
    }
}

pub struct VisitsUsecases {
    service: Arc<DineService>,
}

impl VisitsUsecases {
    #[must_use]
    pub const fn new(service: Arc<DineService>) -> Self {
        Self { service }
    }

    /// Record a visit with its items and photos, then promote a wishlist
    /// restaurant to active.
    ///
    /// Validation happens before any write. After that the steps are not
    /// atomic: each item, each photo and the promotion is its own write, and
    /// a failure part way through leaves the earlier writes in place. The
    /// error is returned as is.
    ///
    /// Items with a blank name and photos with a blank path are skipped.
    /// Item names are stored trimmed.
    pub async fn add_visit(&self, draft: VisitDraft) -> Result<Visit, AppError> {
        let new_visit = draft.validate()?;
        let visit = self.service.create_visit(new_visit).await?;

        for item in draft.items {
            let name = item.name.trim();
            if name.is_empty() {
                tracing::debug!(visit_id = %visit.id, "skipping item draft with blank name");
                continue;
            }
            self.service
                .create_item(NewVisitItem {
                    visit_id: visit.id.clone(),
                    name: name.to_string(),
                    thumb: item.thumb.unwrap_or_default(),
                    notes: item.notes,
                })
                .await?;
        }

        for photo in draft.photos {
            if photo.storage_path.trim().is_empty() {
                tracing::debug!(visit_id = %visit.id, "skipping photo draft with blank path");
                continue;
            }
            self.service
                .add_photo_to_visit(&visit.id, &photo.storage_path, photo.caption.as_deref())
                .await?;
        }

        self.promote_if_wishlist(&visit.restaurant_id).await?;
        Ok(visit)
    }

    /// Log a visit against a restaurant looked up by name, creating it as
    /// active if no restaurant has that name. Names compare trimmed and
    /// case-insensitively. The draft's `restaurant_id` is ignored.
    pub async fn log_visit_by_name(
        &self,
        name: &str,
        mut draft: VisitDraft,
    ) -> Result<Visit, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("restaurant name is required".into()));
        }
        draft.restaurant_id.clear();
        draft.validate()?;

        let wanted = name.to_lowercase();
        let existing = self
            .service
            .list_restaurants(&RestaurantFilter::default())
            .await?
            .into_iter()
            .find(|r| r.name.trim().to_lowercase() == wanted);

        let restaurant = match existing {
            Some(restaurant) => restaurant,
            None => {
                self.service
                    .create_restaurant(NewRestaurant {
                        name: name.to_string(),
                        status: RestaurantStatus::Active,
                        ..NewRestaurant::default()
                    })
                    .await?
            }
        };

        draft.restaurant_id = restaurant.id;
        self.add_visit(draft).await
    }

    async fn promote_if_wishlist(&self, restaurant_id: &str) -> Result<(), AppError> {
        let Some(restaurant) = self.service.get_restaurant(restaurant_id).await? else {
            return Ok(());
        };
        if restaurant.status.promotes_on_visit() {
            let update = RestaurantUpdateBuilder::new()
                .status(RestaurantStatus::Active)
                .build();
            self.service.update_restaurant(restaurant_id, update).await?;
            tracing::debug!(%restaurant_id, "promoted restaurant from wishlist to active");
        }
        Ok(())
    }

    /// Update a visit. A new date must be `YYYY-MM-DD`.
    pub async fn update_visit(&self, id: &str, update: VisitUpdate) -> Result<Visit, AppError> {
        if let Some(date) = update.visit_date.as_deref() {
            validate_visit_date(date)?;
        }
        Ok(self.service.update_visit(id, update).await?)
    }

    pub async fn delete_visit(&self, id: &str) -> Result<(), AppError> {
        Ok(self.service.delete_visit(id).await?)
    }

    pub async fn list_by_restaurant(&self, restaurant_id: &str) -> Result<Vec<Visit>, AppError> {
        Ok(self.service.list_visits_by_restaurant(restaurant_id).await?)
    }

    pub async fn list_items_by_visit(&self, visit_id: &str) -> Result<Vec<VisitItem>, AppError> {
        Ok(self.service.list_items_by_visit(visit_id).await?)
    }

    pub async fn list_photos_by_visit(&self, visit_id: &str) -> Result<Vec<VisitPhoto>, AppError> {
        Ok(self.service.list_photos_by_visit(visit_id).await?)
    }

    pub async fn update_item(
        &self,
        id: &str,
        update: VisitItemUpdate,
    ) -> Result<VisitItem, AppError> {
        Ok(self.service.update_item(id, update).await?)
    }

    pub async fn delete_item(&self, id: &str) -> Result<(), AppError> {
        Ok(self.service.delete_item(id).await?)
    }

    pub async fn add_photo_to_visit(
        &self,
        visit_id: &str,
        storage_path: &str,
        caption: Option<&str>,
    ) -> Result<VisitPhoto, AppError> {
        Ok(self
            .service
            .add_photo_to_visit(visit_id, storage_path, caption)
            .await?)
    }

    pub async fn delete_photo(&self, id: &str) -> Result<(), AppError> {
        Ok(self.service.delete_photo(id).await?)
    }
}
