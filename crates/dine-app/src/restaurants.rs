//! Restaurant listing, aggregation and CRUD.

use std::sync::Arc;

use serde::Deserialize;

use dine_core::entities::{Restaurant, Visit};
use dine_core::enums::{EntityKind, RestaurantStatus, VisitedSort};
use dine_core::rating::RatingThresholds;
use dine_db::DatabaseError;
use dine_db::DineService;
use dine_db::repos::restaurant::{NewRestaurant, RestaurantFilter};
use dine_db::updates::restaurant::{RestaurantUpdate, RestaurantUpdateBuilder};

use crate::error::AppError;
use crate::filters::{ListFilter, VisitedFilter, admits};
use crate::summary::{
    RestaurantDetails, RestaurantSummary, VisitDetails, VisitedRestaurant, sort_visited,
};

/// Input for [`RestaurantsUsecases::add_restaurant`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantDraft {
    pub name: String,
    #[serde(default)]
    pub cuisines: Vec<String>,
    #[serde(default)]
    pub notes: Option<String>,
    /// Defaults to wishlist.
    #[serde(default)]
    pub status: Option<RestaurantStatus>,
}

pub struct RestaurantsUsecases {
    service: Arc<DineService>,
    thresholds: RatingThresholds,
}

impl RestaurantsUsecases {
    #[must_use]
    pub const fn new(service: Arc<DineService>, thresholds: RatingThresholds) -> Self {
        Self {
            service,
            thresholds,
        }
    }

    pub async fn list_wishlist(&self, filter: ListFilter) -> Result<Vec<Restaurant>, AppError> {
        let restaurants = self
            .service
            .list_restaurants(&RestaurantFilter {
                status: Some(RestaurantStatus::Wishlist),
                search: filter.search,
                cuisines: filter.cuisines,
            })
            .await?;
        Ok(restaurants)
    }

    /// Active restaurants with their computed summaries, filtered and sorted.
    /// Malformed date bounds are a validation error.
    pub async fn list_visited(
        &self,
        filter: VisitedFilter,
        sort: VisitedSort,
    ) -> Result<Vec<VisitedRestaurant>, AppError> {
        filter.validate()?;
        let ListFilter { search, cuisines } = filter.list_filter();
        let restaurants = self
            .service
            .list_restaurants(&RestaurantFilter {
                status: Some(RestaurantStatus::Active),
                search,
                cuisines,
            })
            .await?;
        let mut visits_by_restaurant = self.service.visits_by_restaurant().await?;

        let mut rows: Vec<VisitedRestaurant> = restaurants
            .into_iter()
            .filter_map(|restaurant| {
                let visits = visits_by_restaurant
                    .remove(&restaurant.id)
                    .unwrap_or_default();
                let summary = RestaurantSummary::from_visits(&visits, self.thresholds);
                passes_visited_filter(&filter, &summary, &visits).then_some(VisitedRestaurant {
                    restaurant,
                    summary,
                })
            })
            .collect();

        sort_visited(&mut rows, sort);
        tracing::debug!(count = rows.len(), %sort, "listed visited restaurants");
        Ok(rows)
    }

    pub async fn add_restaurant(&self, draft: RestaurantDraft) -> Result<Restaurant, AppError> {
        let restaurant = self
            .service
            .create_restaurant(NewRestaurant {
                name: draft.name,
                status: draft.status.unwrap_or_default(),
                cuisines: draft.cuisines,
                notes: draft.notes,
            })
            .await?;
        Ok(restaurant)
    }

    pub async fn update_restaurant(
        &self,
        id: &str,
        update: RestaurantUpdate,
    ) -> Result<Restaurant, AppError> {
        Ok(self.service.update_restaurant(id, update).await?)
    }

    /// Set the status. Setting the current status again changes nothing.
    pub async fn set_restaurant_status(
        &self,
        id: &str,
        status: RestaurantStatus,
    ) -> Result<Restaurant, AppError> {
        let update = RestaurantUpdateBuilder::new().status(status).build();
        Ok(self.service.update_restaurant(id, update).await?)
    }

    pub async fn delete_restaurant(&self, id: &str) -> Result<(), AppError> {
        Ok(self.service.delete_restaurant(id).await?)
    }

    /// The restaurant, its summary and every visit with items and photos,
    /// newest visit first.
    pub async fn restaurant_details(&self, id: &str) -> Result<RestaurantDetails, AppError> {
        let restaurant = self
            .service
            .get_restaurant(id)
            .await?
            .ok_or_else(|| DatabaseError::NotFound {
                entity: EntityKind::Restaurant,
                id: id.to_string(),
            })?;

        let mut visits = self.service.list_visits_by_restaurant(id).await?;
        let summary = RestaurantSummary::from_visits(&visits, self.thresholds);
        visits.sort_by(|a, b| b.visit_date.cmp(&a.visit_date));

        let mut details = Vec::with_capacity(visits.len());
        for visit in visits {
            let items = self.service.list_items_by_visit(&visit.id).await?;
            let photos = self.service.list_photos_by_visit(&visit.id).await?;
            details.push(VisitDetails {
                visit,
                items,
                photos,
            });
        }

        Ok(RestaurantDetails {
            restaurant,
            summary,
            visits: details,
        })
    }
}

/// Post-aggregation filters. Each date bound and the service set is
/// satisfied by any single visit.
fn passes_visited_filter(
    filter: &VisitedFilter,
    summary: &RestaurantSummary,
    visits: &[Visit],
) -> bool {
    let from_ok = filter
        .from_date
        .as_deref()
        .is_none_or(|from| visits.iter().any(|v| v.within(Some(from), None)));
    let to_ok = filter
        .to_date
        .as_deref()
        .is_none_or(|to| visits.iter().any(|v| v.within(None, Some(to))));
    let service_ok = filter.service_types.is_empty()
        || visits
            .iter()
            .any(|v| filter.service_types.contains(&v.service_type));

    admits(&filter.thumbs, &summary.computed_thumb) && from_ok && to_ok && service_ok
}
