//! Restaurant and item search. Matching is plain substring containment with
//! no ranking.

use std::sync::Arc;

use dine_core::rating::{RatingThresholds, compute_restaurant_thumb, last_visited};
use dine_db::DineService;
use dine_db::repos::restaurant::RestaurantFilter;

use crate::error::AppError;
use crate::filters::{ItemSearchFilter, RestaurantSearchFilter, admits};
use crate::summary::RestaurantSearchHit;

/// An item with the visit and restaurant it belongs to.
pub use dine_db::repos::search::ItemHit as ItemSearchHit;

pub struct SearchUsecases {
    service: Arc<DineService>,
    thresholds: RatingThresholds,
}

impl SearchUsecases {
    #[must_use]
    pub const fn new(service: Arc<DineService>, thresholds: RatingThresholds) -> Self {
        Self {
            service,
            thresholds,
        }
    }

    /// Restaurants whose name contains `query`, with their computed thumb
    /// and last visit date.
    pub async fn search_restaurants(
        &self,
        query: &str,
        filter: RestaurantSearchFilter,
    ) -> Result<Vec<RestaurantSearchHit>, AppError> {
        let restaurants = self
            .service
            .list_restaurants(&RestaurantFilter {
                status: filter.status,
                search: Some(query.to_string()),
                cuisines: filter.cuisines,
            })
            .await?;
        let mut visits_by_restaurant = self.service.visits_by_restaurant().await?;

        let hits: Vec<RestaurantSearchHit> = restaurants
            .into_iter()
            .filter_map(|restaurant| {
                let visits = visits_by_restaurant
                    .remove(&restaurant.id)
                    .unwrap_or_default();
                let computed_thumb = compute_restaurant_thumb(&visits, self.thresholds);
                admits(&filter.thumbs, &computed_thumb).then(|| RestaurantSearchHit {
                    restaurant,
                    computed_thumb,
                    last_visited: last_visited(&visits),
                })
            })
            .collect();

        tracing::debug!(%query, count = hits.len(), "searched restaurants");
        Ok(hits)
    }

    /// Items whose name contains `query`, joined to their visit and
    /// restaurant. Results follow item storage order and are not deduplicated.
    pub async fn search_items(
        &self,
        query: &str,
        filter: ItemSearchFilter,
    ) -> Result<Vec<ItemSearchHit>, AppError> {
        filter.validate()?;
        let hits: Vec<ItemSearchHit> = self
            .service
            .search_item_joins(query)
            .await?
            .into_iter()
            .filter(|hit| {
                (filter.cuisines.is_empty() || hit.restaurant.has_any_cuisine(&filter.cuisines))
                    && admits(&filter.thumbs, &hit.item.thumb)
                    && admits(&filter.service_types, &hit.visit.service_type)
                    && hit
                        .visit
                        .within(filter.from_date.as_deref(), filter.to_date.as_deref())
            })
            .collect();

        tracing::debug!(%query, count = hits.len(), "searched items");
        Ok(hits)
    }
}
