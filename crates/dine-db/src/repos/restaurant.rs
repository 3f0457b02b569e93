//! Restaurant repository: list with filters, CRUD, cascading delete.

use chrono::Utc;

use dine_core::entities::Restaurant;
use dine_core::enums::{EntityKind, RestaurantStatus};

use crate::cascade::CascadePlan;
use crate::error::DatabaseError;
use crate::service::DineService;
use crate::updates::restaurant::RestaurantUpdate;

/// Query filter for [`DineService::list_restaurants`]. All set fields must match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestaurantFilter {
    pub status: Option<RestaurantStatus>,
    /// Case-insensitive substring on the name. Trimmed; blank means no filter.
    pub search: Option<String>,
    /// Match restaurants sharing at least one tag. Empty means no filter.
    pub cuisines: Vec<String>,
}

impl RestaurantFilter {
    #[must_use]
    pub fn matches(&self, restaurant: &Restaurant) -> bool {
        if self.status.is_some_and(|status| restaurant.status != status) {
            return false;
        }
        let search = self.search.as_deref().map_or("", str::trim);
        if !search.is_empty() && !restaurant.name_contains(search) {
            return false;
        }
        self.cuisines.is_empty() || restaurant.has_any_cuisine(&self.cuisines)
    }
}

/// Fields for a new restaurant. Status defaults to wishlist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewRestaurant {
    pub name: String,
    pub status: RestaurantStatus,
    pub cuisines: Vec<String>,
    pub notes: Option<String>,
}

impl NewRestaurant {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

impl DineService {
    /// Restaurants matching `filter`, in storage order.
    pub async fn list_restaurants(
        &self,
        filter: &RestaurantFilter,
    ) -> Result<Vec<Restaurant>, DatabaseError> {
        Ok(self
            .read()
            .restaurants
            .into_iter()
            .filter(|r| filter.matches(r))
            .collect())
    }

    pub async fn get_restaurant(&self, id: &str) -> Result<Option<Restaurant>, DatabaseError> {
        Ok(self.read().restaurants.into_iter().find(|r| r.id == id))
    }

    pub async fn create_restaurant(
        &self,
        new: NewRestaurant,
    ) -> Result<Restaurant, DatabaseError> {
        let restaurant = self.mutate(|snapshot| {
            let now = Utc::now();
            let restaurant = Restaurant {
                id: self.next_id(snapshot, EntityKind::Restaurant),
                name: new.name,
                status: new.status,
                cuisines: new.cuisines,
                notes: new.notes,
                created_at: now,
                updated_at: now,
            };
            snapshot.restaurants.push(restaurant.clone());
            Ok(restaurant)
        })?;
        tracing::debug!(id = %restaurant.id, status = %restaurant.status, "created restaurant");
        Ok(restaurant)
    }

    /// Merge `update` into the restaurant. An update that changes nothing
    /// returns the stored record untouched, `updated_at` included.
    pub async fn update_restaurant(
        &self,
        id: &str,
        update: RestaurantUpdate,
    ) -> Result<Restaurant, DatabaseError> {
        let current = self
            .get_restaurant(id)
            .await?
            .ok_or_else(|| DatabaseError::not_found(EntityKind::Restaurant, id))?;
        let mut candidate = current.clone();
        if !update.apply_to(&mut candidate) {
            return Ok(current);
        }

        let restaurant = self.mutate(|snapshot| {
            let restaurant = snapshot
                .restaurants
                .iter_mut()
                .find(|r| r.id == id)
                .ok_or_else(|| DatabaseError::not_found(EntityKind::Restaurant, id))?;
            update.apply_to(restaurant);
            restaurant.updated_at = Utc::now();
            Ok(restaurant.clone())
        })?;
        tracing::debug!(%id, ?update, "updated restaurant");
        Ok(restaurant)
    }

    /// Delete a restaurant with its visits and their items and photos.
    pub async fn delete_restaurant(&self, id: &str) -> Result<(), DatabaseError> {
        let plan = CascadePlan::for_restaurant(&self.read(), id);
        if plan.is_empty() {
            tracing::debug!(%id, "delete of unknown restaurant ignored");
            return Ok(());
        }

        self.mutate(|snapshot| {
            CascadePlan::for_restaurant(snapshot, id).apply(snapshot);
            Ok(())
        })?;
        tracing::debug!(
            %id,
            visits = plan.visit_ids.len(),
            items = plan.item_ids.len(),
            photos = plan.photo_ids.len(),
            "deleted restaurant"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{seed_restaurant, seed_visit, test_service};
    use crate::updates::restaurant::RestaurantUpdateBuilder;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn create_restaurant_roundtrip() {
        let svc = test_service();
        let created = svc
            .create_restaurant(NewRestaurant {
                name: "Taco Hut".into(),
                cuisines: vec!["Mexican".into()],
                notes: Some("late night".into()),
                ..NewRestaurant::default()
            })
            .await
            .unwrap();

        assert!(created.id.starts_with("rest_"));
        assert_eq!(created.status, RestaurantStatus::Wishlist);
        assert_eq!(created.created_at, created.updated_at);

        let fetched = svc.get_restaurant(&created.id).await.unwrap();
        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn get_unknown_restaurant_is_none() {
        let svc = test_service();
        assert_eq!(svc.get_restaurant("rest_missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn ids_are_unique() {
        let svc = test_service();
        let a = seed_restaurant(&svc, "A", RestaurantStatus::Wishlist, &[]).await;
        let b = seed_restaurant(&svc, "B", RestaurantStatus::Wishlist, &[]).await;
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn list_filters_by_status_search_and_cuisine() {
        let svc = test_service();
        seed_restaurant(&svc, "Taco Hut", RestaurantStatus::Wishlist, &["Mexican"]).await;
        seed_restaurant(&svc, "Taco Bell", RestaurantStatus::Active, &["mexican", "fast food"]).await;
        seed_restaurant(&svc, "Pho Corner", RestaurantStatus::Active, &["Vietnamese"]).await;

        let by_status = svc
            .list_restaurants(&RestaurantFilter {
                status: Some(RestaurantStatus::Active),
                ..RestaurantFilter::default()
            })
            .await
            .unwrap();
        assert_eq!(by_status.len(), 2);

        let by_search = svc
            .list_restaurants(&RestaurantFilter {
                search: Some("  TACO ".into()),
                ..RestaurantFilter::default()
            })
            .await
            .unwrap();
        let names: Vec<_> = by_search.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Taco Hut", "Taco Bell"]);

        let by_cuisine = svc
            .list_restaurants(&RestaurantFilter {
                cuisines: vec!["MEXICAN".into(), "thai".into()],
                ..RestaurantFilter::default()
            })
            .await
            .unwrap();
        assert_eq!(by_cuisine.len(), 2);

        let combined = svc
            .list_restaurants(&RestaurantFilter {
                status: Some(RestaurantStatus::Active),
                search: Some("taco".into()),
                cuisines: vec!["fast food".into()],
            })
            .await
            .unwrap();
        assert_eq!(combined.len(), 1);
        assert_eq!(combined[0].name, "Taco Bell");
    }

    #[tokio::test]
    async fn blank_search_matches_everything() {
        let svc = test_service();
        seed_restaurant(&svc, "One", RestaurantStatus::Wishlist, &[]).await;
        seed_restaurant(&svc, "Two", RestaurantStatus::Archived, &[]).await;
        let all = svc
            .list_restaurants(&RestaurantFilter {
                search: Some("   ".into()),
                ..RestaurantFilter::default()
            })
            .await
            .unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn update_restaurant_partial() {
        let svc = test_service();
        let r = seed_restaurant(&svc, "Original", RestaurantStatus::Wishlist, &["thai"]).await;

        let update = RestaurantUpdateBuilder::new().name("Renamed").build();
        let updated = svc.update_restaurant(&r.id, update).await.unwrap();
        assert_eq!(updated.name, "Renamed");
        assert_eq!(updated.cuisines, vec!["thai".to_string()]);
        assert_eq!(updated.created_at, r.created_at);
        assert!(updated.updated_at >= r.updated_at);
    }

    #[tokio::test]
    async fn update_without_change_keeps_timestamp() {
        let svc = test_service();
        let r = seed_restaurant(&svc, "Same", RestaurantStatus::Active, &[]).await;
        let update = RestaurantUpdateBuilder::new()
            .status(RestaurantStatus::Active)
            .build();
        let unchanged = svc.update_restaurant(&r.id, update).await.unwrap();
        assert_eq!(unchanged, r);
    }

    #[tokio::test]
    async fn update_unknown_restaurant_is_not_found() {
        let svc = test_service();
        let err = svc
            .update_restaurant("rest_missing", RestaurantUpdateBuilder::new().name("x").build())
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn delete_restaurant_cascades() {
        let svc = test_service();
        let r = seed_restaurant(&svc, "Doomed", RestaurantStatus::Active, &[]).await;
        let keep = seed_restaurant(&svc, "Kept", RestaurantStatus::Active, &[]).await;
        seed_visit(&svc, &r.id, "2024-01-01").await;
        let kept_visit = seed_visit(&svc, &keep.id, "2024-01-02").await;

        svc.delete_restaurant(&r.id).await.unwrap();

        assert_eq!(svc.get_restaurant(&r.id).await.unwrap(), None);
        let remaining = svc.list_all_visits().await.unwrap();
        assert_eq!(remaining, vec![kept_visit]);
    }

    #[tokio::test]
    async fn delete_unknown_restaurant_is_noop() {
        let svc = test_service();
        seed_restaurant(&svc, "Stays", RestaurantStatus::Wishlist, &[]).await;
        svc.delete_restaurant("rest_missing").await.unwrap();
        assert_eq!(
            svc.list_restaurants(&RestaurantFilter::default())
                .await
                .unwrap()
                .len(),
            1
        );
    }
}
