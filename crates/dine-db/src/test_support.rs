//! Shared test utilities for dine-db unit tests.

#[cfg(test)]
pub(crate) mod helpers {
    use dine_core::entities::{Restaurant, Visit, VisitItem, VisitPhoto};
    use dine_core::enums::{RestaurantStatus, ServiceType, Thumb};

    use crate::repos::item::NewVisitItem;
    use crate::repos::restaurant::NewRestaurant;
    use crate::repos::visit::NewVisit;
    use crate::service::DineService;

    /// Create a DineService over an empty in-memory snapshot.
    pub fn test_service() -> DineService {
        DineService::in_memory()
    }

    pub async fn seed_restaurant(
        svc: &DineService,
        name: &str,
        status: RestaurantStatus,
        cuisines: &[&str],
    ) -> Restaurant {
        svc.create_restaurant(NewRestaurant {
            name: name.to_string(),
            status,
            cuisines: cuisines.iter().map(|c| (*c).to_string()).collect(),
            notes: None,
        })
        .await
        .unwrap()
    }

    /// Eat-in visit with a neutral thumb.
    pub async fn seed_visit(svc: &DineService, restaurant_id: &str, date: &str) -> Visit {
        svc.create_visit(NewVisit {
            restaurant_id: restaurant_id.to_string(),
            visit_date: date.to_string(),
            service_type: ServiceType::EatIn,
            overall_thumb: Thumb::Neutral,
            notes: None,
        })
        .await
        .unwrap()
    }

    pub async fn seed_item(svc: &DineService, visit_id: &str, name: &str) -> VisitItem {
        svc.create_item(NewVisitItem {
            visit_id: visit_id.to_string(),
            name: name.to_string(),
            thumb: Thumb::Neutral,
            notes: None,
        })
        .await
        .unwrap()
    }

    pub async fn seed_photo(svc: &DineService, visit_id: &str, path: &str) -> VisitPhoto {
        svc.add_photo_to_visit(visit_id, path, None).await.unwrap()
    }
}
