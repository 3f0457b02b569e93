//! Item join index: visit items resolved to their visit and restaurant.

use std::collections::HashMap;

use serde::Serialize;

use dine_core::entities::{Restaurant, Visit, VisitItem};

use crate::error::DatabaseError;
use crate::service::DineService;

/// A visit item together with the visit and restaurant it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemHit {
    pub item: VisitItem,
    pub visit: Visit,
    pub restaurant: Restaurant,
}

impl DineService {
    /// Items whose name contains `query` (trimmed, case-insensitive), joined
    /// to their visit and restaurant. A blank query matches every item.
    ///
    /// Items whose visit or restaurant is missing are skipped. Results are in
    /// item storage order.
    pub async fn search_item_joins(&self, query: &str) -> Result<Vec<ItemHit>, DatabaseError> {
        let snapshot = self.read();
        let needle = query.trim().to_lowercase();

        let visits: HashMap<&str, &Visit> =
            snapshot.visits.iter().map(|v| (v.id.as_str(), v)).collect();
        let restaurants: HashMap<&str, &Restaurant> = snapshot
            .restaurants
            .iter()
            .map(|r| (r.id.as_str(), r))
            .collect();

        let mut hits = Vec::new();
        for item in &snapshot.visit_items {
            if !item.name.to_lowercase().contains(&needle) {
                continue;
            }
            let Some(visit) = visits.get(item.visit_id.as_str()) else {
                tracing::debug!(item_id = %item.id, visit_id = %item.visit_id, "skipping orphan item");
                continue;
            };
            let Some(restaurant) = restaurants.get(visit.restaurant_id.as_str()) else {
                tracing::debug!(
                    visit_id = %visit.id,
                    restaurant_id = %visit.restaurant_id,
                    "skipping item of orphan visit"
                );
                continue;
            };
            hits.push(ItemHit {
                item: item.clone(),
                visit: (*visit).clone(),
                restaurant: (*restaurant).clone(),
            });
        }
        Ok(hits)
    }
}
