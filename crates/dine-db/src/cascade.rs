//! Cascading deletes.
//!
//! A delete first collects every descendant id into a [`CascadePlan`], then
//! removes them in a single pass over the snapshot. Keeping the two phases
//! apart makes the "no orphans" invariant checkable without touching storage.

use std::collections::HashSet;

use crate::store::Snapshot;

/// The set of ids a delete will remove, per entity kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CascadePlan {
    pub restaurant_ids: HashSet<String>,
    pub visit_ids: HashSet<String>,
    pub item_ids: HashSet<String>,
    pub photo_ids: HashSet<String>,
}

impl CascadePlan {
    /// Plan deletion of a restaurant, its visits, and their items and photos.
    #[must_use]
    pub fn for_restaurant(snapshot: &Snapshot, restaurant_id: &str) -> Self {
        let mut plan = Self::default();
        if snapshot.restaurants.iter().any(|r| r.id == restaurant_id) {
            plan.restaurant_ids.insert(restaurant_id.to_string());
        }
        plan.visit_ids = snapshot
            .visits
            .iter()
            .filter(|v| v.restaurant_id == restaurant_id)
            .map(|v| v.id.clone())
            .collect();
        plan.collect_visit_children(snapshot);
        plan
    }

    /// Plan deletion of a visit and its items and photos.
    #[must_use]
    pub fn for_visit(snapshot: &Snapshot, visit_id: &str) -> Self {
        let mut plan = Self::default();
        // Children match by parent id whether or not the visit row still exists.
        plan.visit_ids.insert(visit_id.to_string());
        plan.collect_visit_children(snapshot);
        plan.visit_ids.retain(|id| snapshot.visits.iter().any(|v| &v.id == id));
        plan
    }

    fn collect_visit_children(&mut self, snapshot: &Snapshot) {
        self.item_ids = snapshot
            .visit_items
            .iter()
            .filter(|i| self.visit_ids.contains(&i.visit_id))
            .map(|i| i.id.clone())
            .collect();
        self.photo_ids = snapshot
            .visit_photos
            .iter()
            .filter(|p| self.visit_ids.contains(&p.visit_id))
            .map(|p| p.id.clone())
            .collect();
    }

    /// Total number of records this plan removes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.restaurant_ids.len() + self.visit_ids.len() + self.item_ids.len() + self.photo_ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove every planned record from the snapshot.
    pub fn apply(&self, snapshot: &mut Snapshot) {
        snapshot
            .restaurants
            .retain(|r| !self.restaurant_ids.contains(&r.id));
        snapshot.visits.retain(|v| !self.visit_ids.contains(&v.id));
        snapshot
            .visit_items
            .retain(|i| !self.item_ids.contains(&i.id));
        snapshot
            .visit_photos
            .retain(|p| !self.photo_ids.contains(&p.id));
    }
}
