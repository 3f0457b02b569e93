//! Visit repository.

use std::collections::HashMap;

use chrono::Utc;

use dine_core::entities::Visit;
use dine_core::enums::{EntityKind, ServiceType, Thumb};

use crate::cascade::CascadePlan;
use crate::error::DatabaseError;
use crate::service::DineService;
use crate::updates::visit::VisitUpdate;

/// Fields for a new visit. The date is stored as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVisit {
    pub restaurant_id: String,
    pub visit_date: String,
    pub service_type: ServiceType,
    pub overall_thumb: Thumb,
    pub notes: Option<String>,
}

impl DineService {
    pub async fn list_visits_by_restaurant(
        &self,
        restaurant_id: &str,
    ) -> Result<Vec<Visit>, DatabaseError> {
        Ok(self
            .read()
            .visits
            .into_iter()
            .filter(|v| v.restaurant_id == restaurant_id)
            .collect())
    }

    pub async fn list_all_visits(&self) -> Result<Vec<Visit>, DatabaseError> {
        Ok(self.read().visits)
    }

    /// Every visit grouped by restaurant id, from a single snapshot load.
    pub async fn visits_by_restaurant(&self) -> Result<HashMap<String, Vec<Visit>>, DatabaseError> {
        let mut grouped: HashMap<String, Vec<Visit>> = HashMap::new();
        for visit in self.read().visits {
            grouped
                .entry(visit.restaurant_id.clone())
                .or_default()
                .push(visit);
        }
        Ok(grouped)
    }

    pub async fn get_visit(&self, id: &str) -> Result<Option<Visit>, DatabaseError> {
        Ok(self.read().visits.into_iter().find(|v| v.id == id))
    }

    /// Record a visit. Fails with `NotFound` if the restaurant does not exist.
    pub async fn create_visit(&self, new: NewVisit) -> Result<Visit, DatabaseError> {
        let visit = self.mutate(|snapshot| {
            if !snapshot.restaurants.iter().any(|r| r.id == new.restaurant_id) {
                return Err(DatabaseError::not_found(
                    EntityKind::Restaurant,
                    &new.restaurant_id,
                ));
            }
            let visit = Visit {
                id: self.next_id(snapshot, EntityKind::Visit),
                restaurant_id: new.restaurant_id,
                visit_date: new.visit_date,
                service_type: new.service_type,
                overall_thumb: new.overall_thumb,
                notes: new.notes,
                created_at: Utc::now(),
            };
            snapshot.visits.push(visit.clone());
            Ok(visit)
        })?;
        tracing::debug!(
            id = %visit.id,
            restaurant_id = %visit.restaurant_id,
            date = %visit.visit_date,
            "created visit"
        );
        Ok(visit)
    }

    pub async fn update_visit(&self, id: &str, update: VisitUpdate) -> Result<Visit, DatabaseError> {
        let current = self
            .get_visit(id)
            .await?
            .ok_or_else(|| DatabaseError::not_found(EntityKind::Visit, id))?;
        let mut candidate = current.clone();
        if !update.apply_to(&mut candidate) {
            return Ok(current);
        }

        let visit = self.mutate(|snapshot| {
            let visit = snapshot
                .visits
                .iter_mut()
                .find(|v| v.id == id)
                .ok_or_else(|| DatabaseError::not_found(EntityKind::Visit, id))?;
            update.apply_to(visit);
            Ok(visit.clone())
        })?;
        tracing::debug!(%id, ?update, "updated visit");
        Ok(visit)
    }

    /// Delete a visit with its items and photos.
    pub async fn delete_visit(&self, id: &str) -> Result<(), DatabaseError> {
        let plan = CascadePlan::for_visit(&self.read(), id);
        if plan.is_empty() {
            tracing::debug!(%id, "delete of unknown visit ignored");
            return Ok(());
        }

        self.mutate(|snapshot| {
            CascadePlan::for_visit(snapshot, id).apply(snapshot);
            Ok(())
        })?;
        tracing::debug!(
            %id,
            items = plan.item_ids.len(),
            photos = plan.photo_ids.len(),
            "deleted visit"
        );
        Ok(())
    }
}
