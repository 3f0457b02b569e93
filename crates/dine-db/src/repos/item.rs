//! Visit item repository.

use chrono::Utc;

use dine_core::entities::VisitItem;
use dine_core::enums::{EntityKind, Thumb};

use crate::error::DatabaseError;
use crate::service::DineService;
use crate::updates::item::VisitItemUpdate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVisitItem {
    pub visit_id: String,
    pub name: String,
    pub thumb: Thumb,
    pub notes: Option<String>,
}

impl DineService {
    pub async fn list_items_by_visit(&self, visit_id: &str) -> Result<Vec<VisitItem>, DatabaseError> {
        Ok(self
            .read()
            .visit_items
            .into_iter()
            .filter(|i| i.visit_id == visit_id)
            .collect())
    }

    pub async fn get_item(&self, id: &str) -> Result<Option<VisitItem>, DatabaseError> {
        Ok(self.read().visit_items.into_iter().find(|i| i.id == id))
    }

    /// Record an item eaten on a visit. Fails with `NotFound` if the visit does not exist.
    pub async fn create_item(&self, new: NewVisitItem) -> Result<VisitItem, DatabaseError> {
        let item = self.mutate(|snapshot| {
            if !snapshot.visits.iter().any(|v| v.id == new.visit_id) {
                return Err(DatabaseError::not_found(EntityKind::Visit, &new.visit_id));
            }
            let item = VisitItem {
                id: self.next_id(snapshot, EntityKind::VisitItem),
                visit_id: new.visit_id,
                name: new.name,
                thumb: new.thumb,
                notes: new.notes,
                created_at: Utc::now(),
            };
            snapshot.visit_items.push(item.clone());
            Ok(item)
        })?;
        tracing::debug!(id = %item.id, visit_id = %item.visit_id, "created visit item");
        Ok(item)
    }

    pub async fn update_item(
        &self,
        id: &str,
        update: VisitItemUpdate,
    ) -> Result<VisitItem, DatabaseError> {
        let current = self
            .get_item(id)
            .await?
            .ok_or_else(|| DatabaseError::not_found(EntityKind::VisitItem, id))?;
        let mut candidate = current.clone();
        if !update.apply_to(&mut candidate) {
            return Ok(current);
        }

        let item = self.mutate(|snapshot| {
            let item = snapshot
                .visit_items
                .iter_mut()
                .find(|i| i.id == id)
                .ok_or_else(|| DatabaseError::not_found(EntityKind::VisitItem, id))?;
            update.apply_to(item);
            Ok(item.clone())
        })?;
        tracing::debug!(%id, ?update, "updated visit item");
        Ok(item)
    }

    pub async fn delete_item(&self, id: &str) -> Result<(), DatabaseError> {
        if self.get_item(id).await?.is_none() {
            tracing::debug!(%id, "delete of unknown visit item ignored");
            return Ok(());
        }
        self.mutate(|snapshot| {
            snapshot.visit_items.retain(|i| i.id != id);
            Ok(())
        })?;
        tracing::debug!(%id, "deleted visit item");
        Ok(())
    }
}
