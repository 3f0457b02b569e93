//! Visit photo repository. Photos are references to stored images; the
//! image bytes never pass through here.

use chrono::Utc;

use dine_core::entities::VisitPhoto;
use dine_core::enums::EntityKind;

use crate::error::DatabaseError;
use crate::service::DineService;
use crate::updates::photo::VisitPhotoUpdate;

impl DineService {
    pub async fn list_photos_by_visit(
        &self,
        visit_id: &str,
    ) -> Result<Vec<VisitPhoto>, DatabaseError> {
        Ok(self
            .read()
            .visit_photos
            .into_iter()
            .filter(|p| p.visit_id == visit_id)
            .collect())
    }

    pub async fn get_photo(&self, id: &str) -> Result<Option<VisitPhoto>, DatabaseError> {
        Ok(self.read().visit_photos.into_iter().find(|p| p.id == id))
    }

    /// Attach a photo reference to a visit. Fails with `NotFound` if the visit does not exist.
    pub async fn add_photo_to_visit(
        &self,
        visit_id: &str,
        storage_path: &str,
        caption: Option<&str>,
    ) -> Result<VisitPhoto, DatabaseError> {
        let photo = self.mutate(|snapshot| {
            if !snapshot.visits.iter().any(|v| v.id == visit_id) {
                return Err(DatabaseError::not_found(EntityKind::Visit, visit_id));
            }
            let photo = VisitPhoto {
                id: self.next_id(snapshot, EntityKind::VisitPhoto),
                visit_id: visit_id.to_string(),
                storage_path: storage_path.to_string(),
                caption: caption.map(String::from),
                created_at: Utc::now(),
            };
            snapshot.visit_photos.push(photo.clone());
            Ok(photo)
        })?;
        tracing::debug!(id = %photo.id, %visit_id, "added visit photo");
        Ok(photo)
    }

    pub async fn update_photo(
        &self,
        id: &str,
        update: VisitPhotoUpdate,
    ) -> Result<VisitPhoto, DatabaseError> {
        let current = self
            .get_photo(id)
            .await?
            .ok_or_else(|| DatabaseError::not_found(EntityKind::VisitPhoto, id))?;
        let mut candidate = current.clone();
        if !update.apply_to(&mut candidate) {
            return Ok(current);
        }

        let photo = self.mutate(|snapshot| {
            let photo = snapshot
                .visit_photos
                .iter_mut()
                .find(|p| p.id == id)
                .ok_or_else(|| DatabaseError::not_found(EntityKind::VisitPhoto, id))?;
            update.apply_to(photo);
            Ok(photo.clone())
        })?;
        tracing::debug!(%id, "updated visit photo");
        Ok(photo)
    }

    pub async fn delete_photo(&self, id: &str) -> Result<(), DatabaseError> {
        if self.get_photo(id).await?.is_none() {
            tracing::debug!(%id, "delete of unknown visit photo ignored");
            return Ok(());
        }
        self.mutate(|snapshot| {
            snapshot.visit_photos.retain(|p| p.id != id);
            Ok(())
        })?;
        tracing::debug!(%id, "deleted visit photo");
        Ok(())
    }
}
