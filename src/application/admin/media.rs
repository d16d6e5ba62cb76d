use std::sync::Arc;

use thiserror::Error;
use tracing::warn;
use uuid::Uuid;

use crate::application::repos::{
    AddMediaParams, ArtworksRepo, CollectionsRepo, MediaRepo, RepoError,
};
use crate::domain::entities::ArtworkMediaRecord;
use crate::revalidation::RevalidationCoordinator;

#[derive(Debug, Error)]
pub enum AdminMediaError {
    #[error("{0}")]
    ConstraintViolation(&'static str),
    #[error(transparent)]
    Repo(#[from] RepoError),
}

/// Manages the gallery items attached to an artwork. Mutations revalidate
/// the owning artwork's pages since media renders inline there.
#[derive(Clone)]
pub struct AdminMediaService {
    media: Arc<dyn MediaRepo>,
    artworks: Arc<dyn ArtworksRepo>,
    collections: Arc<dyn CollectionsRepo>,
    revalidation: Option<Arc<RevalidationCoordinator>>,
}

impl AdminMediaService {
    pub fn new(
        media: Arc<dyn MediaRepo>,
        artworks: Arc<dyn ArtworksRepo>,
        collections: Arc<dyn CollectionsRepo>,
    ) -> Self {
        Self {
            media,
            artworks,
            collections,
            revalidation: None,
        }
    }

    /// Set the revalidation coordinator for this service (optional).
    pub fn with_revalidation_opt(
        mut self,
        coordinator: Option<Arc<RevalidationCoordinator>>,
    ) -> Self {
        self.revalidation = coordinator;
        self
    }

    pub async fn list(&self, artwork_id: Uuid) -> Result<Vec<ArtworkMediaRecord>, AdminMediaError> {
        self.media
            .list_media(artwork_id)
            .await
            .map_err(AdminMediaError::from)
    }

    pub async fn add_media(
        &self,
        params: AddMediaParams,
    ) -> Result<ArtworkMediaRecord, AdminMediaError> {
        if params.media_url.trim().is_empty() {
            return Err(AdminMediaError::ConstraintViolation("media_url"));
        }
        self.artworks
            .find_by_id(params.artwork_id)
            .await?
            .ok_or(AdminMediaError::ConstraintViolation("artwork_id"))?;

        let record = self.media.add_media(params).await?;
        self.revalidate_owner(record.artwork_id).await;

        Ok(record)
    }

    pub async fn delete_media(&self, id: Uuid) -> Result<(), AdminMediaError> {
        let record = self
            .media
            .find_media(id)
            .await?
            .ok_or(AdminMediaError::Repo(RepoError::NotFound))?;

        self.media.delete_media(id).await?;
        self.revalidate_owner(record.artwork_id).await;

        Ok(())
    }

    // Runs after the write committed; lookup failures here must never reach
    // the caller, so they are logged and the pass is skipped.
    async fn revalidate_owner(&self, artwork_id: Uuid) {
        let Some(coordinator) = &self.revalidation else {
            return;
        };
        let artwork = match self.artworks.find_by_id(artwork_id).await {
            Ok(Some(artwork)) => artwork,
            Ok(None) => return,
            Err(error) => {
                warn!(%artwork_id, %error, "Skipping revalidation: owner lookup failed");
                return;
            }
        };
        let collection_slug = match artwork.collection_id {
            Some(collection_id) => match self.collections.find_by_id(collection_id).await {
                Ok(collection) => collection.map(|c| c.slug),
                Err(error) => {
                    warn!(%collection_id, %error, "Skipping revalidation: collection lookup failed");
                    return;
                }
            },
            None => None,
        };

        coordinator
            .artwork_saved(artwork.art_type, &artwork.slug, collection_slug.as_deref())
            .await;
    }
}
