use std::sync::Arc;

use thiserror::Error;
use tracing::warn;
use uuid::Uuid;

use crate::application::repos::{
    AddSectionParams, ArtworksRepo, CollectionsRepo, RepoError, SectionsRepo,
};
use crate::domain::entities::ArtworkSectionRecord;
use crate::revalidation::RevalidationCoordinator;

#[derive(Debug, Error)]
pub enum AdminSectionError {
    #[error("{0}")]
    ConstraintViolation(&'static str),
    #[error(transparent)]
    Repo(#[from] RepoError),
}

/// Manages the long-form text sections attached to an artwork.
#[derive(Clone)]
pub struct AdminSectionService {
    sections: Arc<dyn SectionsRepo>,
    artworks: Arc<dyn ArtworksRepo>,
    collections: Arc<dyn CollectionsRepo>,
    revalidation: Option<Arc<RevalidationCoordinator>>,
}

impl AdminSectionService {
    pub fn new(
        sections: Arc<dyn SectionsRepo>,
        artworks: Arc<dyn ArtworksRepo>,
        collections: Arc<dyn CollectionsRepo>,
    ) -> Self {
        Self {
            sections,
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

    pub async fn list(
        &self,
        artwork_id: Uuid,
    ) -> Result<Vec<ArtworkSectionRecord>, AdminSectionError> {
        self.sections
            .list_sections(artwork_id)
            .await
            .map_err(AdminSectionError::from)
    }

    pub async fn add_section(
        &self,
        params: AddSectionParams,
    ) -> Result<ArtworkSectionRecord, AdminSectionError> {
        if params.content.trim().is_empty() {
            return Err(AdminSectionError::ConstraintViolation("content"));
        }
        self.artworks
            .find_by_id(params.artwork_id)
            .await?
            .ok_or(AdminSectionError::ConstraintViolation("artwork_id"))?;

        let record = self.sections.add_section(params).await?;
        self.revalidate_owner(record.artwork_id).await;

        Ok(record)
    }

    pub async fn delete_section(&self, id: Uuid) -> Result<(), AdminSectionError> {
        let record = self
            .sections
            .find_section(id)
            .await?
            .ok_or(AdminSectionError::Repo(RepoError::NotFound))?;

        self.sections.delete_section(id).await?;
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
