use std::sync::Arc;

use thiserror::Error;
use uuid::Uuid;

use crate::application::repos::{
    ArtworkQueryFilter, ArtworksRepo, ArtworksWriteRepo, CollectionsRepo, CreateArtworkParams,
    RepoError, UpdateArtworkParams,
};
use crate::domain::entities::{ArtworkRecord, CollectionRecord};
use crate::domain::slug::{SlugAsyncError, SlugError, generate_unique_slug_async};
use crate::domain::types::ArtType;
use crate::revalidation::{RevalidationCoordinator, RevalidationRequest};

#[derive(Debug, Error)]
pub enum AdminArtworkError {
    #[error("{0}")]
    ConstraintViolation(&'static str),
    #[error(transparent)]
    Repo(#[from] RepoError),
}

#[derive(Debug, Clone)]
pub struct SaveArtworkCommand {
    pub title: String,
    pub art_type: ArtType,
    pub collection_id: Option<Uuid>,
    pub short_description: Option<String>,
    pub description: Option<String>,
    pub creation_date: Option<String>,
    pub dimensions: Option<String>,
    pub medium: Option<String>,
    pub cover_image_url: Option<String>,
    pub sort_order: i32,
    pub is_published: bool,
    pub is_featured_home: bool,
}

#[derive(Clone)]
pub struct AdminArtworkService {
    reader: Arc<dyn ArtworksRepo>,
    writer: Arc<dyn ArtworksWriteRepo>,
    collections: Arc<dyn CollectionsRepo>,
    revalidation: Option<Arc<RevalidationCoordinator>>,
}

impl AdminArtworkService {
    pub fn new(
        reader: Arc<dyn ArtworksRepo>,
        writer: Arc<dyn ArtworksWriteRepo>,
        collections: Arc<dyn CollectionsRepo>,
    ) -> Self {
        Self {
            reader,
            writer,
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
        filter: &ArtworkQueryFilter,
    ) -> Result<Vec<ArtworkRecord>, AdminArtworkError> {
        self.reader
            .list_artworks(filter)
            .await
            .map_err(AdminArtworkError::from)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<ArtworkRecord>, AdminArtworkError> {
        self.reader
            .find_by_id(id)
            .await
            .map_err(AdminArtworkError::from)
    }

    pub async fn create_artwork(
        &self,
        command: SaveArtworkCommand,
    ) -> Result<ArtworkRecord, AdminArtworkError> {
        ensure_non_empty(&command.title, "title")?;

        let collection = self
            .resolve_collection(command.art_type, command.collection_id)
            .await?;
        let slug = self
            .generate_slug(&command.title, command.art_type, None)
            .await?;

        let params = CreateArtworkParams {
            title: command.title,
            slug,
            art_type: command.art_type,
            collection_id: command.collection_id,
            short_description: command.short_description,
            description: command.description,
            creation_date: command.creation_date,
            dimensions: command.dimensions,
            medium: command.medium,
            cover_image_url: command.cover_image_url,
            sort_order: command.sort_order,
            is_published: command.is_published,
            is_featured_home: command.is_featured_home,
        };

        let artwork = self.writer.create_artwork(params).await?;

        if let Some(coordinator) = &self.revalidation {
            coordinator
                .artwork_saved(
                    artwork.art_type,
                    &artwork.slug,
                    collection.as_ref().map(|c| c.slug.as_str()),
                )
                .await;
        }

        Ok(artwork)
    }

    pub async fn update_artwork(
        &self,
        id: Uuid,
        command: SaveArtworkCommand,
    ) -> Result<ArtworkRecord, AdminArtworkError> {
        ensure_non_empty(&command.title, "title")?;

        let old = self
            .reader
            .find_by_id(id)
            .await?
            .ok_or(AdminArtworkError::Repo(RepoError::NotFound))?;
        if old.art_type != command.art_type {
            return Err(AdminArtworkError::ConstraintViolation("art_type"));
        }

        let collection = self
            .resolve_collection(command.art_type, command.collection_id)
            .await?;

        // The slug follows the title. An unchanged title keeps the slug
        // stable so bookmarked paths survive metadata-only edits.
        let slug = if command.title == old.title {
            old.slug.clone()
        } else {
            self.generate_slug(&command.title, command.art_type, Some(id))
                .await?
        };

        let identity_changed = slug != old.slug || command.collection_id != old.collection_id;
        let old_collection_slug = if identity_changed {
            match old.collection_id {
                Some(collection_id) => self
                    .collections
                    .find_by_id(collection_id)
                    .await?
                    .map(|c| c.slug),
                None => None,
            }
        } else {
            None
        };

        let params = UpdateArtworkParams {
            id,
            title: command.title,
            slug,
            art_type: command.art_type,
            collection_id: command.collection_id,
            short_description: command.short_description,
            description: command.description,
            creation_date: command.creation_date,
            dimensions: command.dimensions,
            medium: command.medium,
            cover_image_url: command.cover_image_url,
            sort_order: command.sort_order,
            is_published: command.is_published,
            is_featured_home: command.is_featured_home,
        };

        let artwork = self.writer.update_artwork(params).await?;

        if let Some(coordinator) = &self.revalidation {
            let mut request = RevalidationRequest::artwork(
                artwork.art_type,
                &artwork.slug,
                collection.as_ref().map(|c| c.slug.as_str()),
            );
            if identity_changed {
                request = request
                    .with_previous(Some(old.slug.as_str()), old_collection_slug.as_deref());
            }
            coordinator.run(request).await;
        }

        Ok(artwork)
    }

    pub async fn delete_artwork(&self, id: Uuid) -> Result<(), AdminArtworkError> {
        let artwork = self
            .reader
            .find_by_id(id)
            .await?
            .ok_or(AdminArtworkError::Repo(RepoError::NotFound))?;
        let collection_slug = match artwork.collection_id {
            Some(collection_id) => self
                .collections
                .find_by_id(collection_id)
                .await?
                .map(|c| c.slug),
            None => None,
        };

        self.writer.delete_artwork(id).await?;

        // The deleted row's coordinates are the stale paths to drop.
        if let Some(coordinator) = &self.revalidation {
            coordinator
                .artwork_saved(artwork.art_type, &artwork.slug, collection_slug.as_deref())
                .await;
        }

        Ok(())
    }

    async fn resolve_collection(
        &self,
        art_type: ArtType,
        collection_id: Option<Uuid>,
    ) -> Result<Option<CollectionRecord>, AdminArtworkError> {
        let Some(collection_id) = collection_id else {
            return Ok(None);
        };

        let collection = self
            .collections
            .find_by_id(collection_id)
            .await?
            .ok_or(AdminArtworkError::ConstraintViolation("collection_id"))?;
        if collection.art_type != art_type {
            return Err(AdminArtworkError::ConstraintViolation("collection_id"));
        }

        Ok(Some(collection))
    }

    async fn generate_slug(
        &self,
        title: &str,
        art_type: ArtType,
        existing_id: Option<Uuid>,
    ) -> Result<String, AdminArtworkError> {
        let reader = self.reader.clone();
        match generate_unique_slug_async(title, move |candidate| {
            let reader = reader.clone();
            let candidate = candidate.to_string();
            async move {
                reader
                    .find_by_slug(art_type, &candidate)
                    .await
                    .map(|existing| match existing {
                        Some(record) => existing_id == Some(record.id),
                        None => true,
                    })
            }
        })
        .await
        {
            Ok(slug) => Ok(slug),
            Err(SlugAsyncError::Slug(err)) => match err {
                SlugError::EmptyInput | SlugError::Unrepresentable { .. } => {
                    Err(AdminArtworkError::ConstraintViolation("title"))
                }
                SlugError::Exhausted { .. } => {
                    Err(AdminArtworkError::ConstraintViolation("slug"))
                }
            },
            Err(SlugAsyncError::Predicate(err)) => Err(AdminArtworkError::Repo(err)),
        }
    }
}

fn ensure_non_empty(value: &str, field: &'static str) -> Result<(), AdminArtworkError> {
    if value.trim().is_empty() {
        return Err(AdminArtworkError::ConstraintViolation(field));
    }
    Ok(())
}
