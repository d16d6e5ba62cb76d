use std::sync::Arc;

use thiserror::Error;
use uuid::Uuid;

use crate::application::repos::{
    CollectionsRepo, CollectionsWriteRepo, CreateCollectionParams, RepoError,
    UpdateCollectionParams,
};
use crate::domain::entities::CollectionRecord;
use crate::domain::slug::{SlugAsyncError, SlugError, generate_unique_slug_async};
use crate::domain::types::ArtType;
use crate::revalidation::{RevalidationCoordinator, RevalidationRequest};

#[derive(Debug, Error)]
pub enum AdminCollectionError {
    #[error("{0}")]
    ConstraintViolation(&'static str),
    #[error(transparent)]
    Repo(#[from] RepoError),
}

#[derive(Debug, Clone)]
pub struct SaveCollectionCommand {
    pub title: String,
    pub art_type: ArtType,
    pub short_description: Option<String>,
    pub description: Option<String>,
    pub cover_image_url: Option<String>,
    pub sort_order: i32,
    pub is_published: bool,
}

#[derive(Clone)]
pub struct AdminCollectionService {
    reader: Arc<dyn CollectionsRepo>,
    writer: Arc<dyn CollectionsWriteRepo>,
    revalidation: Option<Arc<RevalidationCoordinator>>,
}

impl AdminCollectionService {
    pub fn new(reader: Arc<dyn CollectionsRepo>, writer: Arc<dyn CollectionsWriteRepo>) -> Self {
        Self {
            reader,
            writer,
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
        art_type: Option<ArtType>,
    ) -> Result<Vec<CollectionRecord>, AdminCollectionError> {
        self.reader
            .list_collections(art_type)
            .await
            .map_err(AdminCollectionError::from)
    }

    pub async fn create_collection(
        &self,
        command: SaveCollectionCommand,
    ) -> Result<CollectionRecord, AdminCollectionError> {
        ensure_non_empty(&command.title, "title")?;

        let slug = self
            .generate_slug(&command.title, command.art_type, None)
            .await?;

        let params = CreateCollectionParams {
            title: command.title,
            slug,
            art_type: command.art_type,
            short_description: command.short_description,
            description: command.description,
            cover_image_url: command.cover_image_url,
            sort_order: command.sort_order,
            is_published: command.is_published,
        };

        let collection = self.writer.create_collection(params).await?;

        if let Some(coordinator) = &self.revalidation {
            coordinator
                .collection_saved(collection.art_type, &collection.slug)
                .await;
        }

        Ok(collection)
    }

    pub async fn update_collection(
        &self,
        id: Uuid,
        command: SaveCollectionCommand,
    ) -> Result<CollectionRecord, AdminCollectionError> {
        ensure_non_empty(&command.title, "title")?;

        let old = self
            .reader
            .find_by_id(id)
            .await?
            .ok_or(AdminCollectionError::Repo(RepoError::NotFound))?;
        if old.art_type != command.art_type {
            return Err(AdminCollectionError::ConstraintViolation("art_type"));
        }

        let slug = if command.title == old.title {
            old.slug.clone()
        } else {
            self.generate_slug(&command.title, command.art_type, Some(id))
                .await?
        };

        let params = UpdateCollectionParams {
            id,
            title: command.title,
            slug,
            art_type: command.art_type,
            short_description: command.short_description,
            description: command.description,
            cover_image_url: command.cover_image_url,
            sort_order: command.sort_order,
            is_published: command.is_published,
        };

        let collection = self.writer.update_collection(params).await?;

        if let Some(coordinator) = &self.revalidation {
            let mut request =
                RevalidationRequest::collection(collection.art_type, &collection.slug);
            if collection.slug != old.slug {
                request = request.with_previous(None, Some(old.slug.as_str()));
            }
            coordinator.run(request).await;
        }

        Ok(collection)
    }

    pub async fn delete_collection(&self, id: Uuid) -> Result<(), AdminCollectionError> {
        let collection = self
            .reader
            .find_by_id(id)
            .await?
            .ok_or(AdminCollectionError::Repo(RepoError::NotFound))?;

        self.writer.delete_collection(id).await?;

        // Member artworks keep their rows with a cleared parent; the
        // collection page and indices are what go stale.
        if let Some(coordinator) = &self.revalidation {
            coordinator
                .collection_saved(collection.art_type, &collection.slug)
                .await;
        }

        Ok(())
    }

    async fn generate_slug(
        &self,
        title: &str,
        art_type: ArtType,
        existing_id: Option<Uuid>,
    ) -> Result<String, AdminCollectionError> {
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
                    Err(AdminCollectionError::ConstraintViolation("title"))
                }
                SlugError::Exhausted { .. } => {
                    Err(AdminCollectionError::ConstraintViolation("slug"))
                }
            },
            Err(SlugAsyncError::Predicate(err)) => Err(AdminCollectionError::Repo(err)),
        }
    }
}

fn ensure_non_empty(value: &str, field: &'static str) -> Result<(), AdminCollectionError> {
    if value.trim().is_empty() {
        return Err(AdminCollectionError::ConstraintViolation(field));
    }
    Ok(())
}
