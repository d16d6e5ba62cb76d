//! Repository traits describing persistence adapters.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::entities::{
    ArtworkMediaRecord, ArtworkRecord, ArtworkSectionRecord, CollectionRecord, SubscriberRecord,
};
use crate::domain::types::{ArtType, MediaKind};

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("persistence error: {0}")]
    Persistence(String),
    #[error("duplicate record violates unique constraint `{constraint}`")]
    Duplicate { constraint: String },
    #[error("resource not found")]
    NotFound,
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
    #[error("integrity error: {message}")]
    Integrity { message: String },
    #[error("database timeout")]
    Timeout,
}

impl RepoError {
    pub fn from_persistence(err: impl std::fmt::Display) -> Self {
        Self::Persistence(err.to_string())
    }
}

#[derive(Debug, Clone, Default)]
pub struct ArtworkQueryFilter {
    pub art_type: Option<ArtType>,
    pub collection_id: Option<Uuid>,
    pub published_only: bool,
}

#[derive(Debug, Clone)]
pub struct CreateArtworkParams {
    pub title: String,
    pub slug: String,
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

#[derive(Debug, Clone)]
pub struct UpdateArtworkParams {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
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

#[async_trait]
pub trait ArtworksRepo: Send + Sync {
    async fn list_artworks(
        &self,
        filter: &ArtworkQueryFilter,
    ) -> Result<Vec<ArtworkRecord>, RepoError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ArtworkRecord>, RepoError>;

    async fn find_by_slug(
        &self,
        art_type: ArtType,
        slug: &str,
    ) -> Result<Option<ArtworkRecord>, RepoError>;
}

#[async_trait]
pub trait ArtworksWriteRepo: Send + Sync {
    async fn create_artwork(&self, params: CreateArtworkParams)
    -> Result<ArtworkRecord, RepoError>;

    async fn update_artwork(&self, params: UpdateArtworkParams)
    -> Result<ArtworkRecord, RepoError>;

    async fn delete_artwork(&self, id: Uuid) -> Result<(), RepoError>;
}

#[derive(Debug, Clone)]
pub struct CreateCollectionParams {
    pub title: String,
    pub slug: String,
    pub art_type: ArtType,
    pub short_description: Option<String>,
    pub description: Option<String>,
    pub cover_image_url: Option<String>,
    pub sort_order: i32,
    pub is_published: bool,
}

#[derive(Debug, Clone)]
pub struct UpdateCollectionParams {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub art_type: ArtType,
    pub short_description: Option<String>,
    pub description: Option<String>,
    pub cover_image_url: Option<String>,
    pub sort_order: i32,
    pub is_published: bool,
}

#[async_trait]
pub trait CollectionsRepo: Send + Sync {
    async fn list_collections(
        &self,
        art_type: Option<ArtType>,
    ) -> Result<Vec<CollectionRecord>, RepoError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<CollectionRecord>, RepoError>;

    async fn find_by_slug(
        &self,
        art_type: ArtType,
        slug: &str,
    ) -> Result<Option<CollectionRecord>, RepoError>;
}

#[async_trait]
pub trait CollectionsWriteRepo: Send + Sync {
    async fn create_collection(
        &self,
        params: CreateCollectionParams,
    ) -> Result<CollectionRecord, RepoError>;

    async fn update_collection(
        &self,
        params: UpdateCollectionParams,
    ) -> Result<CollectionRecord, RepoError>;

    async fn delete_collection(&self, id: Uuid) -> Result<(), RepoError>;
}

#[derive(Debug, Clone)]
pub struct AddMediaParams {
    pub artwork_id: Uuid,
    pub media_url: String,
    pub media_kind: MediaKind,
    pub caption: Option<String>,
    pub sort_order: i32,
}

#[async_trait]
pub trait MediaRepo: Send + Sync {
    async fn list_media(&self, artwork_id: Uuid) -> Result<Vec<ArtworkMediaRecord>, RepoError>;

    async fn find_media(&self, id: Uuid) -> Result<Option<ArtworkMediaRecord>, RepoError>;

    async fn add_media(&self, params: AddMediaParams) -> Result<ArtworkMediaRecord, RepoError>;

    async fn delete_media(&self, id: Uuid) -> Result<(), RepoError>;
}

#[derive(Debug, Clone)]
pub struct AddSectionParams {
    pub artwork_id: Uuid,
    pub title: Option<String>,
    pub content: String,
    pub sort_order: i32,
}

#[async_trait]
pub trait SectionsRepo: Send + Sync {
    async fn list_sections(
        &self,
        artwork_id: Uuid,
    ) -> Result<Vec<ArtworkSectionRecord>, RepoError>;

    async fn find_section(&self, id: Uuid) -> Result<Option<ArtworkSectionRecord>, RepoError>;

    async fn add_section(
        &self,
        params: AddSectionParams,
    ) -> Result<ArtworkSectionRecord, RepoError>;

    async fn delete_section(&self, id: Uuid) -> Result<(), RepoError>;
}

#[async_trait]
pub trait SubscribersRepo: Send + Sync {
    async fn insert_subscriber(
        &self,
        name: &str,
        email: &str,
    ) -> Result<SubscriberRecord, RepoError>;
}
