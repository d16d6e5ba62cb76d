//! In-memory repositories and wiring helpers shared by integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use time::OffsetDateTime;
use uuid::Uuid;

use atelier::application::admin::{
    AdminArtworkService, AdminCollectionService, AdminMediaService, AdminSectionService,
};
use atelier::application::newsletter::NewsletterService;
use atelier::application::repos::{
    AddMediaParams, AddSectionParams, ArtworkQueryFilter, ArtworksRepo, ArtworksWriteRepo,
    CollectionsRepo, CollectionsWriteRepo, CreateArtworkParams, CreateCollectionParams, MediaRepo,
    RepoError, SectionsRepo, SubscribersRepo, UpdateArtworkParams, UpdateCollectionParams,
};
use atelier::domain::entities::{
    ArtworkMediaRecord, ArtworkRecord, ArtworkSectionRecord, CollectionRecord, SubscriberRecord,
};
use atelier::domain::locale::Locale;
use atelier::domain::types::ArtType;
use atelier::revalidation::{
    RecordingInvalidator, RevalidationConfig, RevalidationCoordinator,
};

#[derive(Default)]
pub struct MemoryRepos {
    artworks: Mutex<Vec<ArtworkRecord>>,
    collections: Mutex<Vec<CollectionRecord>>,
    media: Mutex<Vec<ArtworkMediaRecord>>,
    sections: Mutex<Vec<ArtworkSectionRecord>>,
    subscribers: Mutex<Vec<SubscriberRecord>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MemoryRepos {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn seed_collection(&self, art_type: ArtType, title: &str, slug: &str) -> CollectionRecord {
        let now = OffsetDateTime::now_utc();
        let record = CollectionRecord {
            id: Uuid::new_v4(),
            title: title.to_string(),
            slug: slug.to_string(),
            art_type,
            short_description: None,
            description: None,
            cover_image_url: None,
            sort_order: 0,
            is_published: true,
            created_at: now,
            updated_at: now,
        };
        lock(&self.collections).push(record.clone());
        record
    }

    pub fn seed_artwork(
        &self,
        art_type: ArtType,
        title: &str,
        slug: &str,
        collection_id: Option<Uuid>,
    ) -> ArtworkRecord {
        let now = OffsetDateTime::now_utc();
        let record = ArtworkRecord {
            id: Uuid::new_v4(),
            title: title.to_string(),
            slug: slug.to_string(),
            art_type,
            collection_id,
            short_description: None,
            description: None,
            creation_date: None,
            dimensions: None,
            medium: None,
            cover_image_url: None,
            sort_order: 0,
            is_published: true,
            is_featured_home: false,
            created_at: now,
            updated_at: now,
        };
        lock(&self.artworks).push(record.clone());
        record
    }
}

#[async_trait]
impl ArtworksRepo for MemoryRepos {
    async fn list_artworks(
        &self,
        filter: &ArtworkQueryFilter,
    ) -> Result<Vec<ArtworkRecord>, RepoError> {
        let artworks = lock(&self.artworks);
        Ok(artworks
            .iter()
            .filter(|a| filter.art_type.is_none_or(|t| a.art_type == t))
            .filter(|a| {
                filter
                    .collection_id
                    .is_none_or(|id| a.collection_id == Some(id))
            })
            .filter(|a| !filter.published_only || a.is_published)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ArtworkRecord>, RepoError> {
        Ok(lock(&self.artworks).iter().find(|a| a.id == id).cloned())
    }

    async fn find_by_slug(
        &self,
        art_type: ArtType,
        slug: &str,
    ) -> Result<Option<ArtworkRecord>, RepoError> {
        Ok(lock(&self.artworks)
            .iter()
            .find(|a| a.art_type == art_type && a.slug == slug)
            .cloned())
    }
}

#[async_trait]
impl ArtworksWriteRepo for MemoryRepos {
    async fn create_artwork(
        &self,
        params: CreateArtworkParams,
    ) -> Result<ArtworkRecord, RepoError> {
        let mut artworks = lock(&self.artworks);
        if artworks
            .iter()
            .any(|a| a.art_type == params.art_type && a.slug == params.slug)
        {
            return Err(RepoError::Duplicate {
                constraint: "artworks_art_type_slug_key".to_string(),
            });
        }
        let now = OffsetDateTime::now_utc();
        let record = ArtworkRecord {
            id: Uuid::new_v4(),
            title: params.title,
            slug: params.slug,
            art_type: params.art_type,
            collection_id: params.collection_id,
            short_description: params.short_description,
            description: params.description,
            creation_date: params.creation_date,
            dimensions: params.dimensions,
            medium: params.medium,
            cover_image_url: params.cover_image_url,
            sort_order: params.sort_order,
            is_published: params.is_published,
            is_featured_home: params.is_featured_home,
            created_at: now,
            updated_at: now,
        };
        artworks.push(record.clone());
        Ok(record)
    }

    async fn update_artwork(
        &self,
        params: UpdateArtworkParams,
    ) -> Result<ArtworkRecord, RepoError> {
        let mut artworks = lock(&self.artworks);
        let artwork = artworks
            .iter_mut()
            .find(|a| a.id == params.id)
            .ok_or(RepoError::NotFound)?;
        artwork.title = params.title;
        artwork.slug = params.slug;
        artwork.art_type = params.art_type;
        artwork.collection_id = params.collection_id;
        artwork.short_description = params.short_description;
        artwork.description = params.description;
        artwork.creation_date = params.creation_date;
        artwork.dimensions = params.dimensions;
        artwork.medium = params.medium;
        artwork.cover_image_url = params.cover_image_url;
        artwork.sort_order = params.sort_order;
        artwork.is_published = params.is_published;
        artwork.is_featured_home = params.is_featured_home;
        artwork.updated_at = OffsetDateTime::now_utc();
        Ok(artwork.clone())
    }

    async fn delete_artwork(&self, id: Uuid) -> Result<(), RepoError> {
        let mut artworks = lock(&self.artworks);
        let before = artworks.len();
        artworks.retain(|a| a.id != id);
        if artworks.len() == before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl CollectionsRepo for MemoryRepos {
    async fn list_collections(
        &self,
        art_type: Option<ArtType>,
    ) -> Result<Vec<CollectionRecord>, RepoError> {
        Ok(lock(&self.collections)
            .iter()
            .filter(|c| art_type.is_none_or(|t| c.art_type == t))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<CollectionRecord>, RepoError> {
        Ok(lock(&self.collections).iter().find(|c| c.id == id).cloned())
    }

    async fn find_by_slug(
        &self,
        art_type: ArtType,
        slug: &str,
    ) -> Result<Option<CollectionRecord>, RepoError> {
        Ok(lock(&self.collections)
            .iter()
            .find(|c| c.art_type == art_type && c.slug == slug)
            .cloned())
    }
}

#[async_trait]
impl CollectionsWriteRepo for MemoryRepos {
    async fn create_collection(
        &self,
        params: CreateCollectionParams,
    ) -> Result<CollectionRecord, RepoError> {
        let mut collections = lock(&self.collections);
        if collections
            .iter()
            .any(|c| c.art_type == params.art_type && c.slug == params.slug)
        {
            return Err(RepoError::Duplicate {
                constraint: "collections_art_type_slug_key".to_string(),
            });
        }
        let now = OffsetDateTime::now_utc();
        let record = CollectionRecord {
            id: Uuid::new_v4(),
            title: params.title,
            slug: params.slug,
            art_type: params.art_type,
            short_description: params.short_description,
            description: params.description,
            cover_image_url: params.cover_image_url,
            sort_order: params.sort_order,
            is_published: params.is_published,
            created_at: now,
            updated_at: now,
        };
        collections.push(record.clone());
        Ok(record)
    }

    async fn update_collection(
        &self,
        params: UpdateCollectionParams,
    ) -> Result<CollectionRecord, RepoError> {
        let mut collections = lock(&self.collections);
        let collection = collections
            .iter_mut()
            .find(|c| c.id == params.id)
            .ok_or(RepoError::NotFound)?;
        collection.title = params.title;
        collection.slug = params.slug;
        collection.art_type = params.art_type;
        collection.short_description = params.short_description;
        collection.description = params.description;
        collection.cover_image_url = params.cover_image_url;
        collection.sort_order = params.sort_order;
        collection.is_published = params.is_published;
        collection.updated_at = OffsetDateTime::now_utc();
        Ok(collection.clone())
    }

    async fn delete_collection(&self, id: Uuid) -> Result<(), RepoError> {
        let mut collections = lock(&self.collections);
        let before = collections.len();
        collections.retain(|c| c.id != id);
        if collections.len() == before {
            return Err(RepoError::NotFound);
        }
        // Mirror the FK's ON DELETE SET NULL.
        for artwork in lock(&self.artworks).iter_mut() {
            if artwork.collection_id == Some(id) {
                artwork.collection_id = None;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl MediaRepo for MemoryRepos {
    async fn list_media(&self, artwork_id: Uuid) -> Result<Vec<ArtworkMediaRecord>, RepoError> {
        Ok(lock(&self.media)
            .iter()
            .filter(|m| m.artwork_id == artwork_id)
            .cloned()
            .collect())
    }

    async fn find_media(&self, id: Uuid) -> Result<Option<ArtworkMediaRecord>, RepoError> {
        Ok(lock(&self.media).iter().find(|m| m.id == id).cloned())
    }

    async fn add_media(&self, params: AddMediaParams) -> Result<ArtworkMediaRecord, RepoError> {
        let record = ArtworkMediaRecord {
            id: Uuid::new_v4(),
            artwork_id: params.artwork_id,
            media_url: params.media_url,
            media_kind: params.media_kind,
            caption: params.caption,
            sort_order: params.sort_order,
            created_at: OffsetDateTime::now_utc(),
        };
        lock(&self.media).push(record.clone());
        Ok(record)
    }

    async fn delete_media(&self, id: Uuid) -> Result<(), RepoError> {
        let mut media = lock(&self.media);
        let before = media.len();
        media.retain(|m| m.id != id);
        if media.len() == before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl SectionsRepo for MemoryRepos {
    async fn list_sections(
        &self,
        artwork_id: Uuid,
    ) -> Result<Vec<ArtworkSectionRecord>, RepoError> {
        Ok(lock(&self.sections)
            .iter()
            .filter(|s| s.artwork_id == artwork_id)
            .cloned()
            .collect())
    }

    async fn find_section(&self, id: Uuid) -> Result<Option<ArtworkSectionRecord>, RepoError> {
        Ok(lock(&self.sections).iter().find(|s| s.id == id).cloned())
    }

    async fn add_section(
        &self,
        params: AddSectionParams,
    ) -> Result<ArtworkSectionRecord, RepoError> {
        let record = ArtworkSectionRecord {
            id: Uuid::new_v4(),
            artwork_id: params.artwork_id,
            title: params.title,
            content: params.content,
            sort_order: params.sort_order,
            created_at: OffsetDateTime::now_utc(),
        };
        lock(&self.sections).push(record.clone());
        Ok(record)
    }

    async fn delete_section(&self, id: Uuid) -> Result<(), RepoError> {
        let mut sections = lock(&self.sections);
        let before = sections.len();
        sections.retain(|s| s.id != id);
        if sections.len() == before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl SubscribersRepo for MemoryRepos {
    async fn insert_subscriber(
        &self,
        name: &str,
        email: &str,
    ) -> Result<SubscriberRecord, RepoError> {
        let mut subscribers = lock(&self.subscribers);
        let normalized = email.to_lowercase();
        if subscribers.iter().any(|s| s.email == normalized) {
            return Err(RepoError::Duplicate {
                constraint: "newsletter_subscribers_email_key".to_string(),
            });
        }
        let record = SubscriberRecord {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: normalized,
            created_at: OffsetDateTime::now_utc(),
        };
        subscribers.push(record.clone());
        Ok(record)
    }
}

pub fn locales(codes: &[&str]) -> Vec<Locale> {
    codes
        .iter()
        .map(|code| Locale::new(code).expect("valid locale"))
        .collect()
}

pub fn coordinator(
    recorder: Arc<RecordingInvalidator>,
    codes: &[&str],
) -> Arc<RevalidationCoordinator> {
    let config = RevalidationConfig {
        enabled: true,
        locales: locales(codes),
        ..Default::default()
    };
    Arc::new(RevalidationCoordinator::new(config, recorder))
}

pub struct Harness {
    pub repos: Arc<MemoryRepos>,
    pub recorder: Arc<RecordingInvalidator>,
    pub artworks: AdminArtworkService,
    pub collections: AdminCollectionService,
    pub media: AdminMediaService,
    pub sections: AdminSectionService,
    pub newsletter: NewsletterService,
}

pub fn harness(codes: &[&str]) -> Harness {
    let repos = MemoryRepos::new();
    let recorder = Arc::new(RecordingInvalidator::new());
    let coordinator = coordinator(recorder.clone(), codes);

    let artworks = AdminArtworkService::new(repos.clone(), repos.clone(), repos.clone())
        .with_revalidation_opt(Some(coordinator.clone()));
    let collections = AdminCollectionService::new(repos.clone(), repos.clone())
        .with_revalidation_opt(Some(coordinator.clone()));
    let media = AdminMediaService::new(repos.clone(), repos.clone(), repos.clone())
        .with_revalidation_opt(Some(coordinator.clone()));
    let sections = AdminSectionService::new(repos.clone(), repos.clone(), repos.clone())
        .with_revalidation_opt(Some(coordinator));
    let newsletter = NewsletterService::new(repos.clone());

    Harness {
        repos,
        recorder,
        artworks,
        collections,
        media,
        sections,
        newsletter,
    }
}
