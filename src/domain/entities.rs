//! Domain entities mirrored from persistent storage.

use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::types::{ArtType, MediaKind};

/// A named grouping of artworks of the same art type, addressable by its own
/// public page at `/{locale}/{route}/{slug}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionRecord {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub art_type: ArtType,
    pub short_description: Option<String>,
    pub description: Option<String>,
    pub cover_image_url: Option<String>,
    pub sort_order: i32,
    pub is_published: bool,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// A single artwork. Standalone artworks live at
/// `/{locale}/{route}/{slug}`; artworks inside a collection live at
/// `/{locale}/{route}/{collection_slug}/{slug}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtworkRecord {
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
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtworkMediaRecord {
    pub id: Uuid,
    pub artwork_id: Uuid,
    pub media_url: String,
    pub media_kind: MediaKind,
    pub caption: Option<String>,
    pub sort_order: i32,
    pub created_at: OffsetDateTime,
}

/// An ordered rich-text block on an artwork's detail page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtworkSectionRecord {
    pub id: Uuid,
    pub artwork_id: Uuid,
    pub title: Option<String>,
    pub content: String,
    pub sort_order: i32,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubscriberRecord {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: OffsetDateTime,
}
