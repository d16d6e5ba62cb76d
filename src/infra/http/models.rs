use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::types::{ArtType, MediaKind};

#[derive(Debug, Deserialize, Serialize)]
pub struct ArtworkSaveRequest {
    pub title: String,
    pub art_type: ArtType,
    pub collection_id: Option<Uuid>,
    pub short_description: Option<String>,
    pub description: Option<String>,
    pub creation_date: Option<String>,
    pub dimensions: Option<String>,
    pub medium: Option<String>,
    pub cover_image_url: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub is_featured_home: bool,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct CollectionSaveRequest {
    pub title: String,
    pub art_type: ArtType,
    pub short_description: Option<String>,
    pub description: Option<String>,
    pub cover_image_url: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub is_published: bool,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct MediaAddRequest {
    pub media_url: String,
    pub media_kind: MediaKind,
    pub caption: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct SectionAddRequest {
    pub title: Option<String>,
    pub content: String,
    #[serde(default)]
    pub sort_order: i32,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct SubscribeRequest {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ArtworkListQuery {
    pub art_type: Option<ArtType>,
    pub collection_id: Option<Uuid>,
    #[serde(default)]
    pub published: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct CollectionListQuery {
    pub art_type: Option<ArtType>,
}
