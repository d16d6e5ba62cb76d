//! Shared domain enumerations aligned with persisted database enums.

use serde::{Deserialize, Serialize};

/// Content category of an artwork or collection.
///
/// Each art type maps to a fixed public URL route segment; the mapping is
/// part of the site's URL contract and must stay stable across renames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "art_type", rename_all = "snake_case")]
pub enum ArtType {
    Drawing,
    Painting,
    Photography,
    Poem,
}

impl ArtType {
    /// Every art type, in display order.
    pub const ALL: [ArtType; 4] = [
        ArtType::Drawing,
        ArtType::Painting,
        ArtType::Photography,
        ArtType::Poem,
    ];

    /// The public URL route segment for this art type.
    pub fn route_segment(self) -> &'static str {
        match self {
            ArtType::Drawing => "drawings",
            ArtType::Painting => "paintings",
            ArtType::Photography => "photography",
            ArtType::Poem => "poems",
        }
    }

    /// Reverse lookup from a URL route segment.
    pub fn from_route_segment(segment: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|art_type| art_type.route_segment() == segment)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ArtType::Drawing => "drawing",
            ArtType::Painting => "painting",
            ArtType::Photography => "photography",
            ArtType::Poem => "poem",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "media_kind", rename_all = "snake_case")]
pub enum MediaKind {
    Image,
    Video,
}
