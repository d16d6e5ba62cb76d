//! Revalidation requests describing a single content mutation.

use crate::domain::types::ArtType;

/// Before/after coordinates of one content mutation.
///
/// `slug` is the item-level slug and is `None` for collection-only mutations.
/// Absence is modeled explicitly rather than with an empty-string sentinel,
/// so a collection event can never collide with an artwork path.
///
/// `old_slug` and `old_collection_slug` are set only when the mutation changed
/// identity: a title edit that regenerated the slug, or a move between
/// collections (or out to standalone).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevalidationRequest {
    pub art_type: ArtType,
    pub slug: Option<String>,
    pub collection_slug: Option<String>,
    pub old_slug: Option<String>,
    pub old_collection_slug: Option<String>,
}

impl RevalidationRequest {
    /// A mutation of an artwork at its current coordinates.
    pub fn artwork(art_type: ArtType, slug: &str, collection_slug: Option<&str>) -> Self {
        Self {
            art_type,
            slug: Some(slug.to_string()),
            collection_slug: collection_slug.map(str::to_string),
            old_slug: None,
            old_collection_slug: None,
        }
    }

    /// A mutation of a collection itself; no item-level path is involved.
    pub fn collection(art_type: ArtType, collection_slug: &str) -> Self {
        Self {
            art_type,
            slug: None,
            collection_slug: Some(collection_slug.to_string()),
            old_slug: None,
            old_collection_slug: None,
        }
    }

    /// Attach the pre-mutation coordinates for renames and re-parenting.
    pub fn with_previous(
        mut self,
        old_slug: Option<&str>,
        old_collection_slug: Option<&str>,
    ) -> Self {
        self.old_slug = old_slug.map(str::to_string);
        self.old_collection_slug = old_collection_slug.map(str::to_string);
        self
    }
}
