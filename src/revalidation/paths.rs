//! Public and admin path construction.
//!
//! Every rendered path the site serves is built here and nowhere else, so the
//! listing, detail, and admin builders can never drift apart.

use crate::domain::locale::Locale;
use crate::domain::types::ArtType;

/// The locale's home page.
pub fn home(locale: &Locale) -> String {
    format!("/{locale}")
}

/// The locale's about/bio page.
pub fn bio(locale: &Locale) -> String {
    format!("/{locale}/bio")
}

/// The admin dashboard.
pub fn admin_dashboard(locale: &Locale) -> String {
    format!("/{locale}/admin")
}

/// The admin artwork listing.
pub fn admin_artworks(locale: &Locale) -> String {
    format!("/{locale}/admin/artworks")
}

/// The admin collection listing.
pub fn admin_collections(locale: &Locale) -> String {
    format!("/{locale}/admin/collections")
}

/// Build any content path under an art type.
///
/// - neither `collection_slug` nor `slug`: the art-type index
/// - only `collection_slug`: the collection page
/// - only `slug`: a standalone artwork page
/// - both: an artwork page nested inside its collection
pub fn content(
    locale: &Locale,
    art_type: ArtType,
    collection_slug: Option<&str>,
    slug: Option<&str>,
) -> String {
    let route = art_type.route_segment();
    match (collection_slug, slug) {
        (None, None) => format!("/{locale}/{route}"),
        (Some(collection), None) => format!("/{locale}/{route}/{collection}"),
        (None, Some(slug)) => format!("/{locale}/{route}/{slug}"),
        (Some(collection), Some(slug)) => {
            format!("/{locale}/{route}/{collection}/{slug}")
        }
    }
}
