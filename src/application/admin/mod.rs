//! Admin-facing mutation services.
//!
//! Each service wraps the repository traits with validation, slug handling,
//! and a post-commit revalidation pass. Revalidation is optional per service
//! so tests and offline tooling can run mutations without a render layer.

pub mod artworks;
pub mod collections;
pub mod media;
pub mod sections;

pub use artworks::{AdminArtworkError, AdminArtworkService, SaveArtworkCommand};
pub use collections::{AdminCollectionError, AdminCollectionService, SaveCollectionCommand};
pub use media::{AdminMediaError, AdminMediaService};
pub use sections::{AdminSectionError, AdminSectionService};
