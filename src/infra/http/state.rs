use crate::application::admin::{
    AdminArtworkService, AdminCollectionService, AdminMediaService, AdminSectionService,
};
use crate::application::newsletter::NewsletterService;
use crate::infra::db::PostgresRepositories;

/// Shared state for the admin API router.
///
/// `db` is absent when the router is assembled over in-memory repositories,
/// so the health endpoint only probes the pool when one exists.
#[derive(Clone)]
pub struct ApiState {
    pub artworks: AdminArtworkService,
    pub collections: AdminCollectionService,
    pub media: AdminMediaService,
    pub sections: AdminSectionService,
    pub newsletter: NewsletterService,
    pub db: Option<PostgresRepositories>,
}
