//! JSON admin API served by the backend.

pub mod error;
mod handlers;
mod middleware;
pub mod models;
mod state;

pub use state::ApiState;

use axum::Router;
use axum::middleware::from_fn;
use axum::routing::{delete, get, post, put};

pub fn build_router(state: ApiState) -> Router {
    Router::new()
        .route("/healthz", get(handlers::health))
        .route(
            "/api/artworks",
            get(handlers::list_artworks).post(handlers::create_artwork),
        )
        .route(
            "/api/artworks/{id}",
            get(handlers::get_artwork)
                .put(handlers::update_artwork)
                .delete(handlers::delete_artwork),
        )
        .route(
            "/api/artworks/{id}/media",
            get(handlers::list_media).post(handlers::add_media),
        )
        .route("/api/media/{id}", delete(handlers::delete_media))
        .route(
            "/api/artworks/{id}/sections",
            get(handlers::list_sections).post(handlers::add_section),
        )
        .route("/api/sections/{id}", delete(handlers::delete_section))
        .route(
            "/api/collections",
            get(handlers::list_collections).post(handlers::create_collection),
        )
        .route(
            "/api/collections/{id}",
            put(handlers::update_collection).delete(handlers::delete_collection),
        )
        .route("/api/newsletter/subscribe", post(handlers::subscribe))
        .layer(from_fn(middleware::log_responses))
        .with_state(state)
}
