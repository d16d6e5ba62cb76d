//! Admin HTTP surface tests driven through the router with tower's
//! `oneshot`, backed by in-memory repositories.

mod support;

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use atelier::application::admin::{
    AdminArtworkService, AdminCollectionService, AdminMediaService, AdminSectionService,
};
use atelier::application::newsletter::NewsletterService;
use atelier::domain::types::ArtType;
use atelier::infra::http::{ApiState, build_router};
use atelier::revalidation::RecordingInvalidator;

use support::MemoryRepos;

struct TestApp {
    router: Router,
    repos: Arc<MemoryRepos>,
    recorder: Arc<RecordingInvalidator>,
}

fn app(codes: &[&str]) -> TestApp {
    let repos = MemoryRepos::new();
    let recorder = Arc::new(RecordingInvalidator::new());
    let coordinator = support::coordinator(recorder.clone(), codes);

    let state = ApiState {
        artworks: AdminArtworkService::new(repos.clone(), repos.clone(), repos.clone())
            .with_revalidation_opt(Some(coordinator.clone())),
        collections: AdminCollectionService::new(repos.clone(), repos.clone())
            .with_revalidation_opt(Some(coordinator.clone())),
        media: AdminMediaService::new(repos.clone(), repos.clone(), repos.clone())
            .with_revalidation_opt(Some(coordinator.clone())),
        sections: AdminSectionService::new(repos.clone(), repos.clone(), repos.clone())
            .with_revalidation_opt(Some(coordinator)),
        newsletter: NewsletterService::new(repos.clone()),
        db: None,
    };

    TestApp {
        router: build_router(state),
        repos,
        recorder,
    }
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

async fn read_json(response: axum::response::Response) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn healthz_without_database_reports_healthy() {
    let app = app(&["en"]);
    let response = app
        .router
        .oneshot(
            Request::builder()
                .uri("/healthz")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn creating_artwork_returns_201_and_revalidates() {
    let app = app(&["en"]);

    let response = app
        .router
        .oneshot(json_request(
            "POST",
            "/api/artworks",
            json!({"title": "Sunset", "art_type": "drawing", "is_published": true}),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = read_json(response).await;
    assert_eq!(body["slug"], "sunset");
    assert_eq!(body["art_type"], "drawing");
    assert!(
        app.recorder
            .paths()
            .contains(&"/en/drawings/sunset".to_string())
    );
}

#[tokio::test]
async fn empty_title_is_a_constraint_violation() {
    let app = app(&["en"]);

    let response = app
        .router
        .oneshot(json_request(
            "POST",
            "/api/artworks",
            json!({"title": "", "art_type": "drawing"}),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json(response).await;
    assert_eq!(body["error"]["code"], "constraint_violation");
    assert!(app.recorder.paths().is_empty());
}

#[tokio::test]
async fn unknown_artwork_is_404() {
    let app = app(&["en"]);

    let response = app
        .router
        .oneshot(
            Request::builder()
                .uri(format!("/api/artworks/{}", uuid::Uuid::new_v4()))
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = read_json(response).await;
    assert_eq!(body["error"]["code"], "not_found");
}

#[tokio::test]
async fn listing_artworks_filters_by_art_type() {
    let app = app(&["en"]);
    app.repos
        .seed_artwork(ArtType::Drawing, "Sunset", "sunset", None);
    app.repos.seed_artwork(ArtType::Poem, "Ode", "ode", None);

    let response = app
        .router
        .oneshot(
            Request::builder()
                .uri("/api/artworks?art_type=drawing")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    let items = body.as_array().expect("array");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["slug"], "sunset");
}

#[tokio::test]
async fn updating_artwork_renames_slug() {
    let app = app(&["en"]);
    let artwork = app
        .repos
        .seed_artwork(ArtType::Drawing, "Sunset", "sunset", None);

    let response = app
        .router
        .oneshot(json_request(
            "PUT",
            &format!("/api/artworks/{}", artwork.id),
            json!({"title": "Sunset II", "art_type": "drawing", "is_published": true}),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["slug"], "sunset-ii");
    assert!(
        app.recorder
            .paths()
            .contains(&"/en/drawings/sunset".to_string())
    );
}

#[tokio::test]
async fn deleting_artwork_returns_204() {
    let app = app(&["en"]);
    let artwork = app
        .repos
        .seed_artwork(ArtType::Drawing, "Sunset", "sunset", None);

    let response = app
        .router
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/artworks/{}", artwork.id))
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn collection_crud_round_trip() {
    let app = app(&["en"]);

    let created = app
        .router
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/collections",
            json!({"title": "Early Works", "art_type": "painting", "is_published": true}),
        ))
        .await
        .expect("response");
    assert_eq!(created.status(), StatusCode::CREATED);
    let body = read_json(created).await;
    assert_eq!(body["slug"], "early-works");

    let listed = app
        .router
        .oneshot(
            Request::builder()
                .uri("/api/collections?art_type=painting")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(listed.status(), StatusCode::OK);
    let body = read_json(listed).await;
    assert_eq!(body.as_array().expect("array").len(), 1);
}

#[tokio::test]
async fn media_with_blank_url_is_rejected() {
    let app = app(&["en"]);
    let artwork = app
        .repos
        .seed_artwork(ArtType::Drawing, "Sunset", "sunset", None);

    let response = app
        .router
        .oneshot(json_request(
            "POST",
            &format!("/api/artworks/{}/media", artwork.id),
            json!({"media_url": "   ", "media_kind": "image"}),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json(response).await;
    assert_eq!(body["error"]["code"], "constraint_violation");
}

#[tokio::test]
async fn adding_section_returns_201() {
    let app = app(&["en"]);
    let artwork = app
        .repos
        .seed_artwork(ArtType::Poem, "Ode", "ode", None);

    let response = app
        .router
        .oneshot(json_request(
            "POST",
            &format!("/api/artworks/{}/sections", artwork.id),
            json!({"content": "First stanza"}),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = read_json(response).await;
    assert_eq!(body["content"], "First stanza");
}

#[tokio::test]
async fn duplicate_newsletter_subscription_is_409() {
    let app = app(&["en"]);

    let first = app
        .router
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/newsletter/subscribe",
            json!({"name": "Ana", "email": "ana@example.com"}),
        ))
        .await
        .expect("response");
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = app
        .router
        .oneshot(json_request(
            "POST",
            "/api/newsletter/subscribe",
            json!({"name": "Ana", "email": "ANA@example.com"}),
        ))
        .await
        .expect("response");
    assert_eq!(second.status(), StatusCode::CONFLICT);
    let body = read_json(second).await;
    assert_eq!(body["error"]["code"], "already_subscribed");
}
