use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use uuid::Uuid;

use crate::application::admin::{SaveArtworkCommand, SaveCollectionCommand};
use crate::application::error::ErrorReport;
use crate::application::repos::{AddMediaParams, AddSectionParams, ArtworkQueryFilter};

use super::error::{
    ApiError, artwork_to_api, collection_to_api, media_to_api, newsletter_to_api, section_to_api,
};
use super::models::{
    ArtworkListQuery, ArtworkSaveRequest, CollectionListQuery, CollectionSaveRequest,
    MediaAddRequest, SectionAddRequest, SubscribeRequest,
};
use super::state::ApiState;

pub async fn health(State(state): State<ApiState>) -> Response {
    let Some(db) = &state.db else {
        return StatusCode::NO_CONTENT.into_response();
    };
    match db.health_check().await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => {
            let mut response = StatusCode::SERVICE_UNAVAILABLE.into_response();
            ErrorReport::from_error(
                "infra::http::db_health",
                StatusCode::SERVICE_UNAVAILABLE,
                &err,
            )
            .attach(&mut response);
            response
        }
    }
}

fn artwork_command(payload: ArtworkSaveRequest) -> SaveArtworkCommand {
    SaveArtworkCommand {
        title: payload.title,
        art_type: payload.art_type,
        collection_id: payload.collection_id,
        short_description: payload.short_description,
        description: payload.description,
        creation_date: payload.creation_date,
        dimensions: payload.dimensions,
        medium: payload.medium,
        cover_image_url: payload.cover_image_url,
        sort_order: payload.sort_order,
        is_published: payload.is_published,
        is_featured_home: payload.is_featured_home,
    }
}

pub async fn list_artworks(
    State(state): State<ApiState>,
    Query(query): Query<ArtworkListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let filter = ArtworkQueryFilter {
        art_type: query.art_type,
        collection_id: query.collection_id,
        published_only: query.published,
    };
    let artworks = state.artworks.list(&filter).await.map_err(artwork_to_api)?;
    Ok(Json(artworks))
}

pub async fn get_artwork(
    State(state): State<ApiState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let artwork = state.artworks.find_by_id(id).await.map_err(artwork_to_api)?;
    match artwork {
        Some(artwork) => Ok(Json(artwork)),
        None => Err(ApiError::not_found("artwork not found")),
    }
}

pub async fn create_artwork(
    State(state): State<ApiState>,
    Json(payload): Json<ArtworkSaveRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let artwork = state
        .artworks
        .create_artwork(artwork_command(payload))
        .await
        .map_err(artwork_to_api)?;
    Ok((StatusCode::CREATED, Json(artwork)))
}

pub async fn update_artwork(
    State(state): State<ApiState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ArtworkSaveRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let artwork = state
        .artworks
        .update_artwork(id, artwork_command(payload))
        .await
        .map_err(artwork_to_api)?;
    Ok(Json(artwork))
}

pub async fn delete_artwork(
    State(state): State<ApiState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .artworks
        .delete_artwork(id)
        .await
        .map_err(artwork_to_api)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_collections(
    State(state): State<ApiState>,
    Query(query): Query<CollectionListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let collections = state
        .collections
        .list(query.art_type)
        .await
        .map_err(collection_to_api)?;
    Ok(Json(collections))
}

pub async fn create_collection(
    State(state): State<ApiState>,
    Json(payload): Json<CollectionSaveRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let command = SaveCollectionCommand {
        title: payload.title,
        art_type: payload.art_type,
        short_description: payload.short_description,
        description: payload.description,
        cover_image_url: payload.cover_image_url,
        sort_order: payload.sort_order,
        is_published: payload.is_published,
    };
    let collection = state
        .collections
        .create_collection(command)
        .await
        .map_err(collection_to_api)?;
    Ok((StatusCode::CREATED, Json(collection)))
}

pub async fn update_collection(
    State(state): State<ApiState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CollectionSaveRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let command = SaveCollectionCommand {
        title: payload.title,
        art_type: payload.art_type,
        short_description: payload.short_description,
        description: payload.description,
        cover_image_url: payload.cover_image_url,
        sort_order: payload.sort_order,
        is_published: payload.is_published,
    };
    let collection = state
        .collections
        .update_collection(id, command)
        .await
        .map_err(collection_to_api)?;
    Ok(Json(collection))
}

pub async fn delete_collection(
    State(state): State<ApiState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .collections
        .delete_collection(id)
        .await
        .map_err(collection_to_api)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_media(
    State(state): State<ApiState>,
    Path(artwork_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let media = state.media.list(artwork_id).await.map_err(media_to_api)?;
    Ok(Json(media))
}

pub async fn add_media(
    State(state): State<ApiState>,
    Path(artwork_id): Path<Uuid>,
    Json(payload): Json<MediaAddRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let params = AddMediaParams {
        artwork_id,
        media_url: payload.media_url,
        media_kind: payload.media_kind,
        caption: payload.caption,
        sort_order: payload.sort_order,
    };
    let record = state.media.add_media(params).await.map_err(media_to_api)?;
    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn delete_media(
    State(state): State<ApiState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    state.media.delete_media(id).await.map_err(media_to_api)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_sections(
    State(state): State<ApiState>,
    Path(artwork_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let sections = state
        .sections
        .list(artwork_id)
        .await
        .map_err(section_to_api)?;
    Ok(Json(sections))
}

pub async fn add_section(
    State(state): State<ApiState>,
    Path(artwork_id): Path<Uuid>,
    Json(payload): Json<SectionAddRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let params = AddSectionParams {
        artwork_id,
        title: payload.title,
        content: payload.content,
        sort_order: payload.sort_order,
    };
    let record = state
        .sections
        .add_section(params)
        .await
        .map_err(section_to_api)?;
    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn delete_section(
    State(state): State<ApiState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .sections
        .delete_section(id)
        .await
        .map_err(section_to_api)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn subscribe(
    State(state): State<ApiState>,
    Json(payload): Json<SubscribeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let record = state
        .newsletter
        .subscribe(&payload.name, &payload.email)
        .await
        .map_err(newsletter_to_api)?;
    Ok((StatusCode::CREATED, Json(record)))
}
