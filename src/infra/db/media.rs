use async_trait::async_trait;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::{
    application::repos::{AddMediaParams, MediaRepo, RepoError},
    domain::{entities::ArtworkMediaRecord, types::MediaKind},
};

use super::{PostgresRepositories, map_sqlx_error};

const MEDIA_COLUMNS: &str = "id, artwork_id, media_url, media_kind, caption, sort_order, created_at";

#[derive(sqlx::FromRow)]
struct MediaRow {
    id: Uuid,
    artwork_id: Uuid,
    media_url: String,
    media_kind: MediaKind,
    caption: Option<String>,
    sort_order: i32,
    created_at: OffsetDateTime,
}

impl From<MediaRow> for ArtworkMediaRecord {
    fn from(row: MediaRow) -> Self {
        Self {
            id: row.id,
            artwork_id: row.artwork_id,
            media_url: row.media_url,
            media_kind: row.media_kind,
            caption: row.caption,
            sort_order: row.sort_order,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl MediaRepo for PostgresRepositories {
    async fn list_media(&self, artwork_id: Uuid) -> Result<Vec<ArtworkMediaRecord>, RepoError> {
        let rows: Vec<MediaRow> = sqlx::query_as(&format!(
            "SELECT {MEDIA_COLUMNS} FROM artwork_media WHERE artwork_id = $1 ORDER BY sort_order, created_at"
        ))
        .bind(artwork_id)
        .fetch_all(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(ArtworkMediaRecord::from).collect())
    }

    async fn find_media(&self, id: Uuid) -> Result<Option<ArtworkMediaRecord>, RepoError> {
        let row: Option<MediaRow> = sqlx::query_as(&format!(
            "SELECT {MEDIA_COLUMNS} FROM artwork_media WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(ArtworkMediaRecord::from))
    }

    async fn add_media(&self, params: AddMediaParams) -> Result<ArtworkMediaRecord, RepoError> {
        let row: MediaRow = sqlx::query_as(&format!(
            "INSERT INTO artwork_media (artwork_id, media_url, media_kind, caption, sort_order) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {MEDIA_COLUMNS}"
        ))
        .bind(params.artwork_id)
        .bind(&params.media_url)
        .bind(params.media_kind)
        .bind(&params.caption)
        .bind(params.sort_order)
        .fetch_one(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(ArtworkMediaRecord::from(row))
    }

    async fn delete_media(&self, id: Uuid) -> Result<(), RepoError> {
        let result = sqlx::query("DELETE FROM artwork_media WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}
