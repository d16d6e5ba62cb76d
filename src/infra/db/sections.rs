use async_trait::async_trait;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::{
    application::repos::{AddSectionParams, RepoError, SectionsRepo},
    domain::entities::ArtworkSectionRecord,
};

use super::{PostgresRepositories, map_sqlx_error};

const SECTION_COLUMNS: &str = "id, artwork_id, title, content, sort_order, created_at";

#[derive(sqlx::FromRow)]
struct SectionRow {
    id: Uuid,
    artwork_id: Uuid,
    title: Option<String>,
    content: String,
    sort_order: i32,
    created_at: OffsetDateTime,
}

impl From<SectionRow> for ArtworkSectionRecord {
    fn from(row: SectionRow) -> Self {
        Self {
            id: row.id,
            artwork_id: row.artwork_id,
            title: row.title,
            content: row.content,
            sort_order: row.sort_order,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl SectionsRepo for PostgresRepositories {
    async fn list_sections(
        &self,
        artwork_id: Uuid,
    ) -> Result<Vec<ArtworkSectionRecord>, RepoError> {
        let rows: Vec<SectionRow> = sqlx::query_as(&format!(
            "SELECT {SECTION_COLUMNS} FROM artwork_sections WHERE artwork_id = $1 ORDER BY sort_order, created_at"
        ))
        .bind(artwork_id)
        .fetch_all(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(ArtworkSectionRecord::from).collect())
    }

    async fn find_section(&self, id: Uuid) -> Result<Option<ArtworkSectionRecord>, RepoError> {
        let row: Option<SectionRow> = sqlx::query_as(&format!(
            "SELECT {SECTION_COLUMNS} FROM artwork_sections WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(ArtworkSectionRecord::from))
    }

    async fn add_section(
        &self,
        params: AddSectionParams,
    ) -> Result<ArtworkSectionRecord, RepoError> {
        let row: SectionRow = sqlx::query_as(&format!(
            "INSERT INTO artwork_sections (artwork_id, title, content, sort_order) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {SECTION_COLUMNS}"
        ))
        .bind(params.artwork_id)
        .bind(&params.title)
        .bind(&params.content)
        .bind(params.sort_order)
        .fetch_one(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(ArtworkSectionRecord::from(row))
    }

    async fn delete_section(&self, id: Uuid) -> Result<(), RepoError> {
        let result = sqlx::query("DELETE FROM artwork_sections WHERE id = $1")
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
