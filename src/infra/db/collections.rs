use async_trait::async_trait;
use sqlx::QueryBuilder;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::{
    application::repos::{
        CollectionsRepo, CollectionsWriteRepo, CreateCollectionParams, RepoError,
        UpdateCollectionParams,
    },
    domain::{entities::CollectionRecord, types::ArtType},
};

use super::{PostgresRepositories, map_sqlx_error};

const COLLECTION_COLUMNS: &str = "id, title, slug, art_type, short_description, description, \
     cover_image_url, sort_order, is_published, created_at, updated_at";

#[derive(sqlx::FromRow)]
struct CollectionRow {
    id: Uuid,
    title: String,
    slug: String,
    art_type: ArtType,
    short_description: Option<String>,
    description: Option<String>,
    cover_image_url: Option<String>,
    sort_order: i32,
    is_published: bool,
    created_at: OffsetDateTime,
    updated_at: OffsetDateTime,
}

impl From<CollectionRow> for CollectionRecord {
    fn from(row: CollectionRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            slug: row.slug,
            art_type: row.art_type,
            short_description: row.short_description,
            description: row.description,
            cover_image_url: row.cover_image_url,
            sort_order: row.sort_order,
            is_published: row.is_published,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl CollectionsRepo for PostgresRepositories {
    async fn list_collections(
        &self,
        art_type: Option<ArtType>,
    ) -> Result<Vec<CollectionRecord>, RepoError> {
        let mut qb = QueryBuilder::new(format!(
            "SELECT {COLLECTION_COLUMNS} FROM collections WHERE 1=1 "
        ));

        if let Some(art_type) = art_type {
            qb.push("AND art_type = ");
            qb.push_bind(art_type);
        }
        qb.push(" ORDER BY sort_order, created_at DESC");

        let rows: Vec<CollectionRow> = qb
            .build_query_as()
            .fetch_all(self.pool())
            .await
            .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(CollectionRecord::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<CollectionRecord>, RepoError> {
        let row: Option<CollectionRow> = sqlx::query_as(&format!(
            "SELECT {COLLECTION_COLUMNS} FROM collections WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(CollectionRecord::from))
    }

    async fn find_by_slug(
        &self,
        art_type: ArtType,
        slug: &str,
    ) -> Result<Option<CollectionRecord>, RepoError> {
        let row: Option<CollectionRow> = sqlx::query_as(&format!(
            "SELECT {COLLECTION_COLUMNS} FROM collections WHERE art_type = $1 AND slug = $2"
        ))
        .bind(art_type)
        .bind(slug)
        .fetch_optional(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(CollectionRecord::from))
    }
}

#[async_trait]
impl CollectionsWriteRepo for PostgresRepositories {
    async fn create_collection(
        &self,
        params: CreateCollectionParams,
    ) -> Result<CollectionRecord, RepoError> {
        let row: CollectionRow = sqlx::query_as(&format!(
            "INSERT INTO collections (title, slug, art_type, short_description, description, \
             cover_image_url, sort_order, is_published) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {COLLECTION_COLUMNS}"
        ))
        .bind(&params.title)
        .bind(&params.slug)
        .bind(params.art_type)
        .bind(&params.short_description)
        .bind(&params.description)
        .bind(&params.cover_image_url)
        .bind(params.sort_order)
        .bind(params.is_published)
        .fetch_one(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(CollectionRecord::from(row))
    }

    async fn update_collection(
        &self,
        params: UpdateCollectionParams,
    ) -> Result<CollectionRecord, RepoError> {
        let row: Option<CollectionRow> = sqlx::query_as(&format!(
            "UPDATE collections SET title = $2, slug = $3, art_type = $4, \
             short_description = $5, description = $6, cover_image_url = $7, \
             sort_order = $8, is_published = $9, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLLECTION_COLUMNS}"
        ))
        .bind(params.id)
        .bind(&params.title)
        .bind(&params.slug)
        .bind(params.art_type)
        .bind(&params.short_description)
        .bind(&params.description)
        .bind(&params.cover_image_url)
        .bind(params.sort_order)
        .bind(params.is_published)
        .fetch_optional(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        row.map(CollectionRecord::from).ok_or(RepoError::NotFound)
    }

    async fn delete_collection(&self, id: Uuid) -> Result<(), RepoError> {
        // Member artworks survive with collection_id cleared by the FK.
        let result = sqlx::query("DELETE FROM collections WHERE id = $1")
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
