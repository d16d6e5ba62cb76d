use async_trait::async_trait;
use sqlx::QueryBuilder;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::{
    application::repos::{
        ArtworkQueryFilter, ArtworksRepo, ArtworksWriteRepo, CreateArtworkParams, RepoError,
        UpdateArtworkParams,
    },
    domain::{entities::ArtworkRecord, types::ArtType},
};

use super::{PostgresRepositories, map_sqlx_error};

const ARTWORK_COLUMNS: &str = "id, title, slug, art_type, collection_id, short_description, \
     description, creation_date, dimensions, medium, cover_image_url, sort_order, \
     is_published, is_featured_home, created_at, updated_at";

#[derive(sqlx::FromRow)]
struct ArtworkRow {
    id: Uuid,
    title: String,
    slug: String,
    art_type: ArtType,
    collection_id: Option<Uuid>,
    short_description: Option<String>,
    description: Option<String>,
    creation_date: Option<String>,
    dimensions: Option<String>,
    medium: Option<String>,
    cover_image_url: Option<String>,
    sort_order: i32,
    is_published: bool,
    is_featured_home: bool,
    created_at: OffsetDateTime,
    updated_at: OffsetDateTime,
}

impl From<ArtworkRow> for ArtworkRecord {
    fn from(row: ArtworkRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            slug: row.slug,
            art_type: row.art_type,
            collection_id: row.collection_id,
            short_description: row.short_description,
            description: row.description,
            creation_date: row.creation_date,
            dimensions: row.dimensions,
            medium: row.medium,
            cover_image_url: row.cover_image_url,
            sort_order: row.sort_order,
            is_published: row.is_published,
            is_featured_home: row.is_featured_home,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl ArtworksRepo for PostgresRepositories {
    async fn list_artworks(
        &self,
        filter: &ArtworkQueryFilter,
    ) -> Result<Vec<ArtworkRecord>, RepoError> {
        let mut qb = QueryBuilder::new(format!(
            "SELECT {ARTWORK_COLUMNS} FROM artworks WHERE 1=1 "
        ));

        if let Some(art_type) = filter.art_type {
            qb.push("AND art_type = ");
            qb.push_bind(art_type);
        }
        if let Some(collection_id) = filter.collection_id {
            qb.push(" AND collection_id = ");
            qb.push_bind(collection_id);
        }
        if filter.published_only {
            qb.push(" AND is_published = TRUE");
        }
        qb.push(" ORDER BY sort_order, created_at DESC");

        let rows: Vec<ArtworkRow> = qb
            .build_query_as()
            .fetch_all(self.pool())
            .await
            .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(ArtworkRecord::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ArtworkRecord>, RepoError> {
        let row: Option<ArtworkRow> = sqlx::query_as(&format!(
            "SELECT {ARTWORK_COLUMNS} FROM artworks WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(ArtworkRecord::from))
    }

    async fn find_by_slug(
        &self,
        art_type: ArtType,
        slug: &str,
    ) -> Result<Option<ArtworkRecord>, RepoError> {
        let row: Option<ArtworkRow> = sqlx::query_as(&format!(
            "SELECT {ARTWORK_COLUMNS} FROM artworks WHERE art_type = $1 AND slug = $2"
        ))
        .bind(art_type)
        .bind(slug)
        .fetch_optional(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(ArtworkRecord::from))
    }
}

#[async_trait]
impl ArtworksWriteRepo for PostgresRepositories {
    async fn create_artwork(
        &self,
        params: CreateArtworkParams,
    ) -> Result<ArtworkRecord, RepoError> {
        let row: ArtworkRow = sqlx::query_as(&format!(
            "INSERT INTO artworks (title, slug, art_type, collection_id, short_description, \
             description, creation_date, dimensions, medium, cover_image_url, sort_order, \
             is_published, is_featured_home) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13) \
             RETURNING {ARTWORK_COLUMNS}"
        ))
        .bind(&params.title)
        .bind(&params.slug)
        .bind(params.art_type)
        .bind(params.collection_id)
        .bind(&params.short_description)
        .bind(&params.description)
        .bind(&params.creation_date)
        .bind(&params.dimensions)
        .bind(&params.medium)
        .bind(&params.cover_image_url)
        .bind(params.sort_order)
        .bind(params.is_published)
        .bind(params.is_featured_home)
        .fetch_one(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(ArtworkRecord::from(row))
    }

    async fn update_artwork(
        &self,
        params: UpdateArtworkParams,
    ) -> Result<ArtworkRecord, RepoError> {
        let row: Option<ArtworkRow> = sqlx::query_as(&format!(
            "UPDATE artworks SET title = $2, slug = $3, art_type = $4, collection_id = $5, \
             short_description = $6, description = $7, creation_date = $8, dimensions = $9, \
             medium = $10, cover_image_url = $11, sort_order = $12, is_published = $13, \
             is_featured_home = $14, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {ARTWORK_COLUMNS}"
        ))
        .bind(params.id)
        .bind(&params.title)
        .bind(&params.slug)
        .bind(params.art_type)
        .bind(params.collection_id)
        .bind(&params.short_description)
        .bind(&params.description)
        .bind(&params.creation_date)
        .bind(&params.dimensions)
        .bind(&params.medium)
        .bind(&params.cover_image_url)
        .bind(params.sort_order)
        .bind(params.is_published)
        .bind(params.is_featured_home)
        .fetch_optional(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        row.map(ArtworkRecord::from).ok_or(RepoError::NotFound)
    }

    async fn delete_artwork(&self, id: Uuid) -> Result<(), RepoError> {
        let result = sqlx::query("DELETE FROM artworks WHERE id = $1")
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
