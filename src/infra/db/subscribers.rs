use async_trait::async_trait;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::{
    application::repos::{RepoError, SubscribersRepo},
    domain::entities::SubscriberRecord,
};

use super::{PostgresRepositories, map_sqlx_error};

#[derive(sqlx::FromRow)]
struct SubscriberRow {
    id: Uuid,
    name: String,
    email: String,
    created_at: OffsetDateTime,
}

impl From<SubscriberRow> for SubscriberRecord {
    fn from(row: SubscriberRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl SubscribersRepo for PostgresRepositories {
    async fn insert_subscriber(
        &self,
        name: &str,
        email: &str,
    ) -> Result<SubscriberRecord, RepoError> {
        let row: SubscriberRow = sqlx::query_as(
            "INSERT INTO newsletter_subscribers (name, email) \
             VALUES ($1, lower($2)) \
             RETURNING id, name, email, created_at",
        )
        .bind(name)
        .bind(email)
        .fetch_one(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(SubscriberRecord::from(row))
    }
}
