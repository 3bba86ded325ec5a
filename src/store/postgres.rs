use std::marker::PhantomData;

use async_trait::async_trait;
use sqlx::{FromRow, PgPool, postgres::PgRow};
use uuid::Uuid;

use super::{Collection, ScopeDirectory};
use crate::{
    error::AppError,
    models::{Draft, OwnedResource, comment::Comment, tweet::Tweet},
};

/// Table layout of an owned resource.
pub trait PgTable: OwnedResource + for<'r> FromRow<'r, PgRow> + Unpin {
    const TABLE: &'static str;
    /// Column listings are filtered by.
    const SCOPE_COLUMN: &'static str;
    /// Column holding the parent reference, if the resource has one.
    /// It is filled from the draft's scope.
    const PARENT_COLUMN: Option<&'static str>;
}

impl PgTable for Comment {
    const TABLE: &'static str = "comments";
    const SCOPE_COLUMN: &'static str = "video_id";
    const PARENT_COLUMN: Option<&'static str> = Some("video_id");
}

impl PgTable for Tweet {
    const TABLE: &'static str = "tweets";
    const SCOPE_COLUMN: &'static str = "owner_id";
    const PARENT_COLUMN: Option<&'static str> = None;
}

/// A resource table in PostgreSQL.
pub struct PgCollection<E> {
    pool: PgPool,
    _entity: PhantomData<fn() -> E>,
}

impl<E> PgCollection<E> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }
}

#[async_trait]
impl<E: PgTable> Collection<E> for PgCollection<E> {
    async fn find_by_scope(&self, scope: Uuid, skip: i64, take: i64) -> Result<Vec<E>, AppError> {
        let sql = format!(
            "SELECT * FROM {} WHERE {} = $1 ORDER BY created_at DESC, id DESC OFFSET $2 LIMIT $3",
            E::TABLE,
            E::SCOPE_COLUMN
        );

        let rows = sqlx::query_as::<_, E>(&sql)
            .bind(scope)
            .bind(skip)
            .bind(take)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list {}: {:?}", E::TABLE, e);
                AppError::from(e)
            })?;

        Ok(rows)
    }

    async fn count_by_scope(&self, scope: Uuid) -> Result<i64, AppError> {
        let sql = format!(
            "SELECT COUNT(*) FROM {} WHERE {} = $1",
            E::TABLE,
            E::SCOPE_COLUMN
        );

        let count = sqlx::query_scalar::<_, i64>(&sql)
            .bind(scope)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<E>, AppError> {
        let sql = format!("SELECT * FROM {} WHERE id = $1", E::TABLE);

        let row = sqlx::query_as::<_, E>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    async fn insert(&self, draft: Draft) -> Result<E, AppError> {
        let sql = match E::PARENT_COLUMN {
            Some(parent) => format!(
                "INSERT INTO {} (owner_id, content, {}) VALUES ($1, $2, $3) RETURNING *",
                E::TABLE,
                parent
            ),
            None => format!(
                "INSERT INTO {} (owner_id, content) VALUES ($1, $2) RETURNING *",
                E::TABLE
            ),
        };

        let mut query = sqlx::query_as::<_, E>(&sql)
            .bind(draft.owner)
            .bind(draft.content);
        if E::PARENT_COLUMN.is_some() {
            query = query.bind(draft.scope);
        }

        let row = query.fetch_one(&self.pool).await.map_err(|e| {
            tracing::error!("Failed to insert into {}: {:?}", E::TABLE, e);
            AppError::from(e)
        })?;

        Ok(row)
    }

    async fn save(&self, entity: &E) -> Result<E, AppError> {
        let sql = format!(
            "UPDATE {} SET content = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
            E::TABLE
        );

        sqlx::query_as::<_, E>(&sql)
            .bind(entity.id())
            .bind(entity.content())
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("{} not found", E::LABEL)))
    }

    async fn remove(&self, entity: &E) -> Result<(), AppError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", E::TABLE);

        sqlx::query(&sql)
            .bind(entity.id())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete from {}: {:?}", E::TABLE, e);
                AppError::from(e)
            })?;

        Ok(())
    }
}

/// Looks users up in the 'users' table.
pub struct PgUserDirectory {
    pool: PgPool,
}

impl PgUserDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ScopeDirectory for PgUserDirectory {
    async fn exists(&self, id: Uuid) -> Result<bool, AppError> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM users WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }
}
