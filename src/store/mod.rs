// src/store/mod.rs

//! Storage collaborators.
//!
//! Each call is an independent operation; nothing here spans a transaction.
//! Read-then-write sequences in the manager race with each other and the
//! last write wins.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{error::AppError, models::Draft};

/// A collection of owner-scoped records of one type.
#[async_trait]
pub trait Collection<E>: Send + Sync {
    /// Records matching `scope`, newest first, skipping `skip` and returning
    /// at most `take`.
    async fn find_by_scope(&self, scope: Uuid, skip: i64, take: i64) -> Result<Vec<E>, AppError>;

    async fn count_by_scope(&self, scope: Uuid) -> Result<i64, AppError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<E>, AppError>;

    /// Persists a draft, assigning its id and timestamps.
    async fn insert(&self, draft: Draft) -> Result<E, AppError>;

    /// Writes back the content of an existing record.
    /// A record deleted in the meantime yields `NotFound`.
    async fn save(&self, entity: &E) -> Result<E, AppError>;

    async fn remove(&self, entity: &E) -> Result<(), AppError>;
}

/// Answers whether a scope (e.g. a user) exists.
#[async_trait]
pub trait ScopeDirectory: Send + Sync {
    async fn exists(&self, id: Uuid) -> Result<bool, AppError>;
}
