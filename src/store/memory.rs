use std::collections::HashSet;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{Collection, ScopeDirectory};
use crate::{
    error::AppError,
    models::{Draft, OwnedResource},
};

/// In-process collection. Records are kept in insertion order and every
/// insert gets a strictly later `created_at` than the previous one, so
/// newest-first ordering is total.
pub struct MemoryCollection<E> {
    inner: RwLock<Inner<E>>,
}

struct Inner<E> {
    rows: Vec<E>,
    last_created: Option<DateTime<Utc>>,
}

impl<E> Default for MemoryCollection<E> {
    fn default() -> Self {
        Self {
            inner: RwLock::new(Inner {
                rows: Vec::new(),
                last_created: None,
            }),
        }
    }
}

impl<E: OwnedResource> MemoryCollection<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl<E: OwnedResource> Collection<E> for MemoryCollection<E> {
    async fn find_by_scope(&self, scope: Uuid, skip: i64, take: i64) -> Result<Vec<E>, AppError> {
        let inner = self.inner.read().await;
        let mut matching: Vec<&E> = inner
            .rows
            .iter()
            .rev()
            .filter(|row| row.scope() == scope)
            .collect();
        matching.sort_by(|a, b| {
            b.created_at()
                .cmp(&a.created_at())
                .then_with(|| b.id().cmp(&a.id()))
        });

        Ok(matching
            .into_iter()
            .skip(usize::try_from(skip).unwrap_or(usize::MAX))
            .take(usize::try_from(take).unwrap_or(0))
            .cloned()
            .collect())
    }

    async fn count_by_scope(&self, scope: Uuid) -> Result<i64, AppError> {
        let inner = self.inner.read().await;
        let count = inner.rows.iter().filter(|row| row.scope() == scope).count();
        Ok(count as i64)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<E>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner.rows.iter().find(|row| row.id() == id).cloned())
    }

    async fn insert(&self, draft: Draft) -> Result<E, AppError> {
        let mut inner = self.inner.write().await;

        let mut at = Utc::now();
        if let Some(last) = inner.last_created {
            at = at.max(last + Duration::microseconds(1));
        }
        inner.last_created = Some(at);

        let entity = E::from_draft(Uuid::new_v4(), draft, at);
        inner.rows.push(entity.clone());
        Ok(entity)
    }

    async fn save(&self, entity: &E) -> Result<E, AppError> {
        let mut inner = self.inner.write().await;
        let row = inner
            .rows
            .iter_mut()
            .find(|row| row.id() == entity.id())
            .ok_or_else(|| AppError::NotFound(format!("{} not found", E::LABEL)))?;

        row.set_content(entity.content().to_string());
        let now = Utc::now().max(row.created_at());
        row.touch(now);
        Ok(row.clone())
    }

    async fn remove(&self, entity: &E) -> Result<(), AppError> {
        let mut inner = self.inner.write().await;
        inner.rows.retain(|row| row.id() != entity.id());
        Ok(())
    }
}

/// In-process set of known scope ids (e.g. registered users).
#[derive(Default)]
pub struct MemoryDirectory {
    ids: RwLock<HashSet<Uuid>>,
}

impl MemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, id: Uuid) {
        self.ids.write().await.insert(id);
    }
}

#[async_trait]
impl ScopeDirectory for MemoryDirectory {
    async fn exists(&self, id: Uuid) -> Result<bool, AppError> {
        Ok(self.ids.read().await.contains(&id))
    }
}
