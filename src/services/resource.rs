// src/services/resource.rs

use std::sync::Arc;

use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppError,
    models::{ContentPayload, Draft, OwnedResource},
    store::{Collection, ScopeDirectory},
    utils::pagination::{PageRequest, Pagination},
};

/// One page of a listing plus its metadata.
///
/// An empty page is a valid state here; how it is reported is up to the
/// handler.
#[derive(Debug, Clone)]
pub struct Page<E> {
    pub items: Vec<E>,
    pub pagination: Pagination,
}

/// Create, list, update and delete for an owner-scoped resource.
///
/// Only the owner may update or delete a record; ownership is exact equality
/// of user ids. Identifiers are validated before any storage access.
pub struct ResourceManager<E> {
    store: Arc<dyn Collection<E>>,
    scopes: Option<Arc<dyn ScopeDirectory>>,
}

impl<E> Clone for ResourceManager<E> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            scopes: self.scopes.clone(),
        }
    }
}

impl<E: OwnedResource> ResourceManager<E> {
    pub fn new(store: Arc<dyn Collection<E>>) -> Self {
        Self {
            store,
            scopes: None,
        }
    }

    /// Requires scopes to exist on list and create.
    pub fn with_scope_directory(mut self, scopes: Arc<dyn ScopeDirectory>) -> Self {
        self.scopes = Some(scopes);
        self
    }

    /// Lists records in `scope_id`, newest first.
    pub async fn list(&self, scope_id: &str, request: PageRequest) -> Result<Page<E>, AppError> {
        let scope = parse_id(scope_id, E::SCOPE)?;
        self.ensure_scope(scope).await?;

        let window = request.window(0);
        let items = self
            .store
            .find_by_scope(scope, window.skip, window.take)
            .await?;
        let total = self.store.count_by_scope(scope).await?;

        Ok(Page {
            items,
            pagination: Pagination::new(request, total),
        })
    }

    /// Creates a record owned by `owner` in `scope_id`.
    /// The content is stored exactly as supplied.
    pub async fn create(
        &self,
        scope_id: &str,
        owner: Uuid,
        payload: ContentPayload,
    ) -> Result<E, AppError> {
        validate_content(&payload)?;
        let scope = parse_id(scope_id, E::SCOPE)?;
        self.ensure_scope(scope).await?;

        let entity = self
            .store
            .insert(Draft {
                scope,
                owner,
                content: payload.into_content(),
            })
            .await?;

        tracing::info!(id = %entity.id(), owner = %owner, "{} created", E::NOUN);
        Ok(entity)
    }

    /// Replaces the content of a record owned by `actor`.
    pub async fn update(
        &self,
        id: &str,
        actor: Uuid,
        payload: ContentPayload,
    ) -> Result<E, AppError> {
        validate_content(&payload)?;
        let id = parse_id(id, E::NOUN)?;

        let mut entity = self.fetch_owned(id, actor, "update").await?;
        entity.set_content(payload.into_content());
        let saved = self.store.save(&entity).await?;

        tracing::info!(id = %id, owner = %actor, "{} updated", E::NOUN);
        Ok(saved)
    }

    /// Permanently removes a record owned by `actor` and returns it as it
    /// was before removal.
    pub async fn delete(&self, id: &str, actor: Uuid) -> Result<E, AppError> {
        let id = parse_id(id, E::NOUN)?;

        let entity = self.fetch_owned(id, actor, "delete").await?;
        self.store.remove(&entity).await?;

        tracing::info!(id = %id, owner = %actor, "{} deleted", E::NOUN);
        Ok(entity)
    }

    async fn fetch_owned(&self, id: Uuid, actor: Uuid, action: &str) -> Result<E, AppError> {
        let entity = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("{} not found", E::LABEL)))?;

        if entity.owner() != actor {
            tracing::warn!(id = %id, actor = %actor, "refused to {} {}", action, E::NOUN);
            return Err(AppError::Forbidden(format!(
                "You are not allowed to {} this {}",
                action,
                E::NOUN
            )));
        }

        Ok(entity)
    }

    async fn ensure_scope(&self, scope: Uuid) -> Result<(), AppError> {
        let Some(scopes) = &self.scopes else {
            return Ok(());
        };

        if !scopes.exists(scope).await? {
            return Err(AppError::NotFound(format!(
                "{} not found",
                capitalize(E::SCOPE)
            )));
        }
        Ok(())
    }
}

fn validate_content(payload: &ContentPayload) -> Result<(), AppError> {
    payload
        .validate()
        .map_err(|_| AppError::BadRequest("Content is required".to_string()))
}

fn parse_id(raw: &str, noun: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw.trim()).map_err(|_| AppError::BadRequest(format!("Invalid {} id", noun)))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
