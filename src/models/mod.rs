// src/models/mod.rs

pub mod comment;
pub mod tweet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// A record whose update and delete rights belong exclusively to the user
/// stored as its `owner`.
///
/// Listings are filtered by `scope()`: the parent video for comments, the
/// owning user for tweets.
pub trait OwnedResource: Clone + Send + Sync + Serialize + 'static {
    /// Capitalised singular, used in messages ("Comment").
    const LABEL: &'static str;
    /// Lowercase singular ("comment").
    const NOUN: &'static str;
    /// What the scope identifier refers to ("video", "user").
    const SCOPE: &'static str;

    fn id(&self) -> Uuid;
    fn owner(&self) -> Uuid;
    fn scope(&self) -> Uuid;
    fn content(&self) -> &str;
    fn created_at(&self) -> DateTime<Utc>;

    /// Replaces the content. Owner, scope and creation time stay untouched.
    fn set_content(&mut self, content: String);

    /// Records a modification time.
    fn touch(&mut self, at: DateTime<Utc>);

    /// Builds a stored record from a draft once the storage layer has
    /// assigned its identifier and timestamp.
    fn from_draft(id: Uuid, draft: Draft, at: DateTime<Utc>) -> Self;
}

/// A not-yet-persisted resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub scope: Uuid,
    pub owner: Uuid,
    pub content: String,
}

/// Request body for creating or updating a comment or tweet.
///
/// A missing field, an explicit `null` and a whitespace-only string are all
/// the same "Content is required" failure.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct ContentPayload {
    /// Stored exactly as supplied; only checked for being non-blank.
    #[validate(required, custom(function = "not_blank"))]
    pub content: Option<String>,
}

impl ContentPayload {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
        }
    }

    /// The supplied content, empty if none was sent.
    pub fn into_content(self) -> String {
        self.content.unwrap_or_default()
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("Content is required".into()));
    }
    Ok(())
}
