use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::{Draft, OwnedResource};
use crate::utils::pagination::Pagination;

/// Represents the 'tweets' table in the database.
/// A tweet has no parent; it is scoped by its owner.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Tweet {
    pub id: Uuid,

    #[sqlx(rename = "owner_id")]
    pub owner: Uuid,

    pub content: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl OwnedResource for Tweet {
    const LABEL: &'static str = "Tweet";
    const NOUN: &'static str = "tweet";
    const SCOPE: &'static str = "user";

    fn id(&self) -> Uuid {
        self.id
    }

    fn owner(&self) -> Uuid {
        self.owner
    }

    fn scope(&self) -> Uuid {
        self.owner
    }

    fn content(&self) -> &str {
        &self.content
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn set_content(&mut self, content: String) {
        self.content = content;
    }

    fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
    }

    fn from_draft(id: Uuid, draft: Draft, at: DateTime<Utc>) -> Self {
        Self {
            id,
            owner: draft.owner,
            content: draft.content,
            created_at: at,
            updated_at: at,
        }
    }
}

/// `data` of a successful user listing, newest first.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TweetPage {
    pub tweets: Vec<Tweet>,
    pub pagination: Pagination,
}
