use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::{Draft, OwnedResource};
use crate::utils::pagination::Pagination;

/// Represents the 'comments' table in the database.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: Uuid,

    /// The video this comment is attached to.
    #[sqlx(rename = "video_id")]
    pub video: Uuid,

    #[sqlx(rename = "owner_id")]
    pub owner: Uuid,

    pub content: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl OwnedResource for Comment {
    const LABEL: &'static str = "Comment";
    const NOUN: &'static str = "comment";
    const SCOPE: &'static str = "video";

    fn id(&self) -> Uuid {
        self.id
    }

    fn owner(&self) -> Uuid {
        self.owner
    }

    fn scope(&self) -> Uuid {
        self.video
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
            video: draft.scope,
            owner: draft.owner,
            content: draft.content,
            created_at: at,
            updated_at: at,
        }
    }
}

/// `data` of a successful video listing, newest first.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentPage {
    pub comments: Vec<Comment>,
    pub pagination: Pagination,
}
