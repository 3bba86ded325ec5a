// src/docs.rs

use axum::Json;
use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};

use crate::{
    handlers::{comment, tweet},
    models::{
        ContentPayload,
        comment::{Comment, CommentPage},
        tweet::{Tweet, TweetPage},
    },
    utils::pagination::Pagination,
};

/// OpenAPI description of the public surface.
/// Every documented body is delivered inside the `{status, data, message}` envelope.
#[derive(OpenApi)]
#[openapi(
    paths(
        comment::list_comments,
        comment::add_comment,
        comment::update_comment,
        comment::delete_comment,
        tweet::create_tweet,
        tweet::list_user_tweets,
        tweet::update_tweet,
        tweet::delete_tweet,
    ),
    components(schemas(Comment, CommentPage, Tweet, TweetPage, ContentPayload, Pagination)),
    modifiers(&BearerAuth),
    tags(
        (name = "comments", description = "Comments attached to videos"),
        (name = "tweets", description = "Tweets owned by users"),
    )
)]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Serves the OpenAPI document as JSON.
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
