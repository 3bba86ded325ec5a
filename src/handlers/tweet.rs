use axum::{
    Extension, Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
};

use super::{id_segment, page_request};
use crate::{
    error::AppError,
    models::{
        ContentPayload,
        tweet::{Tweet, TweetPage},
    },
    response::ApiResponse,
    services::ResourceManager,
    utils::{jwt::CurrentUser, pagination::PageParams},
};

/// Create a tweet owned by the caller.
#[utoipa::path(
    post,
    path = "/api/v1/tweets",
    request_body = ContentPayload,
    responses(
        (status = 201, description = "Tweet added successfully", body = Tweet),
        (status = 400, description = "Content is required"),
        (status = 404, description = "User not found"),
    ),
    security(("bearer" = [])),
    tag = "tweets"
)]
pub async fn create_tweet(
    State(tweets): State<ResourceManager<Tweet>>,
    Extension(user): Extension<CurrentUser>,
    payload: Result<Json<ContentPayload>, JsonRejection>,
) -> Result<ApiResponse<Tweet>, AppError> {
    let Json(payload) = payload?;
    let tweet = tweets
        .create(&user.id.to_string(), user.id, payload)
        .await?;

    Ok(ApiResponse::created(tweet, "Tweet added successfully"))
}

/// List a user's tweets, newest first.
///
/// Unlike comments, an empty page is a plain 200 with an empty list.
#[utoipa::path(
    get,
    path = "/api/v1/users/{user_id}/tweets",
    params(("user_id" = String, Path, description = "User id"), PageParams),
    responses(
        (status = 200, description = "Tweets fetched successfully; `data` of the envelope", body = TweetPage),
        (status = 400, description = "Invalid user id"),
        (status = 404, description = "User not found"),
    ),
    security(("bearer" = [])),
    tag = "tweets"
)]
pub async fn list_user_tweets(
    State(tweets): State<ResourceManager<Tweet>>,
    user_id: Result<Path<String>, PathRejection>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Result<ApiResponse<TweetPage>, AppError> {
    let user_id = id_segment(user_id, "user")?;
    let page = tweets.list(&user_id, page_request(params)).await?;

    let data = TweetPage {
        tweets: page.items,
        pagination: page.pagination,
    };
    Ok(ApiResponse::ok(data, "Tweets fetched successfully"))
}

#[utoipa::path(
    patch,
    path = "/api/v1/tweets/{tweet_id}",
    params(("tweet_id" = String, Path, description = "Tweet id")),
    request_body = ContentPayload,
    responses(
        (status = 200, description = "Tweet updated successfully", body = Tweet),
        (status = 400, description = "Content is required / Invalid tweet id"),
        (status = 403, description = "Caller does not own the tweet"),
        (status = 404, description = "Tweet not found"),
    ),
    security(("bearer" = [])),
    tag = "tweets"
)]
pub async fn update_tweet(
    State(tweets): State<ResourceManager<Tweet>>,
    Extension(user): Extension<CurrentUser>,
    tweet_id: Result<Path<String>, PathRejection>,
    payload: Result<Json<ContentPayload>, JsonRejection>,
) -> Result<ApiResponse<Tweet>, AppError> {
    let Json(payload) = payload?;
    let tweet_id = id_segment(tweet_id, "tweet")?;
    let tweet = tweets.update(&tweet_id, user.id, payload).await?;

    Ok(ApiResponse::ok(tweet, "Tweet updated successfully"))
}

#[utoipa::path(
    delete,
    path = "/api/v1/tweets/{tweet_id}",
    params(("tweet_id" = String, Path, description = "Tweet id")),
    responses(
        (status = 200, description = "Tweet deleted successfully", body = Tweet),
        (status = 400, description = "Invalid tweet id"),
        (status = 403, description = "Caller does not own the tweet"),
        (status = 404, description = "Tweet not found"),
    ),
    security(("bearer" = [])),
    tag = "tweets"
)]
pub async fn delete_tweet(
    State(tweets): State<ResourceManager<Tweet>>,
    Extension(user): Extension<CurrentUser>,
    tweet_id: Result<Path<String>, PathRejection>,
) -> Result<ApiResponse<Tweet>, AppError> {
    let tweet_id = id_segment(tweet_id, "tweet")?;
    let tweet = tweets.delete(&tweet_id, user.id).await?;

    Ok(ApiResponse::ok(tweet, "Tweet deleted successfully"))
}
