use axum::{
    Extension, Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use super::{id_segment, page_request};
use crate::{
    error::AppError,
    models::{
        ContentPayload,
        comment::{Comment, CommentPage},
    },
    response::ApiResponse,
    services::ResourceManager,
    utils::{jwt::CurrentUser, pagination::PageParams},
};

/// List a video's comments, newest first.
///
/// A page without comments is answered with 404 and `data: []`.
#[utoipa::path(
    get,
    path = "/api/v1/videos/{video_id}/comments",
    params(("video_id" = String, Path, description = "Video id"), PageParams),
    responses(
        (status = 200, description = "Comments fetched successfully; `data` of the envelope", body = CommentPage),
        (status = 400, description = "Invalid video id"),
        (status = 404, description = "No comments found for this video"),
    ),
    security(("bearer" = [])),
    tag = "comments"
)]
pub async fn list_comments(
    State(comments): State<ResourceManager<Comment>>,
    video_id: Result<Path<String>, PathRejection>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Result<Response, AppError> {
    let video_id = id_segment(video_id, "video")?;
    let page = comments.list(&video_id, page_request(params)).await?;

    if page.items.is_empty() {
        return Ok(ApiResponse::new(
            StatusCode::NOT_FOUND,
            json!([]),
            "No comments found for this video",
        )
        .into_response());
    }

    let data = CommentPage {
        comments: page.items,
        pagination: page.pagination,
    };
    Ok(ApiResponse::ok(data, "Comments fetched successfully").into_response())
}

/// Add a comment to a video. The video itself is not looked up.
#[utoipa::path(
    post,
    path = "/api/v1/videos/{video_id}/comments",
    params(("video_id" = String, Path, description = "Video id")),
    request_body = ContentPayload,
    responses(
        (status = 201, description = "Comment added successfully", body = Comment),
        (status = 400, description = "Content is required / Invalid video id"),
    ),
    security(("bearer" = [])),
    tag = "comments"
)]
pub async fn add_comment(
    State(comments): State<ResourceManager<Comment>>,
    Extension(user): Extension<CurrentUser>,
    video_id: Result<Path<String>, PathRejection>,
    payload: Result<Json<ContentPayload>, JsonRejection>,
) -> Result<ApiResponse<Comment>, AppError> {
    let Json(payload) = payload?;
    let video_id = id_segment(video_id, "video")?;
    let comment = comments.create(&video_id, user.id, payload).await?;

    Ok(ApiResponse::created(comment, "Comment added successfully"))
}

#[utoipa::path(
    patch,
    path = "/api/v1/comments/{comment_id}",
    params(("comment_id" = String, Path, description = "Comment id")),
    request_body = ContentPayload,
    responses(
        (status = 200, description = "Comment updated successfully", body = Comment),
        (status = 400, description = "Content is required / Invalid comment id"),
        (status = 403, description = "Caller does not own the comment"),
        (status = 404, description = "Comment not found"),
    ),
    security(("bearer" = [])),
    tag = "comments"
)]
pub async fn update_comment(
    State(comments): State<ResourceManager<Comment>>,
    Extension(user): Extension<CurrentUser>,
    comment_id: Result<Path<String>, PathRejection>,
    payload: Result<Json<ContentPayload>, JsonRejection>,
) -> Result<ApiResponse<Comment>, AppError> {
    let Json(payload) = payload?;
    let comment_id = id_segment(comment_id, "comment")?;
    let comment = comments.update(&comment_id, user.id, payload).await?;

    Ok(ApiResponse::ok(comment, "Comment updated successfully"))
}

#[utoipa::path(
    delete,
    path = "/api/v1/comments/{comment_id}",
    params(("comment_id" = String, Path, description = "Comment id")),
    responses(
        (status = 200, description = "Comment deleted successfully", body = Comment),
        (status = 400, description = "Invalid comment id"),
        (status = 403, description = "Caller does not own the comment"),
        (status = 404, description = "Comment not found"),
    ),
    security(("bearer" = [])),
    tag = "comments"
)]
pub async fn delete_comment(
    State(comments): State<ResourceManager<Comment>>,
    Extension(user): Extension<CurrentUser>,
    comment_id: Result<Path<String>, PathRejection>,
) -> Result<ApiResponse<Comment>, AppError> {
    let comment_id = id_segment(comment_id, "comment")?;
    let comment = comments.delete(&comment_id, user.id).await?;

    Ok(ApiResponse::ok(comment, "Comment deleted successfully"))
}
