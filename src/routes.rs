// src/routes.rs

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    middleware,
    routing::{get, patch, post},
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    docs,
    handlers::{comment, tweet},
    state::AppState,
    utils::jwt::auth_middleware,
};

/// Assembles the main application router.
///
/// * Every resource route sits under `/api/v1` behind the bearer-token check.
/// * The OpenAPI document is public.
/// * Applies global middleware (Trace, CORS).
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin([
            HeaderValue::from_static("http://localhost:3000"),
            HeaderValue::from_static("http://127.0.0.1:3000"),
        ])
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    let comment_routes = Router::new()
        .route(
            "/videos/{video_id}/comments",
            get(comment::list_comments).post(comment::add_comment),
        )
        .route(
            "/comments/{comment_id}",
            patch(comment::update_comment).delete(comment::delete_comment),
        );

    let tweet_routes = Router::new()
        .route("/tweets", post(tweet::create_tweet))
        .route("/users/{user_id}/tweets", get(tweet::list_user_tweets))
        .route(
            "/tweets/{tweet_id}",
            patch(tweet::update_tweet).delete(tweet::delete_tweet),
        );

    let api_routes = Router::new()
        .merge(comment_routes)
        .merge(tweet_routes)
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .nest("/api/v1", api_routes)
        .route("/api-docs/openapi.json", get(docs::openapi_json))
        // Global Middleware (applied from outside in)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
