// src/handlers/mod.rs

pub mod comment;
pub mod tweet;

use axum::extract::{
    Path, Query,
    rejection::{PathRejection, QueryRejection},
};

use crate::{
    error::AppError,
    utils::pagination::{PageParams, PageRequest},
};

/// Unwraps an id path segment. A segment axum cannot decode (bad percent
/// escapes, invalid UTF-8) is reported like any other malformed id.
fn id_segment(path: Result<Path<String>, PathRejection>, noun: &str) -> Result<String, AppError> {
    path.map(|Path(raw)| raw).map_err(|rejection| {
        tracing::debug!("Undecodable {} id: {}", noun, rejection.body_text());
        AppError::BadRequest(format!("Invalid {} id", noun))
    })
}

/// Paging never fails a request: an undecodable query string (e.g. a
/// repeated `page`) is treated like an absent one.
fn page_request(params: Result<Query<PageParams>, QueryRejection>) -> PageRequest {
    params
        .map(|Query(params)| PageRequest::from(params))
        .unwrap_or_default()
}
