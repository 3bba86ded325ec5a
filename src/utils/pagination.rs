// src/utils/pagination.rs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;

/// Raw `?page=&limit=` query parameters.
///
/// Kept as strings so that junk input falls back to the defaults instead of
/// rejecting the request.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// 1-based page number (default 1).
    pub page: Option<String>,
    /// Items per page (default 10).
    pub limit: Option<String>,
}

/// A sanitised page request: both values are always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub limit: i64,
}

impl PageRequest {
    /// Coerces `page` and `limit` to positive integers.
    /// Non-positive values fall back to the defaults.
    pub fn new(page: i64, limit: i64) -> Self {
        Self {
            page: if page > 0 { page } else { DEFAULT_PAGE },
            limit: if limit > 0 { limit } else { DEFAULT_LIMIT },
        }
    }

    pub fn window(&self, total: i64) -> Window {
        compute_window(self.page, self.limit, total)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_LIMIT)
    }
}

impl From<PageParams> for PageRequest {
    fn from(params: PageParams) -> Self {
        Self::new(
            parse_positive(params.page.as_deref()).unwrap_or(DEFAULT_PAGE),
            parse_positive(params.limit.as_deref()).unwrap_or(DEFAULT_LIMIT),
        )
    }
}

fn parse_positive(raw: Option<&str>) -> Option<i64> {
    raw?.trim().parse::<i64>().ok().filter(|v| *v > 0)
}

/// Offset window for one page of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub skip: i64,
    pub take: i64,
    pub total_pages: i64,
}

/// `skip = (page - 1) * limit`, `take = limit`, `total_pages = ceil(total / limit)`.
pub fn compute_window(page: i64, limit: i64, total: i64) -> Window {
    let PageRequest { page, limit } = PageRequest::new(page, limit);
    let total = total.max(0);

    let mut total_pages = total / limit;
    if total % limit != 0 {
        total_pages += 1;
    }

    Window {
        skip: (page - 1).saturating_mul(limit),
        take: limit,
        total_pages,
    }
}

/// Pagination metadata returned next to every listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub total_pages: i64,
}

impl Pagination {
    pub fn new(request: PageRequest, total: i64) -> Self {
        Self {
            total,
            page: request.page,
            limit: request.limit,
            total_pages: request.window(total).total_pages,
        }
    }
}
