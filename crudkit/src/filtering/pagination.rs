use axum::http::header::HeaderMap;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::errors::ApiError;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;
pub const MAX_LIMIT: u64 = 100;

/// Raw pagination parameters, as received from the caller.
#[derive(Debug, Clone, Copy, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// 1-based page number (default 1)
    #[param(minimum = 1, example = 1)]
    pub page: Option<u64>,
    /// Page size between 1 and 100 (default 10)
    #[param(minimum = 1, maximum = 100, example = 10)]
    pub limit: Option<u64>,
}

impl PageParams {
    #[must_use]
    pub const fn new(page: u64, limit: u64) -> Self {
        Self {
            page: Some(page),
            limit: Some(limit),
        }
    }

    /// Apply defaults and check bounds before any query runs.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::BadRequest` when `page < 1` or `limit` is outside `1..=100`.
    pub fn validate(self) -> Result<PageRequest, ApiError> {
        let page = self.page.unwrap_or(DEFAULT_PAGE);
        let limit = self.limit.unwrap_or(DEFAULT_LIMIT);

        if page < 1 {
            return Err(ApiError::bad_request("page must be greater than or equal to 1"));
        }
        if !(1..=MAX_LIMIT).contains(&limit) {
            return Err(ApiError::bad_request(format!(
                "limit must be between 1 and {MAX_LIMIT}"
            )));
        }
        Ok(PageRequest { page, limit })
    }
}

/// Validated pagination parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub limit: u64,
}

impl PageRequest {
    #[must_use]
    pub const fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

/// Pagination block returned with every list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub total_pages: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl Pagination {
    #[must_use]
    pub const fn new(request: PageRequest, total: u64) -> Self {
        let total_pages = total.div_ceil(request.limit);
        Self {
            page: request.page,
            limit: request.limit,
            total,
            total_pages,
            has_next: request.page < total_pages,
            has_prev: request.page > 1,
        }
    }

    #[must_use]
    pub const fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

/// A page of records plus its pagination block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

impl<T> Page<T> {
    #[must_use]
    pub const fn new(items: Vec<T>, pagination: Pagination) -> Self {
        Self { items, pagination }
    }
}

/// Sanitize resource name by removing control characters for HTTP headers
fn sanitize_resource_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii() && !c.is_ascii_control())
        .collect()
}

/// Build the `Content-Range` header for a page, e.g. `authors 0-9/42`.
///
/// A page that starts at or past the end of the collection has no range and
/// is reported as `authors */42`. The resource name is stripped of non-ASCII
/// and control characters.
#[must_use]
pub fn calculate_content_range(pagination: &Pagination, resource_name: &str) -> HeaderMap {
    let offset = pagination.offset();
    let total = pagination.total;
    let range = if offset >= total {
        "*".to_string()
    } else {
        let last = offset
            .saturating_add(pagination.limit)
            .saturating_sub(1)
            .min(total - 1);
        format!("{offset}-{last}")
    };
    let safe_name = sanitize_resource_name(resource_name);

    let mut headers = HeaderMap::new();
    let content_range = format!("{safe_name} {range}/{total}");
    if let Ok(value) = content_range.parse() {
        headers.insert("Content-Range", value);
    } else if let Ok(value) = format!("items {range}/{total}").parse() {
        headers.insert("Content-Range", value);
    }
    headers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    fn request(page: u64, limit: u64) -> PageRequest {
        PageParams::new(page, limit).validate().unwrap()
    }

    #[test]
    fn test_defaults() {
        let request = PageParams::default().validate().unwrap();
        assert_eq!(request, PageRequest { page: 1, limit: 10 });
        assert_eq!(request.offset(), 0);
    }

    #[test]
    fn test_rejects_page_zero() {
        let err = PageParams::new(0, 10).validate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadRequest);
    }

    #[test]
    fn test_limit_bounds() {
        assert_eq!(
            PageParams::new(1, 0).validate().unwrap_err().kind(),
            ErrorKind::BadRequest
        );
        assert_eq!(
            PageParams::new(1, 101).validate().unwrap_err().kind(),
            ErrorKind::BadRequest
        );
        assert!(PageParams::new(1, 1).validate().is_ok());
        assert!(PageParams::new(1, 100).validate().is_ok());
    }

    #[test]
    fn test_offset() {
        assert_eq!(request(1, 10).offset(), 0);
        assert_eq!(request(2, 5).offset(), 5);
        assert_eq!(request(7, 100).offset(), 600);
    }

    #[test]
    fn test_pagination_math() {
        for total in [0_u64, 1, 9, 10, 11, 99, 100, 101, 250] {
            for limit in [1_u64, 3, 10, 100] {
                for page in 1..=5 {
                    let p = Pagination::new(request(page, limit), total);
                    assert_eq!(p.total_pages, total.div_ceil(limit));
                    assert_eq!(p.has_next, page < p.total_pages);
                    assert_eq!(p.has_prev, page > 1);
                }
            }
        }
    }

    #[test]
    fn test_empty_result_pagination() {
        let p = Pagination::new(request(1, 10), 0);
        assert_eq!(p.total_pages, 0);
        assert!(!p.has_next);
        assert!(!p.has_prev);
    }

    #[test]
    fn test_page_past_the_end() {
        let p = Pagination::new(request(5, 10), 15);
        assert_eq!(p.total_pages, 2);
        assert!(!p.has_next);
        assert!(p.has_prev);
    }

    #[test]
    fn test_pagination_serializes_camel_case() {
        let value = serde_json::to_value(Pagination::new(request(2, 5), 10)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "page": 2,
                "limit": 5,
                "total": 10,
                "totalPages": 2,
                "hasNext": false,
                "hasPrev": true
            })
        );
    }

    #[test]
    fn test_content_range_normal() {
        let headers = calculate_content_range(&Pagination::new(request(1, 10), 100), "users");
        let value = headers.get("Content-Range").unwrap().to_str().unwrap();
        assert_eq!(value, "users 0-9/100");
    }

    #[test]
    fn test_content_range_last_partial_page() {
        let headers = calculate_content_range(&Pagination::new(request(3, 10), 25), "books");
        let value = headers.get("Content-Range").unwrap().to_str().unwrap();
        assert_eq!(value, "books 20-24/25");
    }

    #[test]
    fn test_content_range_zero_items() {
        let headers = calculate_content_range(&Pagination::new(request(1, 10), 0), "users");
        let value = headers.get("Content-Range").unwrap().to_str().unwrap();
        assert_eq!(value, "users */0");
    }

    #[test]
    fn test_content_range_past_the_end() {
        let headers = calculate_content_range(&Pagination::new(request(5, 10), 3), "authors");
        let value = headers.get("Content-Range").unwrap().to_str().unwrap();
        assert_eq!(value, "authors */3");

        let headers = calculate_content_range(&Pagination::new(request(2, 10), 10), "authors");
        let value = headers.get("Content-Range").unwrap().to_str().unwrap();
        assert_eq!(value, "authors */10");
    }

    #[test]
    fn test_content_range_huge_page() {
        let p = Pagination::new(request(u64::MAX / 100 + 1, 100), 7);
        let headers = calculate_content_range(&p, "authors");
        let value = headers.get("Content-Range").unwrap().to_str().unwrap();
        assert_eq!(value, "authors */7");
    }

    #[test]
    fn test_content_range_strips_control_chars() {
        let headers = calculate_content_range(
            &Pagination::new(request(1, 10), 100),
            "users\r\nInjected: evil",
        );
        let value = headers.get("Content-Range").unwrap().to_str().unwrap();
        assert!(!value.contains('\r'));
        assert!(!value.contains('\n'));
    }
}
