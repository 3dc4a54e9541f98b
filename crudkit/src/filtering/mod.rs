//! # Pagination & Search
//!
//! Query construction shared by every list operation:
//!
//! - [`PageParams`] / [`PageRequest`]: `page`/`limit` parsing and bounds checks
//! - [`Pagination`] / [`Page`]: the block returned alongside every list
//! - [`build_search_condition`]: case-insensitive substring match over the
//!   searchable columns of an entity
//!
//! ```rust,ignore
//! GET /authors?page=2&limit=5
//! GET /authors/search?query=tolkien&page=1&limit=10
//! GET /books/by-author/{author_id}?page=1
//! ```

pub mod pagination;
pub mod search;

pub use pagination::{
    DEFAULT_LIMIT, DEFAULT_PAGE, MAX_LIMIT, Page, PageParams, PageRequest, Pagination,
    calculate_content_range,
};
pub use search::{build_search_condition, normalize_search_query};
