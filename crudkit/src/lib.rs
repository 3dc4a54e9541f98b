//! # crudkit
//!
//! A generic, entity-agnostic CRUD engine for Axum and Sea-ORM.
//!
//! One trait, [`CRUDResource`], describes an entity (table, ordering column,
//! searchable columns, create/update payloads) and provides the full set of
//! data access operations with a uniform [`ApiError`] result:
//!
//! - `create` with a server-generated identifier
//! - `get_one`
//! - `get_all` with page/limit pagination
//! - `get_all_by` a foreign key column
//! - `search` with case-insensitive substring matching
//! - `update` and `delete`, both verifying existence first
//!
//! The [`crud_handlers!`] and [`crud_router!`] macros bind those operations
//! to Axum handlers annotated for `utoipa`.

pub mod core;
pub mod errors;
pub mod filtering;
pub mod ids;
pub mod models;
pub mod routes;
pub mod validation;

pub use core::{CRUDResource, IntoNewActiveModel, MergeIntoActiveModel};
pub use errors::{ApiError, ConstraintViolation, ErrorKind};
pub use filtering::{Page, PageParams, Pagination};
pub use ids::generate_id;
pub use models::{DeleteResult, ListQuery, SearchQuery};
pub use validation::{Validatable, ValidationError, ValidationErrors};
