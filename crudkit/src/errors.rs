//! # Uniform Result/Error Contract
//!
//! Every data access operation returns `Result<T, ApiError>`. The error side
//! carries one of a fixed set of kinds ([`ErrorKind`]) and a human-readable
//! message; the route binding layer turns it into an HTTP response through
//! [`IntoResponse`].
//!
//! | Kind | Status |
//! |---|---|
//! | `BadRequest` | 400 |
//! | `Unauthorized` | 401 |
//! | `NotFound` | 404 |
//! | `Conflict` | 409 |
//! | `RateLimited` | 429 (+ `Retry-After`) |
//! | `InternalServerError` | 500 |
//!
//! ## Logging
//!
//! Internal errors are logged at `error` level with the `tracing` crate when
//! they are turned into a response; all other kinds are logged at `debug`.
//!
//! ```rust,ignore
//! tracing_subscriber::fmt()
//!     .with_target(false)
//!     .compact()
//!     .init();
//! ```

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::{HeaderValue, StatusCode, header::RETRY_AFTER},
    response::{IntoResponse, Response},
};
use sea_orm::{DbErr, SqlErr};
use serde::Serialize;
use std::fmt;

/// The closed set of error kinds shared by every entity module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    BadRequest,
    InternalServerError,
    Conflict,
    NotFound,
    Unauthorized,
    RateLimited,
}

impl ErrorKind {
    pub const ALL: [Self; 6] = [
        Self::BadRequest,
        Self::InternalServerError,
        Self::Conflict,
        Self::NotFound,
        Self::Unauthorized,
        Self::RateLimited,
    ];

    /// Stable wire code, as written in error bodies.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::BadRequest => "BAD_REQUEST",
            Self::InternalServerError => "INTERNAL_SERVER_ERROR",
            Self::Conflict => "CONFLICT",
            Self::NotFound => "NOT_FOUND",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::RateLimited => "RATE_LIMITED",
        }
    }

    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }

    #[must_use]
    pub const fn status_code(self) -> StatusCode {
        match self {
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Conflict => StatusCode::CONFLICT,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::RateLimited => StatusCode::TOO_MANY_REQUESTS,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Maps a wire code to its status. Unrecognized codes are treated as 500.
#[must_use]
pub fn status_for_code(code: &str) -> StatusCode {
    ErrorKind::from_code(code).map_or(StatusCode::INTERNAL_SERVER_ERROR, ErrorKind::status_code)
}

/// API error returned by every CRUD operation.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request - Invalid input, pagination bounds, bad references
    BadRequest {
        /// User-facing error message
        message: String,
    },

    /// 404 Not Found - Referenced record doesn't exist
    NotFound {
        /// Resource type (e.g., "author", "book")
        resource: String,
        /// Optional ID that wasn't found
        id: Option<String>,
    },

    /// 409 Conflict - Identifier or unique value collision
    Conflict {
        /// User-facing error message
        message: String,
    },

    /// 401 Unauthorized - Reserved for authentication layers
    Unauthorized {
        /// User-facing error message
        message: String,
    },

    /// 429 Too Many Requests - Reserved for rate limiting layers
    RateLimited {
        /// User-facing error message
        message: String,
        /// Seconds until the caller may retry
        retry_after: u64,
    },

    /// 500 Internal Server Error - Unclassified storage failure
    Internal {
        /// User-facing context, e.g. "Failed to create author"
        message: String,
        /// Driver message, appended to the user message for diagnostics
        internal: Option<String>,
    },
}

/// The write that produced a storage error, used to word constraint errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteAction {
    Create,
    Update,
    Delete,
}

impl WriteAction {
    const fn verb(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl ApiError {
    /// Create a 404 Not Found error
    ///
    /// # Example
    /// ```rust,ignore
    /// return Err(ApiError::not_found("author", Some(id.to_string())));
    /// ```
    pub fn not_found(resource: impl Into<String>, id: Option<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
            id,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Create a 429 error carrying a retry hint in seconds
    pub fn rate_limited(message: impl Into<String>, retry_after: u64) -> Self {
        Self::RateLimited {
            message: message.into(),
            retry_after,
        }
    }

    pub fn internal(message: impl Into<String>, internal: Option<String>) -> Self {
        Self::Internal {
            message: message.into(),
            internal,
        }
    }

    /// Create a 500 error from a storage failure, keeping the driver message
    ///
    /// # Example
    /// ```rust,ignore
    /// let model = entity.insert(db).await.map_err(|e| ApiError::database("Failed to create author", e))?;
    /// ```
    pub fn database(context: impl Into<String>, err: DbErr) -> Self {
        Self::Internal {
            message: context.into(),
            internal: Some(err.to_string()),
        }
    }

    /// Classify a failed insert/update/delete.
    ///
    /// Unique violations become `Conflict`, foreign key violations become
    /// `BadRequest`, anything else is an internal error.
    #[must_use]
    pub fn from_write_error(err: DbErr, resource: &str, action: WriteAction) -> Self {
        match ConstraintViolation::classify(&err) {
            Some(ConstraintViolation::Unique(detail)) => {
                Self::conflict(format!("{resource} already exists: {detail}"))
            }
            Some(ConstraintViolation::ForeignKey(_)) if action == WriteAction::Delete => {
                Self::bad_request(format!("{resource} is still referenced by other records"))
            }
            Some(ConstraintViolation::ForeignKey(detail)) => {
                Self::bad_request(format!("Invalid reference on {resource}: {detail}"))
            }
            None => Self::database(format!("Failed to {} {resource}", action.verb()), err),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::BadRequest { .. } => ErrorKind::BadRequest,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Conflict { .. } => ErrorKind::Conflict,
            Self::Unauthorized { .. } => ErrorKind::Unauthorized,
            Self::RateLimited { .. } => ErrorKind::RateLimited,
            Self::Internal { .. } => ErrorKind::InternalServerError,
        }
    }

    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        self.kind().status_code()
    }

    #[must_use]
    pub const fn retry_after(&self) -> Option<u64> {
        match self {
            Self::RateLimited { retry_after, .. } => Some(*retry_after),
            _ => None,
        }
    }

    /// The message sent to the caller.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::NotFound { resource, id } => match id {
                Some(id) => format!("{resource} with ID '{id}' not found"),
                None => format!("{resource} not found"),
            },
            Self::Internal {
                message,
                internal: Some(details),
            } => format!("{message}: {details}"),
            Self::BadRequest { message }
            | Self::Conflict { message }
            | Self::Unauthorized { message }
            | Self::RateLimited { message, .. }
            | Self::Internal { message, .. } => message.clone(),
        }
    }

    fn log(&self) {
        match self {
            Self::Internal { message, internal } => {
                tracing::error!(
                    details = internal.as_deref().unwrap_or(""),
                    "{message}"
                );
            }
            _ => {
                tracing::debug!(
                    error = %self.message(),
                    kind = %self.kind(),
                    "API error"
                );
            }
        }
    }
}

/// Error body sent to callers
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    code: ErrorKind,
    #[serde(rename = "retryAfter", skip_serializing_if = "Option::is_none")]
    retry_after: Option<u64>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.log();

        let status = self.status_code();
        let retry_after = self.retry_after();
        let body = ErrorResponse {
            error: self.message(),
            code: self.kind(),
            retry_after,
        };

        let mut response = (status, Json(body)).into_response();
        if let Some(seconds) = retry_after {
            response
                .headers_mut()
                .insert(RETRY_AFTER, HeaderValue::from(seconds));
        }
        response
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

// Lower-cased fragments of driver messages, checked only when the driver
// gives no typed constraint signal.
const UNIQUE_PATTERNS: &[&str] = &[
    "unique constraint failed",
    "duplicate key value",
    "duplicate entry",
];
const FOREIGN_KEY_PATTERNS: &[&str] = &[
    "foreign key constraint failed",
    "violates foreign key constraint",
    "a foreign key constraint fails",
];

/// A constraint violation reported by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstraintViolation {
    Unique(String),
    ForeignKey(String),
}

impl ConstraintViolation {
    /// Typed driver signal first, message matching as a fallback.
    #[must_use]
    pub fn classify(err: &DbErr) -> Option<Self> {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => return Some(Self::Unique(detail)),
            Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                return Some(Self::ForeignKey(detail));
            }
            _ => {}
        }
        Self::classify_message(&err.to_string())
    }

    fn classify_message(message: &str) -> Option<Self> {
        let lower = message.to_lowercase();
        if UNIQUE_PATTERNS.iter().any(|p| lower.contains(p)) {
            Some(Self::Unique(message.to_string()))
        } else if FOREIGN_KEY_PATTERNS.iter().any(|p| lower.contains(p)) {
            Some(Self::ForeignKey(message.to_string()))
        } else {
            None
        }
    }
}
