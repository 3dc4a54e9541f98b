//! Validation Support
//!
//! Create and update payloads implement [`Validatable`]. The CRUD engine
//! calls `validate` before touching the store; a failure becomes an
//! `ApiError::BadRequest` listing every field error.
//!
//! # Example
//!
//! ```rust,ignore
//! use crudkit::validation::{Validatable, ValidationErrors, validators};
//!
//! impl Validatable for ProductCreate {
//!     fn validate(&self) -> Result<(), ValidationErrors> {
//!         let mut errors = ValidationErrors::new();
//!         errors.check(validators::validate_required("name", &self.name));
//!         errors.check(validators::validate_range("price", self.price, Some(0.0), None));
//!         errors.result()
//!     }
//! }
//! ```

use serde::Serialize;
use std::fmt;

use crate::errors::ApiError;

/// Validation error with field name and message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// The field that failed validation
    pub field: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Collection of validation errors
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Record the error of a validator, if any.
    pub fn check(&mut self, outcome: Result<(), ValidationError>) {
        if let Err(error) = outcome {
            self.add(error);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Convert to Result
    ///
    /// # Errors
    ///
    /// Returns `self` when at least one error was recorded.
    pub fn result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "Validation failed: {joined}")
    }
}

impl std::error::Error for ValidationErrors {}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        Self::bad_request(errors.to_string())
    }
}

/// Implemented by create and update payloads.
pub trait Validatable {
    /// # Errors
    ///
    /// Returns every field error found.
    fn validate(&self) -> Result<(), ValidationErrors>;
}

/// Helper validators for common patterns
pub mod validators {
    use super::ValidationError;
    use std::fmt;

    /// Validate character count is within range
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` for `field` when out of range.
    pub fn validate_length(
        field: &str,
        value: &str,
        min: Option<usize>,
        max: Option<usize>,
    ) -> Result<(), ValidationError> {
        let len = value.chars().count();

        if let Some(min_len) = min
            && len < min_len
        {
            return Err(ValidationError::new(
                field,
                format!("Must be at least {min_len} characters"),
            ));
        }

        if let Some(max_len) = max
            && len > max_len
        {
            return Err(ValidationError::new(
                field,
                format!("Must be at most {max_len} characters"),
            ));
        }

        Ok(())
    }

    /// Validate number is within range
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` for `field` when out of range.
    pub fn validate_range<T: PartialOrd + fmt::Display>(
        field: &str,
        value: T,
        min: Option<T>,
        max: Option<T>,
    ) -> Result<(), ValidationError> {
        if let Some(min_val) = min
            && value < min_val
        {
            return Err(ValidationError::new(
                field,
                format!("Must be at least {min_val}"),
            ));
        }

        if let Some(max_val) = max
            && value > max_val
        {
            return Err(ValidationError::new(
                field,
                format!("Must be at most {max_val}"),
            ));
        }

        Ok(())
    }

    /// Basic email validation
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` for `field` when malformed.
    pub fn validate_email(field: &str, value: &str) -> Result<(), ValidationError> {
        let well_formed = value
            .split_once('@')
            .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
        if !well_formed {
            return Err(ValidationError::new(field, "Invalid email format"));
        }

        if value.len() > 255 {
            return Err(ValidationError::new(
                field,
                "Email must be at most 255 characters",
            ));
        }

        Ok(())
    }

    /// Validate value is not empty
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` for `field` when blank.
    pub fn validate_required(field: &str, value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::new(field, "This field is required"));
        }
        Ok(())
    }

    /// Validate an optional reference is not blank when present
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` for `field` when present but blank.
    pub fn validate_optional_required(
        field: &str,
        value: Option<&str>,
    ) -> Result<(), ValidationError> {
        value.map_or(Ok(()), |value| validate_required(field, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    #[test]
    fn test_validation_errors_collection() {
        let mut errors = ValidationErrors::new();
        assert!(errors.is_empty());

        errors.check(Ok(()));
        assert!(errors.is_empty());

        errors.check(Err(ValidationError::new("field1", "error1")));
        errors.add(ValidationError::new("field2", "error2"));
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.to_string(),
            "Validation failed: field1: error1, field2: error2"
        );
        assert!(errors.result().is_err());
    }

    #[test]
    fn test_into_bad_request() {
        let mut errors = ValidationErrors::new();
        errors.add(ValidationError::new("name", "This field is required"));
        let err: ApiError = errors.into();
        assert_eq!(err.kind(), ErrorKind::BadRequest);
        assert_eq!(err.message(), "Validation failed: name: This field is required");
    }

    #[test]
    fn test_validate_length() {
        use validators::validate_length;

        assert!(validate_length("name", "ab", Some(3), None).is_err());
        assert!(validate_length("name", "abcdef", None, Some(5)).is_err());
        assert!(validate_length("name", "abc", Some(3), Some(5)).is_ok());
        assert!(validate_length("name", "ééé", Some(3), Some(3)).is_ok());
    }

    #[test]
    fn test_validate_range() {
        use validators::validate_range;

        assert!(validate_range("price", -0.5, Some(0.0), None).is_err());
        assert!(validate_range("quantity", 150, None, Some(120)).is_err());
        assert!(validate_range("quantity", 25, Some(1), Some(120)).is_ok());
    }

    #[test]
    fn test_validate_email() {
        use validators::validate_email;

        assert!(validate_email("email", "invalid").is_err());
        assert!(validate_email("email", "@example.com").is_err());
        assert!(validate_email("email", "a@localhost").is_err());
        assert!(validate_email("email", "test@example.com").is_ok());
    }

    #[test]
    fn test_validate_required() {
        use validators::{validate_optional_required, validate_required};

        assert!(validate_required("name", "").is_err());
        assert!(validate_required("name", "   ").is_err());
        assert!(validate_required("name", "John").is_ok());
        assert!(validate_optional_required("category_id", None).is_ok());
        assert!(validate_optional_required("category_id", Some(" ")).is_err());
    }
}
