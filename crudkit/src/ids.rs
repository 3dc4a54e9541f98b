//! Server-side identifier generation.

/// Length of generated identifiers.
pub const ID_LENGTH: usize = 21;

/// Generate a fresh URL-safe identifier of [`ID_LENGTH`] characters.
///
/// Identifiers are assigned once, at creation, and never change.
#[must_use]
pub fn generate_id() -> String {
    nanoid::nanoid!(ID_LENGTH)
}
