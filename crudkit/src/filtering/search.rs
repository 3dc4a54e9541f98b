use sea_orm::{ColumnTrait, Condition, sea_query::Expr};

use crate::errors::ApiError;

// Basic safety limits
const MAX_SEARCH_QUERY_LENGTH: usize = 10_000;

/// Escape character declared in every search `LIKE`. Not a backslash: MySQL
/// string literals already treat it as an escape.
const LIKE_ESCAPE: char = '!';

/// Escape LIKE wildcards so they match literally
/// Escapes: % (match any) and _ (match single char)
fn escape_like_wildcards(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, LIKE_ESCAPE | '%' | '_') {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

/// Truncate to at most `max` bytes without splitting a character.
fn truncate_on_char_boundary(input: &str, max: usize) -> &str {
    if input.len() <= max {
        return input;
    }
    let mut end = max;
    while !input.is_char_boundary(end) {
        end -= 1;
    }
    &input[..end]
}

/// Trim and bound a search query.
///
/// # Errors
///
/// Returns `ApiError::BadRequest` when the query is empty or only whitespace.
pub fn normalize_search_query(query: &str) -> Result<&str, ApiError> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Err(ApiError::bad_request("Search query must not be empty"));
    }
    Ok(truncate_on_char_boundary(trimmed, MAX_SEARCH_QUERY_LENGTH).trim_end())
}

/// Build `UPPER(col) LIKE UPPER('%query%') ESCAPE '!'` for each column, OR-ed.
///
/// Both sides are folded by the database, so a column and a pattern that
/// differ only in case compare the same way whatever `UPPER` does with
/// non-ASCII text on the active backend. `query` is expected to be
/// normalized already.
#[must_use]
pub fn build_search_condition<C: ColumnTrait>(query: &str, columns: &[C]) -> Condition {
    let pattern = format!("%{}%", escape_like_wildcards(query));
    let sql = format!("UPPER($1) LIKE UPPER($2) ESCAPE '{LIKE_ESCAPE}'");

    columns.iter().fold(Condition::any(), |condition, column| {
        condition.add(Expr::cust_with_exprs(
            sql.as_str(),
            [Expr::col(*column).into(), Expr::val(pattern.as_str()).into()],
        ))
    })
}
