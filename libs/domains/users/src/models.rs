use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Page number used when the caller omits one or passes a non-positive value
pub const DEFAULT_PAGE: usize = 1;
/// Page size used when the caller omits one or passes a non-positive value
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// User entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Store-assigned identifier, never reused
    pub id: u64,
    /// Unique, case-sensitive login name
    pub username: String,
    /// Age in years
    pub age: i64,
}

/// DTO for creating a new user
///
/// The 100-character username cap is an HTTP boundary rule; the repository
/// itself accepts any non-blank username.
#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct CreateUser {
    #[validate(length(min = 1, max = 100))]
    pub username: String,
    #[validate(range(min = 0))]
    pub age: i64,
}

/// DTO for updating an existing user
///
/// Every field is optional; an absent (or `null`) field leaves the stored value
/// unchanged. A blank `username` is also treated as "unchanged".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, Validate, ToSchema)]
pub struct UpdateUser {
    #[validate(length(max = 100))]
    pub username: Option<String>,
    #[validate(range(min = 0))]
    pub age: Option<i64>,
}

impl UpdateUser {
    pub fn username(username: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            age: None,
        }
    }

    pub fn age(age: i64) -> Self {
        Self {
            username: None,
            age: Some(age),
        }
    }
}

/// Query parameters for listing users
#[derive(Debug, Clone, Copy, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// 1-based page number (default 1)
    pub page: Option<i64>,
    /// Page size (default 10)
    pub size: Option<i64>,
}

/// Resolved pagination window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub size: usize,
}

impl Pagination {
    /// Applies defaults: missing or non-positive values fall back rather than error.
    pub fn resolve(page: Option<i64>, size: Option<i64>) -> Self {
        Self {
            page: positive_or(page, DEFAULT_PAGE),
            size: positive_or(size, DEFAULT_PAGE_SIZE),
        }
    }

    /// Number of entries preceding this page. Saturates for absurd page numbers.
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.size)
    }
}

impl From<ListParams> for Pagination {
    fn from(params: ListParams) -> Self {
        Self::resolve(params.page, params.size)
    }
}

fn positive_or(value: Option<i64>, default: usize) -> usize {
    match value {
        Some(v) if v > 0 => usize::try_from(v).unwrap_or(usize::MAX),
        _ => default,
    }
}

/// List response with pagination info
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserPage {
    pub data: Vec<User>,
    pub page: usize,
    pub size: usize,
    /// Number of live users in the store
    pub total: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_defaults() {
        assert_eq!(
            Pagination::resolve(None, None),
            Pagination { page: 1, size: 10 }
        );
        assert_eq!(
            Pagination::resolve(Some(0), Some(-5)),
            Pagination { page: 1, size: 10 }
        );
        assert_eq!(
            Pagination::resolve(Some(3), Some(2)),
            Pagination { page: 3, size: 2 }
        );
    }

    #[test]
    fn test_pagination_offset_saturates() {
        assert_eq!(Pagination::resolve(Some(2), Some(2)).offset(), 2);
        assert_eq!(Pagination::resolve(Some(1), Some(50)).offset(), 0);
        assert_eq!(
            Pagination::resolve(Some(i64::MAX), Some(i64::MAX)).offset(),
            usize::MAX
        );
    }

    #[test]
    fn test_update_user_absent_and_null_fields_deserialize_to_none() {
        let update: UpdateUser = serde_json::from_str(r#"{"age": null}"#).unwrap();
        assert_eq!(update, UpdateUser::default());

        let update: UpdateUser = serde_json::from_str(r#"{"username": "bob"}"#).unwrap();
        assert_eq!(update, UpdateUser::username("bob"));
    }
}
