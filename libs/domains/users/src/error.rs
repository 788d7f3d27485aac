use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserError {
    #[error("User not found: {0}")]
    NotFound(u64),

    #[error("User with username '{0}' not found")]
    UsernameNotFound(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("User with username '{0}' already exists")]
    Conflict(String),
}

pub type UserResult<T> = Result<T, UserError>;

/// Convert UserError to AppError for standardized error responses
impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(id) => AppError::NotFound(format!("User {} not found", id)),
            UserError::UsernameNotFound(username) => {
                AppError::NotFound(format!("User with username '{}' not found", username))
            }
            UserError::Validation(msg) => AppError::BadRequest(msg),
            UserError::Conflict(username) => {
                AppError::Conflict(format!("User with username '{}' already exists", username))
            }
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
