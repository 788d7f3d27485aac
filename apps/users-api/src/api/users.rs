//! Users API routes

use axum::Router;
use domain_users::{handlers, UserService};

use crate::state::AppState;

/// Create users router over the shared repository
pub fn router(state: &AppState) -> Router {
    let service = UserService::new(state.repository.clone());
    handlers::router(service)
}
