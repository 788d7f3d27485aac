//! Authentication module.
//!
//! Provides a static shared-secret bearer-token check for protected routes.
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::auth::{StaticToken, bearer_auth_middleware};
//! use core_config::{FromEnv, auth::AuthConfig};
//!
//! let config = AuthConfig::from_env()?;
//! let token = StaticToken::new(config.api_token);
//!
//! let protected = Router::new()
//!     .route("/api/protected", get(handler))
//!     .layer(axum::middleware::from_fn_with_state(token, bearer_auth_middleware));
//! ```

pub mod bearer;

pub use bearer::{StaticToken, bearer_auth_middleware};
