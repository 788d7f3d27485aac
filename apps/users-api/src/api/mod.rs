//! API routes module

pub mod users;

use axum::{middleware, Router};
use axum_helpers::{bearer_auth_middleware, create_router, health_router, StaticToken};
use std::io;

use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Create all API routes, guarded by the static bearer token
pub fn routes(state: &AppState) -> Router {
    let token = StaticToken::new(state.config.auth.api_token.clone());

    Router::new()
        .nest("/users", users::router(state))
        .layer(middleware::from_fn_with_state(token, bearer_auth_middleware))
}

/// Full application: `/api` behind auth, docs, and an open `/health`
pub fn app(state: &AppState) -> io::Result<Router> {
    let router = create_router::<ApiDoc>(routes(state), &state.config.server)?;
    Ok(router.merge(health_router(state.config.app)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Environment};
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        response::Response,
    };
    use core_config::{auth::AuthConfig, server::ServerConfig, AppInfo};
    use domain_users::User;
    use http_body_util::BodyExt;
    use serde_json::json;
    use tower::ServiceExt;

    const TOKEN: &str = "test-token";

    fn test_app() -> Router {
        let config = Config {
            app: AppInfo {
                name: "users_api",
                version: "0.1.0",
            },
            server: ServerConfig::default(),
            auth: AuthConfig::new(TOKEN),
            environment: Environment::Development,
        };
        app(&AppState::new(config)).unwrap()
    }

    async fn call(app: &Router, request: Request<Body>) -> Response {
        app.clone().oneshot(request).await.unwrap()
    }

    fn authed(method: &str, uri: &str) -> axum::http::request::Builder {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::AUTHORIZATION, format!("Bearer {}", TOKEN))
    }

    #[tokio::test]
    async fn test_api_requires_bearer_token() {
        let app = test_app();

        let response = call(
            &app,
            Request::get("/api/users").body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = call(
            &app,
            Request::get("/api/users")
                .header(header::AUTHORIZATION, "Bearer wrong")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = call(&app, authed("GET", "/api/users").body(Body::empty()).unwrap()).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_rejected_request_does_not_reach_store() {
        let app = test_app();

        let response = call(
            &app,
            Request::post("/api/users")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json!({ "username": "mallory", "age": 1 }).to_string()))
                .unwrap(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = call(
            &app,
            authed("GET", "/api/users/by-username/mallory")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_health_is_open() {
        let app = test_app();

        let response = call(&app, Request::get("/health").body(Body::empty()).unwrap()).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_create_then_fetch_through_full_stack() {
        let app = test_app();

        let response = call(
            &app,
            authed("POST", "/api/users")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json!({ "username": "alice", "age": 30 }).to_string()))
                .unwrap(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let created: User = serde_json::from_slice(&bytes).unwrap();

        let response = call(
            &app,
            authed("GET", &format!("/api/users/{}", created.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("x-content-type-options").unwrap(),
            "nosniff"
        );
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let app = test_app();

        let response = call(&app, Request::get("/nope").body(Body::empty()).unwrap()).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }

    #[tokio::test]
    async fn test_openapi_document_lists_user_paths() {
        let app = test_app();

        let response = call(
            &app,
            Request::get("/api-docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let doc: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(doc["paths"]["/api/users/{id}"].is_object());
        assert!(doc["paths"]["/api/users/by-username/{username}"].is_object());
    }
}
