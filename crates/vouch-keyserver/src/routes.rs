//! Route definitions for the keyserver.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Create the keyserver router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(handlers::healthz))
        .route("/keys", post(handlers::add_key))
        .route(
            "/keys/{kid}",
            get(handlers::get_key).delete(handlers::delete_key),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tempfile::TempDir;
    use tower::ServiceExt;

    const PUBLIC_HEX: &str = "a002d6d7f955e7043f97f49ce3b285697b31f949b43b78184038a2ea881b1e56";

    async fn test_router() -> (Router, TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let cfg = AppConfig {
            bind: "127.0.0.1:0".to_string(),
            database_path: dir.path().join("keys.db").to_string_lossy().to_string(),
        };
        let state = AppState::init(&cfg).await.unwrap();
        (create_router(state), dir)
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_key(public_key: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/keys")
            .header("content-type", "application/json")
            .body(Body::from(format!(r#"{{"public_key":"{public_key}"}}"#)))
            .unwrap()
    }

    fn get_path(path: &str) -> Request<Body> {
        Request::builder().uri(path).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let (app, _dir) = test_router().await;
        let response = app.oneshot(get_path("/healthz")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_register_and_fetch_key() {
        let (app, _dir) = test_router().await;

        let response = app.clone().oneshot(post_key(PUBLIC_HEX)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let kid = body_json(response).await["kid"].as_str().unwrap().to_string();

        let response = app
            .oneshot(get_path(&format!("/keys/{kid}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["kid"], kid.as_str());
        assert_eq!(body["public_key"], PUBLIC_HEX);
    }

    #[tokio::test]
    async fn test_register_rejects_bad_keys() {
        let (app, _dir) = test_router().await;

        // Not hex at all.
        let response = app.clone().oneshot(post_key("not-a-key")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        // Hex, but not 32 bytes.
        let response = app.oneshot(post_key("abcd")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_kid_is_not_found() {
        let (app, _dir) = test_router().await;
        let response = app
            .oneshot(get_path("/keys/00000000-0000-0000-0000-000000000000"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_key() {
        let (app, _dir) = test_router().await;

        let response = app.clone().oneshot(post_key(PUBLIC_HEX)).await.unwrap();
        let kid = body_json(response).await["kid"].as_str().unwrap().to_string();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/keys/{kid}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app
            .oneshot(get_path(&format!("/keys/{kid}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
