use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use super::{create_app, AppState};
use crate::config::ServiceConfig;

fn test_app() -> Router {
    create_app(AppState {
        config: ServiceConfig::default(),
    })
}

#[tokio::test]
async fn test_unmatched_route_returns_404() {
    let response = test_app()
        .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], b"Not Found.".as_slice());
}

#[tokio::test]
async fn test_health_returns_ok() {
    let response = test_app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_block_route_rejects_non_numeric_number() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/v1/block/not-a-number")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
