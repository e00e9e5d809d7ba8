use super::*;

use axum::body::{Body, to_bytes};
use axum::http::Request;
use tower::ServiceExt;

fn site_root() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("robots.txt"), "User-agent: *\nAllow: /\n").unwrap();
    std::fs::create_dir(dir.path().join("pkg")).unwrap();
    std::fs::write(dir.path().join("pkg").join("portfolio.css"), "body{margin:0}").unwrap();
    dir
}

async fn fetch(router: Router, uri: &str) -> (StatusCode, String) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn healthz_returns_ok_with_empty_body() {
    let dir = site_root();
    let (status, body) = fetch(base_routes(dir.path()), "/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
}

#[tokio::test]
async fn static_files_are_served_from_site_root() {
    let dir = site_root();
    let (status, body) = fetch(base_routes(dir.path()), "/robots.txt").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.starts_with("User-agent"));
}

#[tokio::test]
async fn pkg_assets_are_served() {
    let dir = site_root();
    let (status, body) = fetch(base_routes(dir.path()), "/pkg/portfolio.css").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "body{margin:0}");
}

#[tokio::test]
async fn unknown_paths_are_not_found() {
    let dir = site_root();
    let (status, _) = fetch(base_routes(dir.path()), "/missing.png").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn layers_do_not_change_status() {
    let dir = site_root();
    let (status, _) = fetch(with_layers(base_routes(dir.path())), "/healthz").await;
    assert_eq!(status, StatusCode::OK);
}
