use axum::{http::StatusCode, routing::get, Json, Router};
use sdn_dashboard::clock::TokioClock;
use sdn_dashboard::fetch::HttpFetcher;
use sdn_dashboard::health::UNREACHABLE_MESSAGE;
use sdn_dashboard::ui::{NAV_STATS_ID, NAV_STATS_PLACEHOLDER};
use sdn_dashboard::{Dashboard, Document, PageDocument};
use serde_json::{json, Value};
use std::net::TcpListener;
use std::process::Command;
use std::sync::Arc;

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

/// Serves fixed `/stats` and `/health` replies on a random local port.
async fn spawn_backend(stats: (StatusCode, Value), health: (StatusCode, Value)) -> String {
    let app = Router::new()
        .route(
            "/stats",
            get(move || {
                let (status, body) = stats.clone();
                async move { (status, Json(body)) }
            }),
        )
        .route(
            "/health",
            get(move || {
                let (status, body) = health.clone();
                async move { (status, Json(body)) }
            }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind backend");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("backend server");
    });
    format!("http://{addr}")
}

fn dashboard(base_url: &str) -> (Dashboard, Arc<PageDocument>) {
    let page = Arc::new(PageDocument::new());
    let document: Arc<dyn Document> = page.clone();
    let fetch = Arc::new(HttpFetcher::new(base_url));
    let dashboard = Dashboard::new(fetch, document, Arc::new(TokioClock));
    (dashboard, page)
}

#[tokio::test]
async fn http_page_load_against_backend() {
    let base_url = spawn_backend(
        (
            StatusCode::OK,
            json!({ "individuals_count": 1500, "entities_count": 42 }),
        ),
        (
            StatusCode::SERVICE_UNAVAILABLE,
            json!({ "ui_status": "healthy", "api_status": "unreachable" }),
        ),
    )
    .await;
    let (dashboard, page) = dashboard(&base_url);

    dashboard.on_page_load().finish().await;

    assert_eq!(
        page.text_content(NAV_STATS_ID).unwrap(),
        "Individuals: 1,500 Entities: 42 Programs: 0"
    );
    let notifications = page.notifications();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].text(), UNREACHABLE_MESSAGE);
}

#[tokio::test]
async fn http_backend_error_status_leaves_stats_untouched() {
    let base_url = spawn_backend(
        (
            StatusCode::SERVICE_UNAVAILABLE,
            json!({ "error": "Cannot connect to API server" }),
        ),
        (
            StatusCode::OK,
            json!({ "ui_status": "healthy", "api_status": { "status": "healthy" } }),
        ),
    )
    .await;
    let (dashboard, page) = dashboard(&base_url);

    dashboard.on_page_load().finish().await;

    assert_eq!(page.inner_html(NAV_STATS_ID).unwrap(), NAV_STATS_PLACEHOLDER);
    assert!(page.notifications().is_empty());
}

#[tokio::test]
async fn http_stats_error_field_shows_fallback() {
    let base_url = spawn_backend(
        (StatusCode::OK, json!({ "error": "SDN data not loaded" })),
        (StatusCode::OK, json!({ "api_status": "ok" })),
    )
    .await;
    let (dashboard, page) = dashboard(&base_url);

    dashboard.load_stats().await;

    assert_eq!(page.text_content(NAV_STATS_ID).unwrap(), "Stats unavailable");
}

#[tokio::test]
async fn http_connection_refused_is_silent() {
    let base_url = format!("http://127.0.0.1:{}", pick_free_port());
    let (dashboard, page) = dashboard(&base_url);

    dashboard.on_page_load().finish().await;

    assert_eq!(page.inner_html(NAV_STATS_ID).unwrap(), NAV_STATS_PLACEHOLDER);
    assert!(page.notifications().is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn http_binary_prints_rendered_page() {
    let base_url = spawn_backend(
        (
            StatusCode::OK,
            json!({ "individuals_count": 9876, "entities_count": 5, "programs_count": 3 }),
        ),
        (StatusCode::OK, json!({ "api_status": "ok" })),
    )
    .await;

    let output = tokio::task::spawn_blocking(move || {
        Command::new(env!("CARGO_BIN_EXE_sdn_dashboard"))
            .env("DASHBOARD_BASE_URL", base_url)
            .env("RUST_LOG", "info")
            .output()
            .expect("failed to run dashboard binary")
    })
    .await
    .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains(r#"id="nav-stats""#));
    assert!(stdout.contains("<strong>Individuals:</strong> 9,876"));
    assert!(stdout.contains("<strong>Programs:</strong> 3"));
    assert!(stdout.contains("@keyframes slideOut"));
    assert!(!stdout.contains("notification-error"));
}
