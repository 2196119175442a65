//! Guarded fetches over real sockets.

use std::sync::Arc;
use std::time::Duration;

use fetch_guard::config::HttpConfig;
use fetch_guard::transport::preload_address;
use fetch_guard::ui::{Button, NotificationLog, TextField};
use fetch_guard::{FetchGuard, GuardConfig, HttpFetcher, Outcome};

mod common;

struct Form {
    guard: FetchGuard,
    field: Arc<TextField>,
    button: Arc<Button>,
    notes: Arc<NotificationLog>,
}

fn form(timeout_ms: u64) -> Form {
    let mut config = GuardConfig::default();
    config.deadline.timeout_ms = timeout_ms;

    let field = Arc::new(TextField::new("stale"));
    let button = Arc::new(Button::new());
    let notes = Arc::new(NotificationLog::new());
    let fetcher = HttpFetcher::new(&HttpConfig::default()).unwrap();
    let guard = FetchGuard::new(
        Arc::new(fetcher),
        field.clone(),
        button.clone(),
        notes.clone(),
        config,
    );
    Form { guard, field, button, notes }
}

#[tokio::test]
async fn test_ok_body_written_verbatim() {
    let addr = common::start_programmable_backend(|| async { (200, "Hello World".to_string()) }).await;
    let form = form(5_000);

    let outcome = form.guard.run(&format!("http://{}/title", addr)).unwrap().wait().await.unwrap();

    assert_eq!(outcome, Outcome::Succeeded);
    assert_eq!(form.field.value(), "Hello World");
    assert!(form.button.is_enabled());
    assert!(form.notes.is_empty());
}

#[tokio::test]
async fn test_error_status_keeps_field() {
    let addr = common::start_programmable_backend(|| async { (503, "Service Unavailable".to_string()) }).await;
    let form = form(5_000);

    let outcome = form.guard.run(&format!("http://{}/title", addr)).unwrap().wait().await.unwrap();

    assert_eq!(outcome, Outcome::Failed { status: Some(503) });
    assert_eq!(form.field.value(), "stale");
    assert!(form.button.is_enabled());
    assert!(form.notes.is_empty());
}

#[tokio::test]
async fn test_created_is_not_success() {
    let addr = common::start_programmable_backend(|| async { (201, "new".to_string()) }).await;
    let form = form(5_000);

    let outcome = form.guard.run(&format!("http://{}/", addr)).unwrap().wait().await.unwrap();

    assert_eq!(outcome, Outcome::Failed { status: Some(201) });
    assert_eq!(form.field.value(), "stale");
}

#[tokio::test]
async fn test_shared_client() {
    let addr = common::start_echo_backend().await;
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    let field = Arc::new(TextField::new(""));
    let guard = FetchGuard::new(
        Arc::new(HttpFetcher::with_client(client)),
        field.clone(),
        Arc::new(Button::new()),
        Arc::new(NotificationLog::new()),
        GuardConfig::default(),
    );

    let outcome = guard.run(&format!("http://{}/title", addr)).unwrap().wait().await.unwrap();

    assert_eq!(outcome, Outcome::Succeeded);
    assert_eq!(field.value(), "GET /title HTTP/1.1");
}

#[tokio::test]
async fn test_no_content_is_not_success() {
    let addr = common::start_programmable_backend(|| async { (204, String::new()) }).await;
    let form = form(5_000);

    let outcome = form.guard.run(&format!("http://{}/", addr)).unwrap().wait().await.unwrap();

    assert_eq!(outcome, Outcome::Failed { status: Some(204) });
    assert_eq!(form.field.writes(), 0);
}

#[tokio::test]
async fn test_slow_backend_times_out() {
    let addr = common::start_programmable_backend(|| async {
        tokio::time::sleep(Duration::from_millis(800)).await;
        (200, "late title".to_string())
    })
    .await;
    let form = form(200);

    let outcome = form.guard.run(&format!("http://{}/title", addr)).unwrap().wait().await.unwrap();
    assert_eq!(outcome, Outcome::TimedOut);
    assert!(form.button.is_enabled());

    // The backend answers after the abort; nothing may change.
    tokio::time::sleep(Duration::from_millis(1_000)).await;
    assert_eq!(form.field.value(), "stale");
    assert_eq!(form.notes.len(), 1);
    assert_eq!(form.button.enables(), 1);
}

#[tokio::test]
async fn test_connection_refused_is_silent() {
    let addr = common::closed_address().await;
    let form = form(5_000);

    let outcome = form.guard.run(&format!("http://{}/title", addr)).unwrap().wait().await.unwrap();

    assert_eq!(outcome, Outcome::Failed { status: None });
    assert_eq!(form.field.value(), "stale");
    assert!(form.button.is_enabled());
    assert!(form.notes.is_empty());
}

#[tokio::test]
async fn test_preload_title_request_line() {
    let addr = common::start_echo_backend().await;
    let form = form(5_000);

    let endpoint = format!("http://{}/alice/fetchtitle", addr);
    let address = preload_address(&endpoint, "https://example.com/?q=1").unwrap();
    let outcome = form.guard.run(&address).unwrap().wait().await.unwrap();

    assert_eq!(outcome, Outcome::Succeeded);
    assert_eq!(
        form.field.value(),
        "GET /alice/fetchtitle?url=https%3A%2F%2Fexample.com%2F%3Fq%3D1 HTTP/1.1"
    );
}
