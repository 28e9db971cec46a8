use crate::common::{bearer, logged_in_client};
use mockito::{Matcher, Server};
use reqwest::StatusCode;
use shothub_client::application::interfaces::ProjectService;
use shothub_client::error::AppError;
use shothub_client::model::http::request_get;
use shothub_client::model::retry::RetryConfig;
use std::time::{Duration, Instant};

#[tokio::test]
async fn test_sustained_429_is_returned_after_three_attempts() {
    let mut server = Server::new_async().await;
    let client = logged_in_client(&mut server).await;
    let mock = server
        .mock("GET", "/v1.0/projects")
        .match_query(Matcher::Any)
        .with_status(429)
        .with_body("slow down")
        .expect(3)
        .create_async()
        .await;

    let response = client.request_get("v1.0/projects", &[]).await.unwrap();

    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(response.text().await.unwrap(), "slow down");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_service_methods_report_final_429() {
    let mut server = Server::new_async().await;
    let client = logged_in_client(&mut server).await;
    let mock = server
        .mock("GET", "/v1.0/projects")
        .match_query(Matcher::Any)
        .with_status(429)
        .expect(3)
        .create_async()
        .await;

    let result = client.get_projects(0, 50).await;

    assert!(matches!(
        result,
        Err(AppError::Unexpected(StatusCode::TOO_MANY_REQUESTS))
    ));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_other_statuses_are_not_retried() {
    let mut server = Server::new_async().await;
    let client = logged_in_client(&mut server).await;
    let mock = server
        .mock("GET", "/v1.0/projects")
        .match_query(Matcher::Any)
        .with_status(503)
        .expect(1)
        .create_async()
        .await;

    let response = client.request_get("v1.0/projects", &[]).await.unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_request_get_waits_between_attempts() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/limited")
        .match_header("authorization", bearer().as_str())
        .with_status(429)
        .expect(2)
        .create_async()
        .await;

    let delay = Duration::from_millis(300);
    let http = reqwest::Client::new();
    let policy = RetryConfig::with_max_attempts(2).delay_of(delay);
    let auth = bearer();
    let started = Instant::now();

    let response = request_get(
        &http,
        &format!("{}/limited", server.url()),
        &[("Authorization", auth.as_str())],
        &[],
        &policy,
    )
    .await
    .unwrap();
    let elapsed = started.elapsed();

    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    // one pause between two attempts, none after the last
    assert!(elapsed >= delay, "returned after {elapsed:?}");
    assert!(elapsed < delay * 2, "slept after the last attempt: {elapsed:?}");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_429_then_success_returns_success() {
    let mut server = Server::new_async().await;
    let client = logged_in_client(&mut server).await;
    let limited = server
        .mock("GET", "/v1.0/projects")
        .match_query(Matcher::Any)
        .with_status(429)
        .expect(2)
        .create_async()
        .await;
    let ok = server
        .mock("GET", "/v1.0/projects")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("[]")
        .expect(1)
        .create_async()
        .await;

    let response = client.request_get("v1.0/projects", &[]).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), "[]");
    limited.assert_async().await;
    ok.assert_async().await;
}

#[tokio::test]
async fn test_request_get_success_passes_through() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/ok")
        .match_query(Matcher::UrlEncoded("page".into(), "3".into()))
        .with_status(200)
        .with_body("[]")
        .expect(1)
        .create_async()
        .await;

    let http = reqwest::Client::new();
    let response = request_get(
        &http,
        &format!("{}/ok", server.url()),
        &[],
        &[("page", "3".to_string())],
        &RetryConfig::default(),
    )
    .await
    .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    mock.assert_async().await;
}
