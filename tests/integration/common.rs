// Common utilities for integration tests

use mockito::{Matcher, Mock, ServerGuard};
use shothub_client::application::client::Client;
use shothub_client::application::config::Config;
use shothub_client::model::retry::RetryConfig;
use std::time::Duration;

pub const TOKEN: &str = "eyJhbGciOiJIUzI1NiJ9.test.token";
pub const SCRIPT_ID: &str = "0123456789abcdef01234567/TestScript";
pub const SCRIPT_KEY: &str = "TestKey";

/// Config pointing at the mock server, retrying 429 three times without waiting
pub fn test_config(server: &ServerGuard) -> Config {
    let mut config = Config::with_credentials(&server.url(), SCRIPT_ID, SCRIPT_KEY);
    config.retry = RetryConfig::default().delay_of(Duration::ZERO);
    config
}

/// Mocks a successful `/authenticate` call
pub async fn mock_login(server: &mut ServerGuard) -> Mock {
    server
        .mock("POST", "/authenticate")
        .match_body(Matcher::Json(serde_json::json!({
            "scriptId": SCRIPT_ID,
            "scriptKey": SCRIPT_KEY,
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!(r#"{{"id_token":"{TOKEN}"}}"#))
        .create_async()
        .await
}

/// Client that already logged in against the mock server
pub async fn logged_in_client(server: &mut ServerGuard) -> Client {
    mock_login(server).await;
    Client::new(test_config(server))
        .await
        .expect("login against mock server")
}

/// Header value every authenticated request must carry
pub fn bearer() -> String {
    format!("Bearer {TOKEN}")
}
