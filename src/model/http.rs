/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

use crate::application::config::Config;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::model::retry::BackoffStrategy;
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::{debug, error, warn};

/// Builds the reqwest client used for every call, applying the configured timeout
pub fn build_http_client(config: &Config) -> Result<Client, AppError> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(config.rest_api.timeout))
        .build()?;
    Ok(client)
}

/// Makes a GET request, repeating it while the server answers with a
/// retryable status
///
/// The response is handed back whatever its status. A response that is still
/// retryable after `max_attempts` requests is returned unmodified, so callers
/// inspect the status themselves. Only transport failures become errors.
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `url` - Full URL to request
/// * `headers` - `(name, value)` pairs added to every attempt
/// * `query` - Query parameters appended to `url`
/// * `retry` - Attempt count, delay and retryable statuses
///
/// # Example
///
/// ```ignore
/// use shothub_client::model::http::request_get;
/// use shothub_client::model::retry::RetryConfig;
///
/// let response = request_get(
///     &client,
///     "https://api.pomfort.com/sh/v1.0/projects",
///     &[("Authorization", "Bearer ...")],
///     &[("pageSize", "50".to_string())],
///     &RetryConfig::default(),
/// ).await?;
/// ```
pub async fn request_get(
    client: &Client,
    url: &str,
    headers: &[(&str, &str)],
    query: &[(&str, String)],
    retry: &dyn BackoffStrategy,
) -> Result<Response, AppError> {
    let max_attempts = retry.max_attempts();
    let mut attempt = 0;

    loop {
        attempt += 1;
        debug!("GET {} (attempt {}/{})", url, attempt, max_attempts);

        let mut request = client.get(url);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await?;
        let status = response.status();
        debug!("Response status: {}", status);

        if !retry.is_retryable(status) {
            return Ok(response);
        }

        if attempt >= max_attempts {
            error!(
                "Still getting {} from {} after {} attempts, giving up",
                status, url, attempt
            );
            return Ok(response);
        }

        let delay = retry.delay(attempt);
        warn!(
            "Rate limited with {} (attempt {}/{}). Waiting {:?} before retry...",
            status, attempt, max_attempts, delay
        );
        tokio::time::sleep(delay).await;
    }
}
