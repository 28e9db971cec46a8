/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Authentication module for the ShotHub API
//!
//! Scripts authenticate once with their id and key and receive a JWT. The
//! token is kept in the [`Auth`] instance owned by a client and attached as a
//! bearer header to every later request. Tokens are not refreshed; a token is
//! assumed to stay valid for the lifetime of the process.

use crate::application::config::Config;
use crate::error::AppError;
use crate::model::responses::LoginResponse;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info};

/// Path of the authentication endpoint, relative to the base URL
pub const AUTHENTICATE_PATH: &str = "authenticate";

/// Session information for authenticated requests
#[derive(Debug, Clone)]
pub struct Session {
    /// Raw JWT returned by the server
    pub token: String,
    /// Time the token was obtained
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Creates a session for `token`, stamped with the current time
    pub fn new(token: String) -> Self {
        Self {
            token,
            created_at: Utc::now(),
        }
    }

    /// Value of the `Authorization` header
    #[must_use]
    pub fn authorization(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

/// Authentication manager for the ShotHub API
pub struct Auth {
    config: Arc<Config>,
    client: Client,
    session: RwLock<Option<Session>>,
}

impl Auth {
    /// Creates a new Auth instance without logging in
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    /// * `client` - HTTP client used for the login request
    pub fn new(config: Arc<Config>, client: Client) -> Self {
        Self {
            config,
            client,
            session: RwLock::new(None),
        }
    }

    /// Logs in with the configured script credentials
    ///
    /// Any previous session is replaced.
    ///
    /// # Returns
    /// * `Ok(Session)` - Freshly authenticated session
    /// * `Err(AppError::LoginFailed)` - If the server answers anything but 200
    pub async fn login(&self) -> Result<Session, AppError> {
        let url = self.config.url(AUTHENTICATE_PATH);
        info!("Logging in as {}", self.config.credentials.script_id);
        debug!("Sending login request to: {}", url);

        let response = self
            .client
            .post(&url)
            .json(&self.config.credentials)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            error!("Login request returned status code {}: {}", status, body);
            return Err(AppError::LoginFailed(status));
        }

        let json: LoginResponse = response.json().await?;
        let session = Session::new(json.id_token);

        let mut sess = self.session.write().await;
        *sess = Some(session.clone());

        info!("✓ Login successful");
        Ok(session)
    }

    /// Returns the current session
    ///
    /// # Returns
    /// * `Err(AppError::NotLoggedIn)` - If `login()` has not succeeded yet
    pub async fn get_session(&self) -> Result<Session, AppError> {
        self.session
            .read()
            .await
            .clone()
            .ok_or(AppError::NotLoggedIn)
    }

    /// Returns the `Authorization` header value of the current session
    ///
    /// # Returns
    /// * `Err(AppError::NotLoggedIn)` - If `login()` has not succeeded yet
    pub async fn get_login_header(&self) -> Result<String, AppError> {
        Ok(self.get_session().await?.authorization())
    }

    /// Whether a session is currently held
    pub async fn is_logged_in(&self) -> bool {
        self.session.read().await.is_some()
    }

    /// Drops the current session; later requests fail until `login()` is called again
    pub async fn logout(&self) {
        let mut sess = self.session.write().await;
        *sess = None;
        debug!("Session cleared");
    }
}
