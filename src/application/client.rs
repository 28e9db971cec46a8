/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Client for the ShotHub API
//!
//! The client owns its configuration, HTTP client and session, so several
//! clients with different credentials can live in one process.
//!
//! # Example
//! ```ignore
//! use shothub_client::application::client::Client;
//! use shothub_client::application::config::Config;
//! use shothub_client::application::interfaces::ProjectService;
//!
//! let client = Client::new(Config::new()).await?;
//! let projects = client.get_projects(0, 50).await?;
//! ```

use crate::application::auth::{Auth, Session};
use crate::application::config::Config;
use crate::application::interfaces::{AssetService, ProjectService};
use crate::application::pagination::{collect_pages, total_count};
use crate::constants::PROJECT_LOOKUP_PAGE_SIZE;
use crate::error::AppError;
use crate::model::http::{build_http_client, request_get};
use crate::model::requests::{AssetQuery, CdlNamingScheme};
use crate::model::responses::{Asset, Folder, Page, Project};
use async_trait::async_trait;
use reqwest::{Client as HttpClient, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Authenticated ShotHub API client
pub struct Client {
    auth: Arc<Auth>,
    http_client: HttpClient,
    config: Arc<Config>,
}

impl Client {
    /// Creates a new client and performs the initial login
    ///
    /// # Returns
    /// * `Ok(Client)` - Authenticated client ready to use
    /// * `Err(AppError)` - If the HTTP client cannot be built or login fails
    pub async fn new(config: Config) -> Result<Self, AppError> {
        let client = Self::new_lazy(config)?;
        client.login().await?;
        Ok(client)
    }

    /// Creates a new client without logging in
    ///
    /// Authenticated calls fail with [`AppError::NotLoggedIn`] until
    /// [`Client::login`] succeeds.
    pub fn new_lazy(config: Config) -> Result<Self, AppError> {
        let config = Arc::new(config);
        let http_client = build_http_client(&config)?;
        let auth = Arc::new(Auth::new(config.clone(), http_client.clone()));

        Ok(Self {
            auth,
            http_client,
            config,
        })
    }

    /// Logs in, replacing any previous session
    pub async fn login(&self) -> Result<Session, AppError> {
        self.auth.login().await
    }

    /// Returns the `Authorization` header value of the current session
    pub async fn get_login_header(&self) -> Result<String, AppError> {
        self.auth.get_login_header().await
    }

    /// Authenticated GET with the configured retry policy
    ///
    /// The response is returned whatever its status.
    pub async fn request_get(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Response, AppError> {
        let authorization = self.get_login_header().await?;
        let url = self.config.url(path);
        let headers = [
            ("Authorization", authorization.as_str()),
            ("Accept", "application/json"),
        ];
        request_get(&self.http_client, &url, &headers, query, &self.config.retry).await
    }

    /// Authenticated GET that requires a 200 and decodes the JSON body
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, AppError> {
        let response = self.request_get(path, query).await?;
        let response = ensure_ok(response, path).await?;
        Ok(response.json().await?)
    }

    /// Gets the configuration in use
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Gets Auth reference
    pub fn auth(&self) -> &Auth {
        &self.auth
    }
}

/// Turns every status but 200 into [`AppError::Unexpected`]
async fn ensure_ok(response: Response, what: &str) -> Result<Response, AppError> {
    let status = response.status();
    if status == StatusCode::OK {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    error!("Request {} failed with status {}: {}", what, status, body);
    Err(AppError::Unexpected(status))
}

#[async_trait]
impl ProjectService for Client {
    async fn get_projects(&self, page: u32, page_size: u32) -> Result<Vec<Project>, AppError> {
        info!("Getting projects page {}", page);
        let query = [("page", page.to_string()), ("pageSize", page_size.to_string())];
        let projects: Vec<Project> = self.get("v1.0/projects", &query).await?;
        debug!("Projects obtained: {}", projects.len());
        Ok(projects)
    }

    async fn get_project_root_folder(&self, project_id: &str) -> Result<String, AppError> {
        let query = [("pageSize", PROJECT_LOOKUP_PAGE_SIZE.to_string())];
        let projects: Vec<Project> = self.get("v1.0/projects", &query).await?;

        let project = projects
            .into_iter()
            .find(|p| p.id == project_id)
            .ok_or_else(|| AppError::ProjectNotFound(project_id.to_string()))?;

        let root = project.root_folder_id.ok_or_else(|| {
            AppError::Deserialization(format!("project {project_id} has no rootFolderId"))
        })?;
        debug!("Root folder of project {}: {}", project_id, root);
        Ok(root)
    }

    async fn get_folder_tree(&self, project_id: &str) -> Result<Vec<Folder>, AppError> {
        let path = format!("v1.0/folders-tree/{project_id}");
        info!("Getting folder tree of project {}", project_id);
        self.get(&path, &[]).await
    }
}

#[async_trait]
impl AssetService for Client {
    async fn get_assets_page(&self, query: &AssetQuery) -> Result<Page<Asset>, AppError> {
        let response = self.request_get("v1.0/assets", &query.to_query()).await?;
        let response = ensure_ok(response, "v1.0/assets").await?;
        let total = total_count(response.headers())?;
        let items: Vec<Asset> = response.json().await?;

        Ok(Page {
            items,
            total_count: total,
            page: query.page,
            page_size: query.page_size,
        })
    }

    async fn get_all_assets(&self, query: &AssetQuery) -> Result<Vec<Asset>, AppError> {
        info!(
            "Getting assets of folder {} (type: {})",
            query.folder_id,
            query.asset_type.as_deref().unwrap_or("any")
        );
        collect_pages(query.page_size, |page| {
            let page_query = query.for_page(page);
            async move { self.get_assets_page(&page_query).await }
        })
        .await
    }

    async fn get_asset(&self, asset_id: &str, parts: Option<&str>) -> Result<Asset, AppError> {
        let path = format!("v1.0/assets/{asset_id}");
        let query: Vec<(&str, String)> = parts
            .map(|p| vec![("parts", p.to_string())])
            .unwrap_or_default();
        self.get(&path, &query).await
    }

    async fn get_dynamic_metadata(&self, asset_id: &str) -> Result<String, AppError> {
        let path = format!("v1.0/assets/{asset_id}/dynamic-metadata");
        let response = self.request_get(&path, &[]).await?;
        let response = ensure_ok(response, &path).await?;
        Ok(response.text().await?)
    }

    async fn download_cdl_zip(
        &self,
        folder_id: &str,
        naming_scheme: CdlNamingScheme,
    ) -> Result<Vec<u8>, AppError> {
        let path = format!("v1.0/cdl-zip/{folder_id}");
        info!("Downloading grades of folder {}", folder_id);
        let query = [("namingScheme", naming_scheme.as_str().to_string())];
        let response = self.request_get(&path, &query).await?;
        let response = ensure_ok(response, &path).await?;
        let bytes = response.bytes().await?;
        debug!("Downloaded {} bytes of CDL data", bytes.len());
        Ok(bytes.to_vec())
    }
}
