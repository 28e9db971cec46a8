/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # ShotHub Client
//!
//! Client library for the ShotHub media asset management API.
//!
//! The crate covers:
//! - Script authentication with a bearer token held per client
//! - GET requests with bounded retry when the server answers `429 Too Many Requests`
//! - Paginated asset listings driven by the `x-total-count` header
//! - Folder trees, grade (CDL) archives and dynamic metadata downloads
//! - Semicolon separated CSV export
//!
//! ## Example
//! ```ignore
//! use shothub_client::prelude::*;
//!
//! let client = Client::new(Config::new()).await?;
//! let root = client.get_project_root_folder("643533041b92c40aa318d8db").await?;
//! let assets = client.get_all_assets(&AssetQuery::new(&root)).await?;
//! ```

/// Application layer: configuration, authentication and the API client
pub mod application;
/// Global constants
pub mod constants;
/// Error type shared by the whole crate
pub mod error;
/// Wire models, HTTP plumbing and retry policy
pub mod model;
/// Convenience re-exports
pub mod prelude;
/// Reshaping of API records for display and export
pub mod presentation;
/// CSV output, archive extraction and output directories
pub mod storage;
/// Environment and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
