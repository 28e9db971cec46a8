/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # ShotHub Client Prelude
//!
//! Imports the types most programs need in one line.
//!
//! ## Usage
//!
//! ```ignore
//! use shothub_client::prelude::*;
//!
//! let client = Client::new(Config::new()).await?;
//! let tree = client.get_folder_tree("643533041b92c40aa318d8db").await?;
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the ShotHub API client
pub use crate::application::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// CLIENT, AUTHENTICATION AND SERVICES
// ============================================================================

/// Authentication and session
pub use crate::application::auth::{Auth, Session};

/// API client
pub use crate::application::client::Client;

/// Service traits
pub use crate::application::interfaces::{AssetService, ProjectService};

/// Pagination helpers
pub use crate::application::pagination::{collect_pages, page_count};

// ============================================================================
// MODELS
// ============================================================================

/// Retry policy
pub use crate::model::retry::{BackoffStrategy, RetryConfig};

/// Requests and responses
pub use crate::model::requests::{AssetQuery, CdlNamingScheme};
pub use crate::model::responses::{Asset, Folder, Page, Project};

// ============================================================================
// PRESENTATION AND STORAGE
// ============================================================================

pub use crate::presentation::asset::{
    filter_by_shooting_day, is_flagged_with_dynamic_metadata, matches_shooting_day,
};
pub use crate::presentation::camera::{camera_label, camera_summary_table, group_by_camera};
pub use crate::presentation::folder::render_folder_tree;
pub use crate::presentation::grade::{GRADE_CSV_FIELDS, flatten_grade_info};
pub use crate::storage::archive::{extract_zip_bytes, extract_zip_file};
pub use crate::storage::csv::{write_csv, write_csv_file};
pub use crate::storage::utils::{create_fresh_dir, ensure_dir, sanitize_file_name, write_text_file};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};

/// Re-export chrono for date/time handling
pub use chrono::{DateTime, Utc};
