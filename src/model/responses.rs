/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Unstructured asset record, read by field name only
pub type Asset = Map<String, Value>;

/// Body returned by `POST /authenticate`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// JWT used as bearer token
    pub id_token: String,
}

/// Project entry of `GET /v1.0/projects`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Project id
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Id of the folder every asset of the project lives under
    #[serde(default)]
    pub root_folder_id: Option<String>,
}

/// Node of `GET /v1.0/folders-tree/{projectId}`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct Folder {
    /// Folder id
    pub id: String,
    /// Display name
    pub name: String,
    /// Sub folders
    #[serde(default)]
    pub children: Vec<Folder>,
}

/// One page of a paginated listing
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Items of this page
    pub items: Vec<T>,
    /// Collection size reported by the server
    pub total_count: u64,
    /// Zero-based index of this page
    pub page: u32,
    /// Requested page size
    pub page_size: u32,
}
