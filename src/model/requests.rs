/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::DEFAULT_PAGE_SIZE;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Filter and paging parameters for `GET /v1.0/assets`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssetQuery {
    /// Folder whose assets (recursively) are listed
    pub folder_id: String,
    /// Restricts the listing to one asset type, e.g. `VideoClip` or `Shot`
    pub asset_type: Option<String>,
    /// Zero-based page index
    pub page: u32,
    /// Items per page
    pub page_size: u32,
    /// Optional extra parts to embed, e.g. `gradeInfo`
    pub parts: Option<String>,
}

impl AssetQuery {
    /// First page of all assets in `folder_id`, default page size
    pub fn new(folder_id: &str) -> Self {
        Self {
            folder_id: folder_id.to_string(),
            asset_type: None,
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
            parts: None,
        }
    }

    /// Restricts the listing to `asset_type`
    #[must_use]
    pub fn asset_type(mut self, asset_type: &str) -> Self {
        self.asset_type = Some(asset_type.to_string());
        self
    }

    /// Sets the page size
    #[must_use]
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Requests extra asset parts
    #[must_use]
    pub fn parts(mut self, parts: &str) -> Self {
        self.parts = Some(parts.to_string());
        self
    }

    /// Same query pointing at another page
    #[must_use]
    pub fn for_page(&self, page: u32) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }

    /// Query string pairs in the order the API documents them
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![("folderId", self.folder_id.clone())];
        if let Some(asset_type) = &self.asset_type {
            query.push(("assetType", asset_type.clone()));
        }
        query.push(("page", self.page.to_string()));
        query.push(("pageSize", self.page_size.to_string()));
        if let Some(parts) = &self.parts {
            query.push(("parts", parts.clone()));
        }
        query
    }
}

/// File naming used inside the CDL zip archive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CdlNamingScheme {
    /// One `<clip name>.cdl` per graded shot
    #[default]
    ClipName,
}

impl CdlNamingScheme {
    /// Value of the `namingScheme` query parameter
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            CdlNamingScheme::ClipName => "clipName",
        }
    }
}
