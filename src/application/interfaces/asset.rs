use crate::error::AppError;
use crate::model::requests::{AssetQuery, CdlNamingScheme};
use crate::model::responses::{Asset, Page};
use async_trait::async_trait;

/// Interface for the asset service
#[async_trait]
pub trait AssetService: Send + Sync {
    /// Gets the single page described by `query`
    ///
    /// # Returns
    /// * `Err(AppError::MissingTotalCount)` - If the response lacks `x-total-count`
    async fn get_assets_page(&self, query: &AssetQuery) -> Result<Page<Asset>, AppError>;

    /// Gets every asset matching `query`, following pagination from page 0
    async fn get_all_assets(&self, query: &AssetQuery) -> Result<Vec<Asset>, AppError>;

    /// Gets one asset, optionally with extra parts such as `gradeInfo`
    async fn get_asset(&self, asset_id: &str, parts: Option<&str>) -> Result<Asset, AppError>;

    /// Gets the dynamic metadata of a clip as the CSV text the server produces
    async fn get_dynamic_metadata(&self, asset_id: &str) -> Result<String, AppError>;

    /// Downloads the CDL files of every graded shot in a folder as a zip archive
    async fn download_cdl_zip(
        &self,
        folder_id: &str,
        naming_scheme: CdlNamingScheme,
    ) -> Result<Vec<u8>, AppError>;
}
