/// Asset listing, details and downloads
pub mod asset;
/// Projects and folder trees
pub mod project;

pub use asset::AssetService;
pub use project::ProjectService;
