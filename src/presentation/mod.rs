/// Asset filters
pub mod asset;
/// Camera grouping of clips
pub mod camera;
/// Folder tree rendering
pub mod folder;
/// Grade info flattening
pub mod grade;
