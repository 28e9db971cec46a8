/// Zip archive extraction
pub mod archive;
/// Semicolon separated CSV writer
pub mod csv;
/// Output directory and file name helpers
pub mod utils;
