use crate::error::AppError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

static UNSAFE_FILE_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[/\\:*?"<>|\x00-\x1f]"#).expect("valid file name pattern"));

/// Replaces characters that are not allowed in file names with `_`
///
/// Camera and clip names come straight from metadata and may contain slashes
/// or other separators.
pub fn sanitize_file_name(name: &str) -> String {
    let cleaned = UNSAFE_FILE_CHARS.replace_all(name.trim(), "_").to_string();
    match cleaned.as_str() {
        "" | "." | ".." => "_".to_string(),
        _ => cleaned,
    }
}

/// Creates `path` and its parents, failing if `path` itself already exists
///
/// Used for exports that would be confused by files left over from a previous run.
pub fn create_fresh_dir(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    match fs::create_dir(path) {
        Ok(()) => {
            debug!("Created {}", path.display());
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            error!(
                "Could not create directory at \"{}\". It already exists, please delete it manually.",
                path.display()
            );
            Err(AppError::Io(e))
        }
        Err(e) => Err(AppError::Io(e)),
    }
}

/// Creates `path` and its parents if missing
pub fn ensure_dir(path: &Path) -> Result<PathBuf, AppError> {
    fs::create_dir_all(path)?;
    Ok(path.to_path_buf())
}

/// Writes `contents` to `dir/file_name`, sanitizing the file name
pub fn write_text_file(dir: &Path, file_name: &str, contents: &str) -> Result<PathBuf, AppError> {
    let path = dir.join(sanitize_file_name(file_name));
    fs::write(&path, contents)?;
    debug!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(path)
}
