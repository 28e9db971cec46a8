/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::AppError;
use std::fs::{self, File};
use std::io::{Read, Seek};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Extracts every file of a zip archive held in memory into `dest`
///
/// Entries whose path would escape `dest` are skipped.
///
/// # Returns
/// * `Ok(Vec<PathBuf>)` - Paths of the extracted files
pub fn extract_zip_bytes(bytes: &[u8], dest: &Path) -> Result<Vec<PathBuf>, AppError> {
    extract_zip(std::io::Cursor::new(bytes), dest)
}

/// Extracts the zip archive stored at `archive_path` into `dest`
pub fn extract_zip_file(archive_path: &Path, dest: &Path) -> Result<Vec<PathBuf>, AppError> {
    let file = File::open(archive_path)?;
    extract_zip(file, dest)
}

fn extract_zip<R: Read + Seek>(reader: R, dest: &Path) -> Result<Vec<PathBuf>, AppError> {
    fs::create_dir_all(dest)?;
    let mut archive = zip::ZipArchive::new(reader)?;
    let mut extracted = Vec::new();

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;

        let file_path = match entry.enclosed_name() {
            Some(path) => dest.join(path),
            None => {
                warn!("Skipping zip entry with unsafe path: {}", entry.name());
                continue;
            }
        };

        if entry.is_dir() {
            fs::create_dir_all(&file_path)?;
            continue;
        }

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut outfile = File::create(&file_path)?;
        std::io::copy(&mut entry, &mut outfile)?;
        debug!("Extracted {}", file_path.display());
        extracted.push(file_path);
    }

    info!("Extracted {} files into {}", extracted.len(), dest.display());
    Ok(extracted)
}
