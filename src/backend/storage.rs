//! Photo persistence — names the file from the MIME type and a timestamp,
//! writes it, and reports the full path back.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;

#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("failed to create photo directory {dir}: {source}")]
    CreateDir {
        dir: String,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
}

/// Default save location: `<pictures>/snap-pane`, falling back to the
/// working directory on hosts without a pictures directory.
pub fn default_photo_dir() -> PathBuf {
    dirs::picture_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("snap-pane")
}

/// Unknown types are kept as opaque binary rather than rejected.
fn extension_for(mime_type: &str) -> &'static str {
    match mime_type {
        "image/jpeg" => "jpg",
        "image/png" => "png",
        _ => "bin",
    }
}

/// Writes the photo under `dir` as `photo_<timestamp>.<ext>` and returns
/// the full path. A numeric suffix keeps same-second saves from clobbering
/// each other.
pub fn save_photo(dir: &Path, bytes: &[u8], mime_type: &str) -> Result<PathBuf, SaveError> {
    fs::create_dir_all(dir).map_err(|source| SaveError::CreateDir {
        dir: dir.display().to_string(),
        source,
    })?;

    let stamp = Local::now().format("%Y%m%d_%H%M%S");
    let ext = extension_for(mime_type);
    let mut path = dir.join(format!("photo_{stamp}.{ext}"));
    let mut attempt = 1u32;
    while path.exists() {
        path = dir.join(format!("photo_{stamp}_{attempt}.{ext}"));
        attempt += 1;
    }

    fs::write(&path, bytes).map_err(|source| SaveError::Write {
        path: path.display().to_string(),
        source,
    })?;

    log::debug!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saves_png_with_the_png_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = save_photo(dir.path(), &[1, 2, 3], "image/png").unwrap();

        assert_eq!(path.extension().unwrap(), "png");
        assert_eq!(fs::read(&path).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn unknown_mime_becomes_opaque_binary() {
        let dir = tempfile::tempdir().unwrap();
        let path = save_photo(dir.path(), &[0], "application/x-mystery").unwrap();
        assert_eq!(path.extension().unwrap(), "bin");
    }

    #[test]
    fn same_second_saves_get_distinct_paths() {
        let dir = tempfile::tempdir().unwrap();
        let a = save_photo(dir.path(), &[1], "image/jpeg").unwrap();
        let b = save_photo(dir.path(), &[2], "image/jpeg").unwrap();

        assert_ne!(a, b);
        assert_eq!(fs::read(&a).unwrap(), vec![1]);
        assert_eq!(fs::read(&b).unwrap(), vec![2]);
    }

    #[test]
    fn creates_the_directory_on_first_save() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let path = save_photo(&nested, &[9], "image/png").unwrap();
        assert!(path.starts_with(&nested));
    }
}
