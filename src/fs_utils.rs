mod error;

pub use error::{FsUtilsError, FsUtilsErrorCode, FsUtilsResult};

use std::path::{Path, PathBuf};
use tracing::debug;

pub const JSON_SUFFIX: &str = ".json";

/// Expands a leading `~` to the home directory.
pub fn expand_path(raw: &str) -> FsUtilsResult<PathBuf> {
    let home = || {
        dirs_next::home_dir().ok_or_else(|| {
            FsUtilsError::new(FsUtilsErrorCode::HomeUnavailable, "Home directory not found")
        })
    };
    if raw == "~" {
        home()
    } else if let Some(stripped) = raw.strip_prefix("~/") {
        Ok(home()?.join(stripped))
    } else {
        Ok(PathBuf::from(raw))
    }
}

/// Confirms `path` is an existing, readable directory.
pub fn require_directory(path: &Path) -> FsUtilsResult<PathBuf> {
    if path.as_os_str().is_empty() {
        return Err(FsUtilsError::new(
            FsUtilsErrorCode::InvalidPath,
            "No directory was given",
        ));
    }
    let meta = std::fs::metadata(path).map_err(|e| {
        debug!(path = %path.display(), error = ?e, "metadata failed");
        FsUtilsError::from_io_error(
            FsUtilsErrorCode::MetadataReadFailed,
            &format!("Cannot access {}", path.display()),
            e,
        )
    })?;
    if !meta.is_dir() {
        return Err(FsUtilsError::new(
            FsUtilsErrorCode::NotADirectory,
            format!("{} is not a directory", path.display()),
        ));
    }
    // metadata succeeds on directories we are not allowed to list.
    std::fs::read_dir(path).map_err(|e| {
        debug!(path = %path.display(), error = ?e, "read_dir failed");
        FsUtilsError::from_io_error(
            FsUtilsErrorCode::ListFailed,
            &format!("Cannot list {}", path.display()),
            e,
        )
    })?;
    Ok(path.to_path_buf())
}

/// Case-sensitive `.json` suffix check on a bare file name.
pub fn is_json_file_name(name: &str) -> bool {
    name.ends_with(JSON_SUFFIX)
}

/// `hero.json` -> `hero`. Names without the suffix, or with nothing before
/// it (`.json`), are returned unchanged.
pub fn json_stem(name: &str) -> &str {
    match name.strip_suffix(JSON_SUFFIX) {
        Some(stem) if !stem.is_empty() => stem,
        _ => name,
    }
}
