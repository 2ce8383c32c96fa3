use crate::error::{Error, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::{info, instrument};

/// Writes `document` as 2-space indented JSON, replacing whatever was at `path`.
#[instrument(skip(document), fields(path = %path.display()))]
pub fn write_json<T: Serialize>(path: &Path, document: &T) -> Result<()> {
    let to_write_error = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(to_write_error)?;
    }

    let json = serde_json::to_string_pretty(document)?;

    fs::write(path, json).map_err(to_write_error)?;

    info!("Saved to {}", path.display());

    Ok(())
}
