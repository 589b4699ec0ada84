//! Output directory management.

use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::{Error, Result};

/// Make sure the output directory exists and can be written to.
///
/// Creates the directory (and parents) when missing.
pub fn ensure_output_dir(path: &Path) -> Result<()> {
    if path.exists() && !path.is_dir() {
        return Err(Error::ConfigValidation {
            field: "output_directory".to_string(),
            message: format!("{} exists and is not a directory", path.display()),
        });
    }

    std::fs::create_dir_all(path).map_err(|e| Error::ConfigValidation {
        field: "output_directory".to_string(),
        message: format!("Cannot create {}: {}", path.display(), e),
    })?;

    let scratch = NamedTempFile::new_in(path).map_err(|e| Error::ConfigValidation {
        field: "output_directory".to_string(),
        message: format!("{} is not writable: {}", path.display(), e),
    })?;
    scratch.close()?;

    Ok(())
}

/// Full path of a file inside the output directory.
pub fn output_path(output_dir: &Path, filename: &str) -> PathBuf {
    output_dir.join(filename)
}
