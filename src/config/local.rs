use crate::core::Storage;
use crate::utils::error::{EtlError, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::{Builder, NamedTempFile};

/// Filesystem storage rooted at a directory.
///
/// Writes go to a temporary file next to the target and are renamed over it
/// once complete, so readers never observe a half-written file.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

#[cfg(unix)]
fn temp_file_in(dir: &Path) -> std::io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;

    // Requested 0666 is masked by the process umask, same as a plain create.
    Builder::new()
        .permissions(fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn temp_file_in(dir: &Path) -> std::io::Result<NamedTempFile> {
    Builder::new().tempfile_in(dir)
}

impl Storage for LocalStorage {
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<PathBuf> {
        let full_path = self.base_path.join(path);
        let parent = full_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.base_path.clone());

        fs::create_dir_all(&parent)?;

        // Same directory as the target, so the final rename stays on one filesystem.
        let mut temp_file = temp_file_in(&parent)?;

        // Replacing keeps the old file's mode; a fresh file gets the umask default.
        if let Ok(existing) = fs::metadata(&full_path) {
            fs::set_permissions(temp_file.path(), existing.permissions())?;
        }

        temp_file.write_all(data)?;
        temp_file.as_file().sync_all()?;

        temp_file
            .persist(&full_path)
            .map_err(|e| EtlError::IoError(e.error))?;

        tracing::debug!("Persisted {} bytes to {}", data.len(), full_path.display());
        Ok(full_path)
    }
}
