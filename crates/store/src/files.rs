//! Export and import file access.
//!
//! Exports are written synchronously through a [`FileSave`] implementation.
//! Import files are read with [`read_import_file`], the one asynchronous
//! operation in the application.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::error::{Result, StoreError};

/// Saves a named document somewhere the user can find it.
pub trait FileSave {
    /// Writes `contents` under `name` and returns where it ended up.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    fn save_file(&self, name: &str, contents: &str) -> Result<PathBuf>;
}

/// A [`FileSave`] writing into a fixed directory.
///
/// # Examples
///
/// ```no_run
/// use tracker_store::{DirectoryFileSave, FileSave};
///
/// # fn example() -> tracker_store::Result<()> {
/// let saver = DirectoryFileSave::new("exports");
/// let path = saver.save_file("project-tracker-2024-01-10.json", "[]")?;
/// println!("wrote {}", path.display());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DirectoryFileSave {
    directory: PathBuf,
}

impl DirectoryFileSave {
    /// Creates a saver writing into `directory`.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Returns the target directory.
    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

impl FileSave for DirectoryFileSave {
    #[instrument(skip(self, contents), fields(directory = ?self.directory, bytes = contents.len()))]
    fn save_file(&self, name: &str, contents: &str) -> Result<PathBuf> {
        if !self.directory.exists() {
            debug!("creating export directory");
            fs::create_dir_all(&self.directory).map_err(|e| StoreError::io(&self.directory, e))?;
        }

        // Only the final component of `name` is used.
        let file_name = Path::new(name)
            .file_name()
            .map_or_else(|| name.replace(['/', '\\'], "_").into(), ToOwned::to_owned);
        let path = self.directory.join(file_name);

        fs::write(&path, contents).map_err(|e| StoreError::io(&path, e))?;
        info!(?path, "exported file");
        Ok(path)
    }
}

/// Reads an import file as text.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not UTF-8.
#[instrument]
pub async fn read_import_file(path: &Path) -> Result<String> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| StoreError::io(path, e))?;
    debug!(bytes = text.len(), "read import file");
    Ok(text)
}
