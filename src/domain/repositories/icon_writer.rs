//! Icon writer trait
//!
//! Defines the interface for saving encoded icons to storage.

use crate::domain::entities::IconImage;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when writing icons
#[derive(Error, Debug)]
pub enum IconWriterError {
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("File already exists: {0}")]
    FileExists(String),

    #[error("Invalid file name: {0}")]
    InvalidFileName(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Options for writing icons
#[derive(Debug, Clone, Default)]
pub struct WriteOptions {
    /// Whether to overwrite existing files
    pub overwrite: bool,
}

/// Result of writing a single icon
#[derive(Debug, Clone)]
pub struct WriteResult {
    /// Path where the icon was saved
    pub saved_path: PathBuf,
    /// Size in bytes of the saved icon
    pub saved_size: u64,
}

/// Trait for writing icons to storage
///
/// Icons are saved under their suggested file name.
///
/// # Example
///
/// ```ignore
/// let writer = LocalIconWriter::new(Path::new("./icons"))?;
/// let result = writer.write(&icon, &WriteOptions::default())?;
/// println!("Saved to: {}", result.saved_path.display());
/// ```
pub trait IconWriter: Send + Sync {
    /// Creates a new writer for the specified output directory
    fn new(output_dir: &Path) -> Result<Self, IconWriterError>
    where
        Self: Sized;

    /// Writes one icon
    fn write(&self, icon: &IconImage, options: &WriteOptions)
        -> Result<WriteResult, IconWriterError>;

    /// Writes multiple icons
    fn write_batch(
        &self,
        icons: &[IconImage],
        options: &WriteOptions,
    ) -> Vec<Result<WriteResult, IconWriterError>> {
        icons.iter().map(|icon| self.write(icon, options)).collect()
    }

    /// Returns the output directory
    fn output_dir(&self) -> &Path;

    /// Returns the number of icons written so far
    fn files_written(&self) -> usize;

    /// Returns the total bytes written so far
    fn bytes_written(&self) -> u64;
}
