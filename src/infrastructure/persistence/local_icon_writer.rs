//! Local icon writer implementation
//!
//! Writes encoded icons to the local filesystem under their suggested names.

use crate::domain::entities::IconImage;
use crate::domain::repositories::{IconWriter, IconWriterError, WriteOptions, WriteResult};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Component, Path, PathBuf};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

/// Local file system writer
pub struct LocalIconWriter {
    output_dir: PathBuf,
    files_written: AtomicUsize,
    bytes_written: AtomicU64,
}

impl LocalIconWriter {
    /// Resolves the output path, refusing names that would leave the
    /// output directory
    fn output_path(&self, icon: &IconImage) -> Result<PathBuf, IconWriterError> {
        let name = Path::new(icon.file_name());
        let mut components = name.components();

        match (components.next(), components.next()) {
            (Some(Component::Normal(file_name)), None) => Ok(self.output_dir.join(file_name)),
            _ => Err(IconWriterError::InvalidFileName(
                icon.file_name().to_string(),
            )),
        }
    }
}

impl IconWriter for LocalIconWriter {
    fn new(output_dir: &Path) -> Result<Self, IconWriterError> {
        if !output_dir.exists() {
            fs::create_dir_all(output_dir).map_err(|e| {
                if e.kind() == std::io::ErrorKind::PermissionDenied {
                    IconWriterError::PermissionDenied(output_dir.display().to_string())
                } else {
                    IconWriterError::IoError(e)
                }
            })?;
        }

        Ok(Self {
            output_dir: output_dir.to_path_buf(),
            files_written: AtomicUsize::new(0),
            bytes_written: AtomicU64::new(0),
        })
    }

    fn write(
        &self,
        icon: &IconImage,
        options: &WriteOptions,
    ) -> Result<WriteResult, IconWriterError> {
        let output_path = self.output_path(icon)?;

        if output_path.exists() && !options.overwrite {
            return Err(IconWriterError::FileExists(
                output_path.display().to_string(),
            ));
        }

        let mut output_file = File::create(&output_path)?;
        output_file.write_all(icon.data())?;
        output_file.sync_all()?;

        let saved_size = icon.size();

        self.files_written.fetch_add(1, Ordering::Relaxed);
        self.bytes_written.fetch_add(saved_size, Ordering::Relaxed);

        tracing::debug!("Wrote {} ({} bytes)", output_path.display(), saved_size);

        Ok(WriteResult {
            saved_path: output_path,
            saved_size,
        })
    }

    fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    fn files_written(&self) -> usize {
        self.files_written.load(Ordering::Relaxed)
    }

    fn bytes_written(&self) -> u64 {
        self.bytes_written.load(Ordering::Relaxed)
    }
}
