//! Icon options DTO

use std::path::PathBuf;

/// Default number of identicons kept in memory
pub const DEFAULT_CACHE_CAPACITY: usize = 1024;

/// Options for serving and writing icons
///
/// None of these reach the generator: canvas size, pixel scale and colors
/// are fixed.
#[derive(Debug, Clone)]
pub struct IconOptions {
    /// File served when no identicon applies or generation fails
    pub default_icon_path: Option<PathBuf>,
    /// Identicons kept in memory (0 disables the cache)
    pub cache_capacity: usize,
    /// Directory written icons go to
    pub output_dir: PathBuf,
    /// Whether to overwrite existing files
    pub overwrite: bool,
}

impl Default for IconOptions {
    fn default() -> Self {
        Self {
            default_icon_path: None,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            output_dir: PathBuf::from("./icons"),
            overwrite: false,
        }
    }
}

impl IconOptions {
    /// Creates options writing to the given directory
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Default::default()
        }
    }

    /// Sets the default icon file
    pub fn with_default_icon(mut self, path: impl Into<PathBuf>) -> Self {
        self.default_icon_path = Some(path.into());
        self
    }

    /// Sets the cache capacity
    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    /// Allows overwriting existing files
    pub fn overwriting(mut self) -> Self {
        self.overwrite = true;
        self
    }
}
