//! Account image stores
//!
//! Read-only views of user-uploaded icons. `InMemoryAccountImageStore` backs
//! tests and embedders that already hold the images; `DirectoryAccountImageStore`
//! reads `<user id>.<ext>` files from a directory.

use crate::domain::entities::{IconImage, PNG_CONTENT_TYPE, UserId};
use crate::domain::repositories::{AccountImageError, AccountImageStore};
use crate::formats::png::has_png_signature;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Extensions probed by the directory store, in order
const KNOWN_EXTENSIONS: [(&str, &str); 4] = [
    ("png", PNG_CONTENT_TYPE),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("gif", "image/gif"),
];

/// Custom icons held in memory
#[derive(Debug, Default)]
pub struct InMemoryAccountImageStore {
    icons: RwLock<HashMap<UserId, IconImage>>,
}

impl InMemoryAccountImageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores or replaces the custom icon of a user
    pub fn insert(&self, user_id: UserId, icon: IconImage) {
        self.icons.write().insert(user_id, icon);
    }

    /// Removes the custom icon of a user
    pub fn remove(&self, user_id: UserId) -> Option<IconImage> {
        self.icons.write().remove(&user_id)
    }

    pub fn len(&self) -> usize {
        self.icons.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.read().is_empty()
    }
}

impl AccountImageStore for InMemoryAccountImageStore {
    fn find_icon(&self, user_id: UserId) -> Result<Option<IconImage>, AccountImageError> {
        Ok(self.icons.read().get(&user_id).cloned())
    }
}

/// Custom icons stored as files named after the user id
#[derive(Debug, Clone)]
pub struct DirectoryAccountImageStore {
    root: PathBuf,
}

impl DirectoryAccountImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl AccountImageStore for DirectoryAccountImageStore {
    fn find_icon(&self, user_id: UserId) -> Result<Option<IconImage>, AccountImageError> {
        for (extension, content_type) in KNOWN_EXTENSIONS {
            let file_name = format!("{user_id}.{extension}");
            let path = self.root.join(&file_name);

            let data = match fs::read(&path) {
                Ok(data) => data,
                Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
                Err(e) => return Err(e.into()),
            };

            if data.is_empty() {
                return Err(AccountImageError::Corrupt {
                    user_id,
                    reason: format!("{} is empty", path.display()),
                });
            }

            if content_type == PNG_CONTENT_TYPE && !has_png_signature(&data) {
                return Err(AccountImageError::Corrupt {
                    user_id,
                    reason: format!("{} is not a PNG file", path.display()),
                });
            }

            tracing::debug!(user_id, path = %path.display(), "Found custom account icon");
            return Ok(Some(IconImage::new(file_name, content_type, data)));
        }

        Ok(None)
    }
}
