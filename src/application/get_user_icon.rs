//! Get user icon use case
//!
//! Resolves the icon served for an account: the anonymous account gets the
//! default icon, users with an upload get their upload, everyone else gets
//! an identicon. Any failure along the way degrades to the default icon.

use crate::application::dto::{IconOptions, IconResponse, IconSource};
use crate::domain::entities::{Canvas, IconImage, PNG_CONTENT_TYPE, UserId};
use crate::domain::repositories::{AccountImageStore, IconEncoder};
use crate::domain::services::IdenticonGenerator;
use crate::formats::png::has_png_signature;
use crate::infrastructure::cache::IconCache;
use std::fs;
use std::path::Path;

/// User id the account service assigns to anonymous visitors
pub const ANONYMOUS_USER_ID: UserId = -1;

/// File name of the default icon
pub const DEFAULT_ICON_FILE_NAME: &str = "icon.png";

/// Get user icon use case
///
/// Never fails: store and encoder errors are logged and answered with the
/// default icon.
pub struct GetUserIconUseCase<S: AccountImageStore, E: IconEncoder> {
    store: S,
    generator: IdenticonGenerator<E>,
    cache: IconCache,
    default_icon: IconImage,
}

impl<S: AccountImageStore, E: IconEncoder> GetUserIconUseCase<S, E> {
    /// Creates the use case and loads the default icon
    pub fn new(store: S, generator: IdenticonGenerator<E>, options: &IconOptions) -> Self {
        let default_icon =
            load_default_icon(options.default_icon_path.as_deref(), generator.encoder());

        Self {
            store,
            generator,
            cache: IconCache::new(options.cache_capacity),
            default_icon,
        }
    }

    /// Resolves the icon for a user
    pub fn execute(&self, user_id: UserId) -> IconResponse {
        if user_id == ANONYMOUS_USER_ID {
            return self.default_response();
        }

        match self.store.find_icon(user_id) {
            Ok(Some(icon)) => return IconResponse::new(icon, IconSource::Custom),
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(user_id, "Account image lookup failed: {}", e);
                return self.default_response();
            }
        }

        match self.cache.get_or_generate(user_id, &self.generator) {
            Ok(icon) => IconResponse::new(icon, IconSource::Identicon),
            Err(e) => {
                tracing::warn!(user_id, "Identicon generation failed: {}", e);
                self.default_response()
            }
        }
    }

    /// Returns the default icon
    pub fn default_icon(&self) -> &IconImage {
        &self.default_icon
    }

    /// Returns the identicon cache
    pub fn cache(&self) -> &IconCache {
        &self.cache
    }

    fn default_response(&self) -> IconResponse {
        IconResponse::new(self.default_icon.clone(), IconSource::Default)
    }
}

/// Reads the configured default icon, falling back to a blank canvas
/// encoded with `encoder` when the file is unreadable or not a PNG
fn load_default_icon<E: IconEncoder>(path: Option<&Path>, encoder: &E) -> IconImage {
    if let Some(path) = path {
        match fs::read(path) {
            Ok(data) if has_png_signature(&data) => {
                tracing::info!("Loaded default icon from {}", path.display());
                return IconImage::new(DEFAULT_ICON_FILE_NAME, PNG_CONTENT_TYPE, data);
            }
            Ok(_) => {
                tracing::warn!("Default icon {} is not a PNG file", path.display());
            }
            Err(e) => {
                tracing::warn!("Cannot read default icon {}: {}", path.display(), e);
            }
        }
    }

    let data = encoder.encode(&Canvas::blank()).unwrap_or_else(|e| {
        tracing::warn!("Cannot encode built-in default icon: {}", e);
        Vec::new()
    });

    IconImage::new(DEFAULT_ICON_FILE_NAME, encoder.content_type(), data)
}
