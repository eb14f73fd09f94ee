//! Icon response DTO
//!
//! What an HTTP handler needs to serve an icon: the bytes and the header
//! values, already computed.

use crate::domain::entities::IconImage;
use sha2::{Digest, Sha256};
use std::fmt;

/// Cache policy sent with every icon
pub const ICON_CACHE_CONTROL: &str = "public, max-age=3600";

/// Where a served icon came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconSource {
    /// Uploaded by the user
    Custom,
    /// Generated from the user id
    Identicon,
    /// Static fallback
    Default,
}

impl fmt::Display for IconSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Custom => "custom",
            Self::Identicon => "identicon",
            Self::Default => "default",
        };
        write!(f, "{name}")
    }
}

/// Icon ready to be served
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconResponse {
    pub icon: IconImage,
    pub source: IconSource,
}

impl IconResponse {
    pub fn new(icon: IconImage, source: IconSource) -> Self {
        Self { icon, source }
    }

    /// `Content-Type` value
    pub fn content_type(&self) -> &str {
        self.icon.content_type()
    }

    /// `Content-Length` value
    pub fn content_length(&self) -> u64 {
        self.icon.size()
    }

    /// `Content-Disposition` value; the default icon is sent without one
    pub fn content_disposition(&self) -> Option<String> {
        match self.source {
            IconSource::Default => None,
            IconSource::Custom | IconSource::Identicon => {
                Some(format!("inline; filename=\"{}\"", self.icon.file_name()))
            }
        }
    }

    /// `Cache-Control` value
    pub fn cache_control(&self) -> &'static str {
        ICON_CACHE_CONTROL
    }

    /// Strong `ETag` value: quoted SHA-256 of the bytes
    pub fn etag(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.icon.data());
        format!("\"{:x}\"", hasher.finalize())
    }

    /// All response headers in a fixed order
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        let mut headers = vec![
            ("Content-Type", self.content_type().to_string()),
            ("Content-Length", self.content_length().to_string()),
        ];
        if let Some(disposition) = self.content_disposition() {
            headers.push(("Content-Disposition", disposition));
        }
        headers.push(("Cache-Control", self.cache_control().to_string()));
        headers.push(("ETag", self.etag()));
        headers
    }
}
