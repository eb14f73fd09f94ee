//! Icon image entity
//!
//! An encoded avatar plus the metadata needed to serve it.

use bytes::Bytes;

/// MIME type of every generated identicon
pub const PNG_CONTENT_TYPE: &str = "image/png";

/// Encoded icon and its serving metadata
///
/// The payload is a [`Bytes`] so cached icons can be handed out without
/// copying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconImage {
    /// Suggested download name, e.g. `identicon_5.png`
    file_name: String,
    /// MIME type of `data`
    content_type: String,
    /// Encoded image
    data: Bytes,
}

impl IconImage {
    /// Creates a new icon image
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        data: impl Into<Bytes>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            data: data.into(),
        }
    }

    /// Returns the suggested file name
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Returns the MIME type
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Returns the byte length of the encoded image
    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }

    /// Returns the encoded bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns a cheap handle to the encoded bytes
    pub fn bytes(&self) -> Bytes {
        self.data.clone()
    }

    /// Consumes self and returns the encoded bytes
    pub fn into_data(self) -> Bytes {
        self.data
    }

    /// Returns true when there is nothing to serve
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
