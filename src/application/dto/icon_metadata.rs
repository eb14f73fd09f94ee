//! Icon metadata DTO

use crate::domain::entities::{ContentHash, IconImage, Rgb, UserId};
use serde::Serialize;

/// Serializable summary of a generated identicon
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IconMetadata {
    pub user_id: UserId,
    pub file_name: String,
    pub content_type: String,
    pub size: u64,
    pub hash: String,
    pub color: String,
}

impl IconMetadata {
    /// Describes the identicon generated for `user_id`
    pub fn for_identicon(user_id: UserId, icon: &IconImage) -> Self {
        let hash = ContentHash::of_user(user_id);
        Self {
            user_id,
            file_name: icon.file_name().to_string(),
            content_type: icon.content_type().to_string(),
            size: icon.size(),
            hash: hash.to_hex(),
            color: Rgb::from_hash(&hash).to_hex_string(),
        }
    }
}
