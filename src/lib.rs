//! Deterministic identicon avatars.
//!
//! A user id is hashed with MD5; the first 15 bits of the digest pick the
//! cells of a horizontally mirrored 5x5 mosaic and the first 3 bytes pick
//! its color. The mosaic is drawn at 4x scale on a white 20x20 canvas and
//! encoded as PNG. The same id always produces the same bytes.
//!
//! ```
//! let icon = identicon::generate_identicon(5).unwrap();
//! assert_eq!(icon.file_name(), "identicon_5.png");
//! assert_eq!(&icon.data()[..8], &identicon::formats::png::PNG_SIGNATURE);
//! ```

pub mod application;
pub mod domain;
pub mod formats;
pub mod infrastructure;
pub mod presentation;

pub use domain::entities::{BitPattern, ContentHash, IconImage, Rgb, UserId};
pub use domain::services::{IdenticonError, IdenticonGenerator};
pub use infrastructure::encoding::PngIconEncoder;

/// Generates the PNG identicon of a user
pub fn generate_identicon(user_id: UserId) -> Result<IconImage, IdenticonError> {
    IdenticonGenerator::new(PngIconEncoder::new()).generate_identicon(user_id)
}

/// MD5 of the user id's decimal string, as 32 lowercase hex characters
pub fn generate_md5_hash(user_id: UserId) -> String {
    ContentHash::of_user(user_id).to_hex()
}
