//! Identicon generator service
//!
//! Pure pipeline from a user id to an encoded avatar:
//! `user id -> MD5 -> 5x5 mosaic + color -> 20x20 raster -> encoded bytes`.
//! There is no shared mutable state; a generator can be used from any
//! number of threads at once.

use crate::domain::entities::{BitPattern, Canvas, ContentHash, IconImage, Rgb, UserId};
use crate::domain::repositories::{EncodeError, IconEncoder};
use rayon::prelude::*;
use thiserror::Error;

/// Prefix of generated icon file names
pub const IDENTICON_FILE_PREFIX: &str = "identicon";

/// Errors that can occur during identicon generation
#[derive(Error, Debug)]
pub enum IdenticonError {
    /// A hex digest passed to one of the string entry points did not hold
    /// exactly 32 hex characters
    #[error("Invalid content hash: {0}")]
    InvalidHash(String),

    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// Identicon generator
///
/// Deterministic for every input: the same user id always yields
/// byte-identical output, which makes results safe to memoize by id.
///
/// # Example
///
/// ```
/// use identicon::domain::services::IdenticonGenerator;
/// use identicon::infrastructure::encoding::PngIconEncoder;
///
/// let generator = IdenticonGenerator::new(PngIconEncoder::new());
/// let icon = generator.generate_identicon(5).unwrap();
/// assert_eq!(icon.file_name(), "identicon_5.png");
/// assert_eq!(icon.content_type(), "image/png");
/// ```
#[derive(Debug, Clone, Default)]
pub struct IdenticonGenerator<E: IconEncoder> {
    encoder: E,
}

impl<E: IconEncoder> IdenticonGenerator<E> {
    /// Creates a generator around the given encoder
    pub fn new(encoder: E) -> Self {
        Self { encoder }
    }

    /// Returns the encoder
    pub fn encoder(&self) -> &E {
        &self.encoder
    }

    /// Generates the identicon of a user
    ///
    /// Accepts every `i64`. The only failure is an encoder failure, which
    /// callers should treat as transient infrastructure trouble.
    pub fn generate_identicon(&self, user_id: UserId) -> Result<IconImage, IdenticonError> {
        let hash = ContentHash::of_user(user_id);
        let pattern = BitPattern::from_hash(&hash);
        let color = Rgb::from_hash(&hash);

        tracing::trace!(
            user_id,
            %hash,
            %color,
            painted = pattern.painted_count(),
            "Rendering identicon"
        );

        let canvas = Canvas::render(&pattern, color);
        let data = self.encoder.encode(&canvas)?;

        tracing::debug!(user_id, size = data.len(), "Generated identicon");

        Ok(IconImage::new(
            self.file_name(user_id),
            self.encoder.content_type(),
            data,
        ))
    }

    /// Returns the MD5 digest of the user id's decimal string as 32
    /// lowercase hex characters
    pub fn generate_md5_hash(&self, user_id: UserId) -> String {
        ContentHash::of_user(user_id).to_hex()
    }

    /// Derives the 5x5 mosaic from a hex digest
    pub fn generate_pattern(&self, hash: &str) -> Result<BitPattern, IdenticonError> {
        Ok(BitPattern::from_hash(&parse_hash(hash)?))
    }

    /// Derives the foreground color from a hex digest
    pub fn extract_color(&self, hash: &str) -> Result<Rgb, IdenticonError> {
        Ok(Rgb::from_hash(&parse_hash(hash)?))
    }

    /// Generates icons for many users in parallel
    ///
    /// Results keep the order of `user_ids`.
    pub fn generate_batch(
        &self,
        user_ids: &[UserId],
    ) -> Vec<(UserId, Result<IconImage, IdenticonError>)> {
        tracing::debug!(count = user_ids.len(), "Generating identicon batch");

        user_ids
            .par_iter()
            .map(|&user_id| (user_id, self.generate_identicon(user_id)))
            .collect()
    }

    /// Generates icons chunk by chunk, handing each result to `sink` in input
    /// order
    ///
    /// Each chunk of at most `chunk_size` ids is generated in parallel and
    /// drained before the next starts, so at most one chunk of encoded icons
    /// is held at a time.
    pub fn generate_chunked<F>(&self, user_ids: &[UserId], chunk_size: usize, mut sink: F)
    where
        F: FnMut(UserId, Result<IconImage, IdenticonError>),
    {
        for chunk in user_ids.chunks(chunk_size.max(1)) {
            for (user_id, result) in self.generate_batch(chunk) {
                sink(user_id, result);
            }
        }
    }

    /// Suggested file name for a user's identicon, e.g. `identicon_5.png`
    pub fn file_name(&self, user_id: UserId) -> String {
        format!(
            "{}_{}.{}",
            IDENTICON_FILE_PREFIX,
            user_id,
            self.encoder.extension()
        )
    }
}

fn parse_hash(hash: &str) -> Result<ContentHash, IdenticonError> {
    hash.parse::<ContentHash>()
        .map_err(|e| IdenticonError::InvalidHash(format!("{hash:?}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{CANVAS_SIZE, PNG_CONTENT_TYPE};

    /// Stores the raw samples so tests can see exactly what was rasterized
    #[derive(Debug, Default)]
    struct RawEncoder;

    impl IconEncoder for RawEncoder {
        fn encode(&self, canvas: &Canvas) -> Result<Vec<u8>, EncodeError> {
            Ok(canvas.as_raw().to_vec())
        }

        fn content_type(&self) -> &'static str {
            PNG_CONTENT_TYPE
        }

        fn extension(&self) -> &'static str {
            "png"
        }
    }

    struct FailingEncoder;

    impl IconEncoder for FailingEncoder {
        fn encode(&self, _canvas: &Canvas) -> Result<Vec<u8>, EncodeError> {
            Err(EncodeError::Image("out of memory".into()))
        }

        fn content_type(&self) -> &'static str {
            PNG_CONTENT_TYPE
        }

        fn extension(&self) -> &'static str {
            "png"
        }
    }

    #[test]
    fn test_generate_uses_canvas_of_user() {
        let generator = IdenticonGenerator::new(RawEncoder);
        let icon = generator.generate_identicon(5).unwrap();

        let hash = ContentHash::of_user(5);
        let expected = Canvas::render(&BitPattern::from_hash(&hash), Rgb::from_hash(&hash));
        assert_eq!(icon.data(), expected.as_raw());
        assert_eq!(icon.size(), (CANVAS_SIZE * CANVAS_SIZE * 3) as u64);
    }

    #[test]
    fn test_file_name_keeps_sign() {
        let generator = IdenticonGenerator::new(RawEncoder);
        assert_eq!(generator.file_name(-100), "identicon_-100.png");
        assert_eq!(generator.file_name(0), "identicon_0.png");
    }

    #[test]
    fn test_encoder_failure_propagates() {
        let generator = IdenticonGenerator::new(FailingEncoder);
        let err = generator.generate_identicon(1).unwrap_err();
        assert!(matches!(err, IdenticonError::Encode(EncodeError::Image(_))));
    }

    #[test]
    fn test_string_entry_points_reject_bad_hash() {
        let generator = IdenticonGenerator::new(RawEncoder);
        assert!(matches!(
            generator.generate_pattern("not a hash"),
            Err(IdenticonError::InvalidHash(_))
        ));
        assert!(matches!(
            generator.extract_color("e4da3b"),
            Err(IdenticonError::InvalidHash(_))
        ));
    }

    #[test]
    fn test_chunked_visits_every_id_in_order() {
        let generator = IdenticonGenerator::new(RawEncoder);
        let ids: Vec<UserId> = (-3..=7).collect();

        for chunk_size in [0, 1, 4, 11, 64] {
            let mut seen = Vec::new();
            generator.generate_chunked(&ids, chunk_size, |id, result| {
                assert_eq!(result.unwrap(), generator.generate_identicon(id).unwrap());
                seen.push(id);
            });
            assert_eq!(seen, ids, "chunk size {chunk_size}");
        }
    }

    #[test]
    fn test_batch_preserves_order() {
        let generator = IdenticonGenerator::new(RawEncoder);
        let ids = [3, -1, 0, 42, 3];
        let results = generator.generate_batch(&ids);

        let returned: Vec<UserId> = results.iter().map(|(id, _)| *id).collect();
        assert_eq!(returned, ids);
        for (id, result) in results {
            assert_eq!(result.unwrap(), generator.generate_identicon(id).unwrap());
        }
    }
}
