//! Infrastructure layer unit tests
//!
//! Tests for the PNG encoder, the icon cache, account image stores and the
//! local icon writer.

use identicon::domain::entities::{Canvas, IconImage, PNG_CONTENT_TYPE};
use identicon::domain::repositories::{
    AccountImageError, AccountImageStore, IconEncoder, IconWriter, IconWriterError, WriteOptions,
};
use identicon::formats::png::PNG_SIGNATURE;
use identicon::infrastructure::cache::IconCache;
use identicon::infrastructure::encoding::PngIconEncoder;
use identicon::infrastructure::persistence::{
    DirectoryAccountImageStore, InMemoryAccountImageStore, LocalIconWriter,
};
use identicon::{IdenticonGenerator, generate_identicon};
use rstest::*;
use std::fs;
use tempfile::TempDir;

// ============================================================================
// PngIconEncoder Tests
// ============================================================================

#[rstest]
fn test_encoder_metadata() {
    let encoder = PngIconEncoder::new();
    assert_eq!(encoder.content_type(), "image/png");
    assert_eq!(encoder.extension(), "png");
}

#[rstest]
fn test_encode_blank_canvas() {
    let data = PngIconEncoder::new().encode(&Canvas::blank()).unwrap();
    assert_eq!(&data[..8], &PNG_SIGNATURE);

    let decoded = image::load_from_memory(&data).unwrap().to_rgb8();
    assert!(decoded.pixels().all(|p| p.0 == [0xFF, 0xFF, 0xFF]));
}

// ============================================================================
// IconCache Tests
// ============================================================================

#[rstest]
fn test_cache_hits_after_first_generation() {
    let generator = IdenticonGenerator::new(PngIconEncoder::new());
    let cache = IconCache::new(16);

    for _ in 0..3 {
        cache.get_or_generate(5, &generator).unwrap();
    }

    assert_eq!(cache.len(), 1);
    assert_eq!(cache.misses(), 1);
    assert_eq!(cache.hits(), 2);
}

#[rstest]
fn test_cache_bounded() {
    let generator = IdenticonGenerator::new(PngIconEncoder::new());
    let cache = IconCache::new(3);

    for user_id in 0..10 {
        cache.get_or_generate(user_id, &generator).unwrap();
    }

    assert_eq!(cache.len(), 3);
    assert_eq!(cache.capacity(), 3);
    assert!(cache.get(0).is_none());
    assert!(cache.get(9).is_some());
}

#[rstest]
fn test_cache_shared_across_threads() {
    let generator = IdenticonGenerator::new(PngIconEncoder::new());
    let cache = IconCache::new(64);

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for user_id in 0..16 {
                    let icon = cache.get_or_generate(user_id, &generator).unwrap();
                    assert_eq!(icon.file_name(), format!("identicon_{user_id}.png"));
                }
            });
        }
    });

    assert_eq!(cache.len(), 16);
}

// ============================================================================
// Account Image Store Tests
// ============================================================================

#[fixture]
fn store_dir() -> TempDir {
    TempDir::new().unwrap()
}

#[rstest]
fn test_directory_store_finds_png(store_dir: TempDir) {
    let png = generate_identicon(99).unwrap();
    fs::write(store_dir.path().join("7.png"), png.data()).unwrap();

    let store = DirectoryAccountImageStore::new(store_dir.path());
    let found = store.find_icon(7).unwrap().unwrap();

    assert_eq!(found.file_name(), "7.png");
    assert_eq!(found.content_type(), PNG_CONTENT_TYPE);
    assert_eq!(found.data(), png.data());
}

#[rstest]
fn test_directory_store_jpeg(store_dir: TempDir) {
    fs::write(store_dir.path().join("3.jpg"), [0xFF, 0xD8, 0xFF, 0xE0]).unwrap();

    let store = DirectoryAccountImageStore::new(store_dir.path());
    let found = store.find_icon(3).unwrap().unwrap();
    assert_eq!(found.content_type(), "image/jpeg");
}

#[rstest]
fn test_directory_store_negative_id(store_dir: TempDir) {
    fs::write(store_dir.path().join("-4.gif"), b"GIF89a").unwrap();

    let store = DirectoryAccountImageStore::new(store_dir.path());
    assert!(store.find_icon(-4).unwrap().is_some());
    assert!(store.find_icon(4).unwrap().is_none());
}

#[rstest]
fn test_directory_store_corrupt_png(store_dir: TempDir) {
    fs::write(store_dir.path().join("1.png"), b"not a png").unwrap();

    let store = DirectoryAccountImageStore::new(store_dir.path());
    let err = store.find_icon(1).unwrap_err();
    assert!(matches!(err, AccountImageError::Corrupt { user_id: 1, .. }));
}

#[rstest]
fn test_directory_store_empty_file(store_dir: TempDir) {
    fs::write(store_dir.path().join("2.gif"), b"").unwrap();

    let store = DirectoryAccountImageStore::new(store_dir.path());
    assert!(store.find_icon(2).is_err());
}

#[rstest]
fn test_in_memory_store_replaces() {
    let store = InMemoryAccountImageStore::new();
    store.insert(1, IconImage::new("a.png", PNG_CONTENT_TYPE, vec![1u8]));
    store.insert(1, IconImage::new("b.png", PNG_CONTENT_TYPE, vec![2u8]));

    assert_eq!(store.len(), 1);
    assert_eq!(store.find_icon(1).unwrap().unwrap().file_name(), "b.png");
}

// ============================================================================
// LocalIconWriter Tests
// ============================================================================

#[fixture]
fn sample_icon() -> IconImage {
    generate_identicon(42).unwrap()
}

#[rstest]
fn test_write_icon(sample_icon: IconImage) {
    let dir = TempDir::new().unwrap();
    let writer = LocalIconWriter::new(dir.path()).unwrap();

    let result = writer.write(&sample_icon, &WriteOptions::default()).unwrap();

    assert_eq!(result.saved_path, dir.path().join("identicon_42.png"));
    assert_eq!(result.saved_size, sample_icon.size());
    assert_eq!(fs::read(&result.saved_path).unwrap(), sample_icon.data());
    assert_eq!(writer.files_written(), 1);
    assert_eq!(writer.bytes_written(), sample_icon.size());
}

#[rstest]
fn test_creates_output_dir(sample_icon: IconImage) {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("a").join("b");
    let writer = LocalIconWriter::new(&nested).unwrap();

    assert_eq!(writer.output_dir(), nested.as_path());
    writer.write(&sample_icon, &WriteOptions::default()).unwrap();
    assert!(nested.join("identicon_42.png").exists());
}

#[rstest]
fn test_existing_file_rejected(sample_icon: IconImage) {
    let dir = TempDir::new().unwrap();
    let writer = LocalIconWriter::new(dir.path()).unwrap();

    writer.write(&sample_icon, &WriteOptions::default()).unwrap();
    let err = writer
        .write(&sample_icon, &WriteOptions::default())
        .unwrap_err();

    assert!(matches!(err, IconWriterError::FileExists(_)));
    assert_eq!(writer.files_written(), 1);
}

#[rstest]
fn test_overwrite(sample_icon: IconImage) {
    let dir = TempDir::new().unwrap();
    let writer = LocalIconWriter::new(dir.path()).unwrap();
    let options = WriteOptions { overwrite: true };

    writer.write(&sample_icon, &options).unwrap();
    writer.write(&sample_icon, &options).unwrap();

    assert_eq!(writer.files_written(), 2);
    assert_eq!(writer.bytes_written(), sample_icon.size() * 2);
}

#[rstest]
#[case("../escape.png")]
#[case("nested/icon.png")]
#[case("/abs.png")]
#[case("")]
fn test_invalid_file_names(#[case] file_name: &str) {
    let dir = TempDir::new().unwrap();
    let writer = LocalIconWriter::new(dir.path()).unwrap();
    let icon = IconImage::new(file_name, PNG_CONTENT_TYPE, vec![0u8; 4]);

    let err = writer.write(&icon, &WriteOptions::default()).unwrap_err();
    assert!(matches!(err, IconWriterError::InvalidFileName(_)));
}

#[rstest]
fn test_write_batch() {
    let dir = TempDir::new().unwrap();
    let writer = LocalIconWriter::new(dir.path()).unwrap();
    let icons: Vec<IconImage> = (1..=3).map(|id| generate_identicon(id).unwrap()).collect();

    let results = writer.write_batch(&icons, &WriteOptions::default());

    assert!(results.iter().all(Result::is_ok));
    assert_eq!(writer.files_written(), 3);
}
