#![no_main]

use identicon::formats::png::{PngChunkIterator, inspect_png};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Some(info) = inspect_png(data) {
        assert!(info.chunk_count >= 1);
        assert!(info.idat_total_bytes <= data.len() as u64);
    }

    if let Some(chunks) = PngChunkIterator::new(data) {
        for chunk in chunks {
            let _ = chunk.crc_matches();
        }
    }
});
