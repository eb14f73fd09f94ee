#![no_main]

use identicon::domain::entities::ContentHash;
use identicon::IdenticonGenerator;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(hash) = text.parse::<ContentHash>() {
        assert_eq!(hash.to_hex(), text.to_ascii_lowercase());
    }

    let generator = IdenticonGenerator::<identicon::PngIconEncoder>::default();
    let pattern = generator.generate_pattern(text);
    let color = generator.extract_color(text);
    assert_eq!(pattern.is_ok(), color.is_ok());
    if let Ok(pattern) = pattern {
        assert!(pattern.is_symmetric());
    }
});
