//! Image encoders

mod png_encoder;

pub use png_encoder::PngIconEncoder;
