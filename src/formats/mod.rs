//! Image container formats

pub mod png;
