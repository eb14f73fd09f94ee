//! Infrastructure layer
//!
//! Concrete implementations of the domain repositories, plus caching.
//! This layer contains the image codec and filesystem dependencies.

pub mod cache;
pub mod encoding;
pub mod persistence;
