//! Domain services
//!
//! Core business logic services that operate on domain entities.

mod identicon_generator;

pub use identicon_generator::{IDENTICON_FILE_PREFIX, IdenticonError, IdenticonGenerator};
