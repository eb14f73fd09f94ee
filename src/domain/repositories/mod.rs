//! Repository traits (interfaces)
//!
//! These traits define the contracts for external dependencies.
//! They follow the Dependency Inversion Principle (DIP) from SOLID.

mod account_image_store;
mod icon_encoder;
mod icon_writer;

pub use account_image_store::{AccountImageError, AccountImageStore};
pub use icon_encoder::{EncodeError, IconEncoder};
pub use icon_writer::{IconWriter, IconWriterError, WriteOptions, WriteResult};
