//! Persistence adapters

mod account_images;
mod local_icon_writer;

pub use account_images::{DirectoryAccountImageStore, InMemoryAccountImageStore};
pub use local_icon_writer::LocalIconWriter;
