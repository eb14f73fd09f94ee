//! Data Transfer Objects

mod icon_metadata;
mod icon_options;
mod icon_response;

pub use icon_metadata::IconMetadata;
pub use icon_options::{DEFAULT_CACHE_CAPACITY, IconOptions};
pub use icon_response::{ICON_CACHE_CONTROL, IconResponse, IconSource};
