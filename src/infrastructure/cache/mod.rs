//! In-memory caches

mod icon_cache;

pub use icon_cache::IconCache;
