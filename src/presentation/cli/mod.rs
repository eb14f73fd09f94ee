//! CLI module

mod commands;

pub use commands::{BATCH_CHUNK_SIZE, Cli, Commands, MAX_BATCH_SIZE, parse_user_range};
