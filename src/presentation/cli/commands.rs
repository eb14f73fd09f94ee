//! CLI commands using clap

use crate::domain::entities::UserId;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Largest id range `batch` accepts in one run
pub const MAX_BATCH_SIZE: u64 = 1_000_000;

/// Ids generated in parallel before their icons are written out
pub const BATCH_CHUNK_SIZE: usize = 4096;

/// identicon - deterministic account avatars
///
/// Generates the MD5-based 5x5 identicons served for user accounts that
/// have no uploaded icon.
#[derive(Parser)]
#[command(name = "identicon")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate deterministic identicon avatars", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the identicon of one user
    Generate {
        /// User id (may be zero or negative)
        #[arg(short, long, allow_negative_numbers = true)]
        user_id: UserId,

        /// Output directory
        #[arg(short, long, default_value = "./icons")]
        output: PathBuf,

        /// Overwrite existing files
        #[arg(long)]
        overwrite: bool,

        /// Print metadata as JSON instead of writing the file
        #[arg(long)]
        json: bool,
    },

    /// Generate identicons for an inclusive range of user ids
    Batch {
        /// First user id
        #[arg(long, allow_negative_numbers = true)]
        from: UserId,

        /// Last user id
        #[arg(long, allow_negative_numbers = true)]
        to: UserId,

        /// Output directory
        #[arg(short, long, default_value = "./icons")]
        output: PathBuf,

        /// Overwrite existing files
        #[arg(long)]
        overwrite: bool,
    },

    /// Print the MD5 digest of a user id
    Hash {
        #[arg(short, long, allow_negative_numbers = true)]
        user_id: UserId,
    },

    /// Print the mosaic and color of a user id
    Pattern {
        #[arg(short, long, allow_negative_numbers = true)]
        user_id: UserId,
    },

    /// Show the chunk structure of a PNG file
    Inspect {
        /// PNG file to inspect
        file: PathBuf,
    },

    /// Resolve the icon served for a user account
    Icon {
        #[arg(short, long, allow_negative_numbers = true)]
        user_id: UserId,

        /// Directory of uploaded icons named `<user id>.<ext>`
        #[arg(long)]
        store: Option<PathBuf>,

        /// Icon served for anonymous users and on failure
        #[arg(long)]
        default_icon: Option<PathBuf>,

        /// Output directory
        #[arg(short, long, default_value = "./icons")]
        output: PathBuf,

        /// Overwrite existing files
        #[arg(long)]
        overwrite: bool,
    },
}

/// Expands an inclusive id range, rejecting reversed or oversized ranges
pub fn parse_user_range(from: UserId, to: UserId) -> Result<Vec<UserId>, String> {
    if from > to {
        return Err(format!("empty range: {from} > {to}"));
    }

    let count = to.abs_diff(from).saturating_add(1);
    if count > MAX_BATCH_SIZE {
        return Err(format!(
            "range of {count} ids exceeds the limit of {MAX_BATCH_SIZE}"
        ));
    }

    Ok((from..=to).collect())
}
