//! Account image store trait
//!
//! Custom icons uploaded by users live in the account service, outside this
//! crate. This trait is the read side of that store.

use crate::domain::entities::{IconImage, UserId};
use thiserror::Error;

/// Errors that can occur when reading a custom account icon
#[derive(Error, Debug)]
pub enum AccountImageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt account image for user {user_id}: {reason}")]
    Corrupt { user_id: UserId, reason: String },
}

/// Read access to user-uploaded icons
pub trait AccountImageStore: Send + Sync {
    /// Returns the custom icon of a user, or `None` if they never uploaded one
    fn find_icon(&self, user_id: UserId) -> Result<Option<IconImage>, AccountImageError>;
}
