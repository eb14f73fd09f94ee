//! Application layer
//!
//! Use cases and application services that orchestrate domain logic.

pub mod dto;
mod get_user_icon;

pub use get_user_icon::{ANONYMOUS_USER_ID, DEFAULT_ICON_FILE_NAME, GetUserIconUseCase};
