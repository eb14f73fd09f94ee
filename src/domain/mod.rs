//! Domain layer - Core business logic
//!
//! This module contains the identicon entities, the repository traits at
//! the encoder and account-store seams, and the generator service.

pub mod entities;
pub mod repositories;
pub mod services;
