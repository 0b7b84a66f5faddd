//! Common utilities shared across the project API crates.
//!
//! This crate provides:
//! - Unified error handling with HTTP conversion
//! - The `{status, message, data}` response envelope
//! - Configuration structures

pub mod config;
pub mod error;
pub mod response;

pub use config::*;
pub use error::{AppError, AppResult, OptionExt};
pub use response::{Message, MessageStatus};
