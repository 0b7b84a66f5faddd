//! Middleware for session extraction.

mod auth;

pub use auth::{auth_middleware, CurrentUser};
