//! HTTP handlers.

pub mod health_handler;
pub mod project_handler;

pub use health_handler::health_routes;
pub use project_handler::project_routes;
