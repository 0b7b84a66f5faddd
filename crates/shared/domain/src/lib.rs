//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Projects, workspaces and the fixed enumerations exposed by the project API
//! live here and are shared by the service and gateway crates.

pub mod ability;
pub mod application_area;
pub mod constants;
pub mod error;
pub mod project;
pub mod workspace;

pub use ability::ProjectAbility;
pub use application_area::ApplicationArea;
pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use project::{Project, ProjectDraft};
pub use workspace::Workspace;
