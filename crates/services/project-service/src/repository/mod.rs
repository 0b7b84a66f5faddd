//! Repository layer for project storage.

mod memory;
mod project_repository;

pub use memory::ProjectStore;
pub use project_repository::ProjectRepository;

#[cfg(any(test, feature = "test-utils"))]
pub use project_repository::MockProjectRepository;
