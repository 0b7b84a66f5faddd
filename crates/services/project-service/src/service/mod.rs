//! Service layer - project use cases.

mod framework_project_service;
mod project_service;

pub use framework_project_service::{FrameworkProjectManager, FrameworkProjectService};
pub use project_service::{ProjectManager, ProjectService};

#[cfg(any(test, feature = "test-utils"))]
pub use framework_project_service::MockFrameworkProjectService;
#[cfg(any(test, feature = "test-utils"))]
pub use project_service::MockProjectService;
