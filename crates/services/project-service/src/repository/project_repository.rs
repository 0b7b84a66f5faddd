//! Project repository seam.

use async_trait::async_trait;

use common::AppResult;
use domain::{Project, ProjectDraft};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Project repository trait for dependency injection.
///
/// All query methods exclude soft-deleted projects.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Find an active project by ID
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Project>>;

    /// Find an active project by name within a workspace
    async fn find_by_name(&self, workspace_id: i64, name: &str) -> AppResult<Option<Project>>;

    /// List active projects of a workspace, newest first
    async fn list_by_workspace(&self, workspace_id: i64) -> AppResult<Vec<Project>>;

    /// Create a new project. Fails with a conflict if the name is taken
    /// in the draft's workspace.
    async fn create(&self, draft: ProjectDraft) -> AppResult<Project>;

    /// Rewrite the editable attributes of an active project
    async fn update(&self, id: i64, draft: ProjectDraft) -> AppResult<Project>;

    /// Soft delete a project by ID
    async fn delete(&self, id: i64) -> AppResult<()>;
}
