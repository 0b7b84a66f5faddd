//! Framework project service - creation and modification of projects.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppError, AppResult, OptionExt};
use domain::{DomainError, Workspace};

use crate::dto::{ProjectCreateRequest, ProjectModifyRequest, ProjectVo};
use crate::repository::ProjectRepository;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Framework project service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait FrameworkProjectService: Send + Sync {
    /// Create a project in `workspace` owned by `username`
    async fn create_project(
        &self,
        request: ProjectCreateRequest,
        username: &str,
        workspace: &Workspace,
    ) -> AppResult<ProjectVo>;

    /// Rewrite a project's attributes on behalf of `username`
    async fn modify_project(&self, request: ProjectModifyRequest, username: &str)
        -> AppResult<()>;
}

/// Concrete implementation of FrameworkProjectService using repository.
pub struct FrameworkProjectManager {
    repo: Arc<dyn ProjectRepository>,
}

impl FrameworkProjectManager {
    pub fn new(repo: Arc<dyn ProjectRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl FrameworkProjectService for FrameworkProjectManager {
    async fn create_project(
        &self,
        request: ProjectCreateRequest,
        username: &str,
        workspace: &Workspace,
    ) -> AppResult<ProjectVo> {
        if let Some(requested) = request.workspace_id {
            if requested != workspace.workspace_id {
                return Err(AppError::validation(
                    "workspaceId does not match the current workspace",
                ));
            }
        }

        if self
            .repo
            .find_by_name(workspace.workspace_id, &request.name)
            .await?
            .is_some()
        {
            return Err(DomainError::DuplicateProjectName(request.name).into());
        }

        let project = self
            .repo
            .create(request.into_draft(username, workspace.workspace_id))
            .await?;

        tracing::info!(
            "Project {} ({}) created in workspace {} by {}",
            project.id,
            project.name,
            workspace,
            username
        );
        Ok(ProjectVo::from(project))
    }

    async fn modify_project(&self, request: ProjectModifyRequest, username: &str) -> AppResult<()> {
        let project = self.repo.find_by_id(request.id).await?.ok_or_not_found()?;

        project.check_editable_by(username)?;

        if request.name != project.name {
            let taken = self
                .repo
                .find_by_name(project.workspace_id, &request.name)
                .await?
                .is_some_and(|other| other.id != project.id);
            if taken {
                return Err(DomainError::DuplicateProjectName(request.name).into());
            }
        }

        let draft = request.into_draft(&project.create_by, project.workspace_id);
        self.repo.update(project.id, draft).await?;
        tracing::info!("Project {} modified by {}", project.id, username);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProjectRepository;
    use domain::{Project, ProjectDraft};
    use mockall::predicate::eq;

    fn create_request(name: &str) -> ProjectCreateRequest {
        serde_json::from_value(serde_json::json!({ "name": name })).unwrap()
    }

    fn modify_request(id: i64, name: &str) -> ProjectModifyRequest {
        serde_json::from_value(serde_json::json!({ "id": id, "name": name })).unwrap()
    }

    fn existing(id: i64, name: &str, owner: &str) -> Project {
        Project::from_draft(
            id,
            ProjectDraft {
                name: name.to_string(),
                workspace_id: 7,
                create_by: owner.to_string(),
                ..Default::default()
            }
            .with_creator_as_editor(),
        )
    }

    #[tokio::test]
    async fn create_assigns_workspace_and_owner() {
        let mut repo = MockProjectRepository::new();
        repo.expect_find_by_name()
            .with(eq(7), eq("etl"))
            .returning(|_, _| Ok(None));
        repo.expect_create()
            .withf(|d| d.workspace_id == 7 && d.create_by == "alice" && d.edit_users == ["alice"])
            .returning(|d| Ok(Project::from_draft(11, d)));

        let vo = FrameworkProjectManager::new(Arc::new(repo))
            .create_project(create_request("etl"), "alice", &Workspace::new(7, "ws"))
            .await
            .unwrap();

        assert_eq!(vo.id, 11);
        assert_eq!(vo.workspace_id, 7);
        assert_eq!(vo.create_by, "alice");
    }

    #[tokio::test]
    async fn create_rejects_duplicate_name() {
        let mut repo = MockProjectRepository::new();
        repo.expect_find_by_name()
            .returning(|_, name| Ok(Some(existing(1, name, "bob"))));
        repo.expect_create().never();

        let err = FrameworkProjectManager::new(Arc::new(repo))
            .create_project(create_request("etl"), "alice", &Workspace::new(7, "ws"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn create_rejects_foreign_workspace() {
        let mut request = create_request("etl");
        request.workspace_id = Some(99);

        let err = FrameworkProjectManager::new(Arc::new(MockProjectRepository::new()))
            .create_project(request, "alice", &Workspace::new(7, "ws"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn modify_requires_edit_permission() {
        let mut repo = MockProjectRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(existing(id, "etl", "alice"))));
        repo.expect_update().never();

        let err = FrameworkProjectManager::new(Arc::new(repo))
            .modify_project(modify_request(1, "etl"), "mallory")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Forbidden));
    }

    #[tokio::test]
    async fn modify_missing_project_is_not_found() {
        let mut repo = MockProjectRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let err = FrameworkProjectManager::new(Arc::new(repo))
            .modify_project(modify_request(1, "etl"), "alice")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound));
    }

    #[tokio::test]
    async fn modify_rename_keeps_owner() {
        let mut repo = MockProjectRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(existing(id, "etl", "alice"))));
        repo.expect_find_by_name()
            .with(eq(7), eq("etl_v2"))
            .returning(|_, _| Ok(None));
        repo.expect_update()
            .withf(|id, d| *id == 1 && d.create_by == "alice" && d.name == "etl_v2")
            .times(1)
            .returning(|id, d| Ok(Project::from_draft(id, d)));

        FrameworkProjectManager::new(Arc::new(repo))
            .modify_project(modify_request(1, "etl_v2"), "alice")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn modify_rename_onto_other_project_conflicts() {
        let mut repo = MockProjectRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(existing(id, "etl", "alice"))));
        repo.expect_find_by_name()
            .with(eq(7), eq("etl_v2"))
            .returning(|_, name| Ok(Some(existing(2, name, "bob"))));
        repo.expect_update().never();

        let err = FrameworkProjectManager::new(Arc::new(repo))
            .modify_project(modify_request(1, "etl_v2"), "alice")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(err.user_message(), "Project name already exists");
    }

    #[tokio::test]
    async fn modify_rename_matching_itself_is_allowed() {
        let mut repo = MockProjectRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(existing(id, "etl", "alice"))));
        repo.expect_find_by_name()
            .returning(|_, name| Ok(Some(existing(1, name, "alice"))));
        repo.expect_update()
            .withf(|id, d| *id == 1 && d.name == "etl_v2")
            .times(1)
            .returning(|id, d| Ok(Project::from_draft(id, d)));

        FrameworkProjectManager::new(Arc::new(repo))
            .modify_project(modify_request(1, "etl_v2"), "alice")
            .await
            .unwrap();
    }
}
