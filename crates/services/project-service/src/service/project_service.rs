//! Project service - listing, deletion and environment abilities.
//!
//! SOLID (SRP): Handles project queries and removal only; creation and
//! modification live in the framework project service.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppError, AppResult, OptionExt};
use domain::{ProjectAbility, Workspace};

use crate::dto::{ProjectDeleteRequest, ProjectQueryRequest, ProjectResponse};
use crate::repository::ProjectRepository;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Project service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProjectService: Send + Sync {
    /// Projects of the query's workspace visible to the query's user
    async fn get_list_by_param(&self, query: ProjectQueryRequest)
        -> AppResult<Vec<ProjectResponse>>;

    /// Soft delete a project of `workspace` owned by `username`
    async fn delete_project(
        &self,
        username: &str,
        request: ProjectDeleteRequest,
        workspace: &Workspace,
    ) -> AppResult<()>;

    /// Abilities (import, export, publish) offered to `username`
    async fn get_project_abilities(&self, username: &str) -> AppResult<Vec<String>>;
}

/// Concrete implementation of ProjectService using repository.
pub struct ProjectManager {
    repo: Arc<dyn ProjectRepository>,
    abilities: Vec<ProjectAbility>,
}

impl ProjectManager {
    pub fn new(repo: Arc<dyn ProjectRepository>, abilities: Vec<ProjectAbility>) -> Self {
        Self { repo, abilities }
    }
}

#[async_trait]
impl ProjectService for ProjectManager {
    async fn get_list_by_param(
        &self,
        query: ProjectQueryRequest,
    ) -> AppResult<Vec<ProjectResponse>> {
        let workspace_id = query
            .workspace_id
            .ok_or_else(|| AppError::validation("workspaceId is required"))?;

        let projects = self
            .repo
            .list_by_workspace(workspace_id)
            .await?
            .into_iter()
            .filter(|p| query.id.map_or(true, |id| p.id == id))
            .filter(|p| p.is_visible_to(&query.username))
            .map(|p| ProjectResponse::for_user(p, &query.username))
            .collect();

        Ok(projects)
    }

    async fn delete_project(
        &self,
        username: &str,
        request: ProjectDeleteRequest,
        workspace: &Workspace,
    ) -> AppResult<()> {
        let project = self
            .repo
            .find_by_id(request.id)
            .await?
            .filter(|p| p.workspace_id == workspace.workspace_id)
            .ok_or_not_found()?;

        if let Err(e) = project.check_deletable_by(username) {
            tracing::warn!("Delete refused: {} (owner {})", e, project.create_by);
            return Err(e.into());
        }

        self.repo.delete(project.id).await?;
        tracing::info!(
            "Project {} ({}) deleted from workspace {} by {}",
            project.id,
            project.name,
            workspace,
            username
        );
        Ok(())
    }

    async fn get_project_abilities(&self, username: &str) -> AppResult<Vec<String>> {
        tracing::debug!("Resolving project abilities for {}", username);
        Ok(self.abilities.iter().map(ToString::to_string).collect())
    }
}
