//! In-memory project store with soft delete support.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use common::AppResult;
use domain::{DomainError, Project, ProjectDraft};

use super::ProjectRepository;

#[derive(Default)]
struct Inner {
    last_id: i64,
    projects: BTreeMap<i64, Project>,
}

impl Inner {
    fn name_taken(&self, workspace_id: i64, name: &str, except: Option<i64>) -> bool {
        self.projects.values().any(|p| {
            p.is_active()
                && p.workspace_id == workspace_id
                && p.name == name
                && Some(p.id) != except
        })
    }

    fn active_mut(&mut self, id: i64) -> AppResult<&mut Project> {
        self.projects
            .get_mut(&id)
            .filter(|p| p.is_active())
            .ok_or_else(|| DomainError::ProjectNotFound(id).into())
    }
}

/// Concrete ProjectRepository keeping projects in process memory.
///
/// Ids are assigned from a monotonically increasing counter and never reused.
#[derive(Default)]
pub struct ProjectStore {
    inner: RwLock<Inner>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProjectRepository for ProjectStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Project>> {
        let inner = self.inner.read().await;
        Ok(inner.projects.get(&id).filter(|p| p.is_active()).cloned())
    }

    async fn find_by_name(&self, workspace_id: i64, name: &str) -> AppResult<Option<Project>> {
        let inner = self.inner.read().await;
        Ok(inner
            .projects
            .values()
            .find(|p| p.is_active() && p.workspace_id == workspace_id && p.name == name)
            .cloned())
    }

    async fn list_by_workspace(&self, workspace_id: i64) -> AppResult<Vec<Project>> {
        let inner = self.inner.read().await;
        Ok(inner
            .projects
            .values()
            .rev()
            .filter(|p| p.is_active() && p.workspace_id == workspace_id)
            .cloned()
            .collect())
    }

    async fn create(&self, draft: ProjectDraft) -> AppResult<Project> {
        let mut inner = self.inner.write().await;
        if inner.name_taken(draft.workspace_id, &draft.name, None) {
            return Err(DomainError::DuplicateProjectName(draft.name).into());
        }

        inner.last_id += 1;
        let project = Project::from_draft(inner.last_id, draft);
        inner.projects.insert(project.id, project.clone());
        Ok(project)
    }

    async fn update(&self, id: i64, draft: ProjectDraft) -> AppResult<Project> {
        let mut inner = self.inner.write().await;
        let workspace_id = inner.active_mut(id)?.workspace_id;
        if inner.name_taken(workspace_id, &draft.name, Some(id)) {
            return Err(DomainError::DuplicateProjectName(draft.name).into());
        }

        let project = inner.active_mut(id)?;
        project.apply(draft);
        Ok(project.clone())
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let mut inner = self.inner.write().await;
        inner.active_mut(id)?.soft_delete();
        Ok(())
    }
}
