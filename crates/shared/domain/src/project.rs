//! Project domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application_area::ApplicationArea;
use crate::error::{DomainError, DomainResult};

/// Project domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub workspace_id: i64,
    /// Username of the creator
    pub create_by: String,
    pub application_area: Option<ApplicationArea>,
    pub business: Option<String>,
    pub product: Option<String>,
    pub edit_users: Vec<String>,
    pub access_users: Vec<String>,
    pub release_users: Vec<String>,
    pub dev_process_list: Vec<String>,
    pub orchestrator_mode_list: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Soft delete timestamp (None = active, Some = deleted)
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Project {
    /// Materialize a draft under the given id.
    pub fn from_draft(id: i64, draft: ProjectDraft) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: draft.name,
            description: draft.description,
            workspace_id: draft.workspace_id,
            create_by: draft.create_by,
            application_area: draft.application_area,
            business: draft.business,
            product: draft.product,
            edit_users: draft.edit_users,
            access_users: draft.access_users,
            release_users: draft.release_users,
            dev_process_list: draft.dev_process_list,
            orchestrator_mode_list: draft.orchestrator_mode_list,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Creator or a listed editor may change the project.
    pub fn is_editable_by(&self, username: &str) -> bool {
        self.create_by == username || self.edit_users.iter().any(|u| u == username)
    }

    /// Any project role grants visibility.
    pub fn is_visible_to(&self, username: &str) -> bool {
        self.is_editable_by(username)
            || self.access_users.iter().any(|u| u == username)
            || self.release_users.iter().any(|u| u == username)
    }

    pub fn check_editable_by(&self, username: &str) -> DomainResult<()> {
        if self.is_editable_by(username) {
            Ok(())
        } else {
            Err(DomainError::NotEditor {
                user: username.to_string(),
                project_id: self.id,
            })
        }
    }

    /// Deletion is reserved to the creator.
    pub fn check_deletable_by(&self, username: &str) -> DomainResult<()> {
        if self.create_by == username {
            Ok(())
        } else {
            Err(DomainError::NotCreator {
                user: username.to_string(),
                project_id: self.id,
            })
        }
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    pub fn is_active(&self) -> bool {
        self.deleted_at.is_none()
    }

    /// Soft delete the project
    pub fn soft_delete(&mut self) {
        let now = Utc::now();
        self.deleted_at = Some(now);
        self.updated_at = now;
    }

    /// Replace the editable attributes with those of `draft`.
    ///
    /// Id, workspace, creator and creation time are kept.
    pub fn apply(&mut self, draft: ProjectDraft) {
        self.name = draft.name;
        self.description = draft.description;
        self.application_area = draft.application_area;
        self.business = draft.business;
        self.product = draft.product;
        self.edit_users = draft.edit_users;
        self.access_users = draft.access_users;
        self.release_users = draft.release_users;
        self.dev_process_list = draft.dev_process_list;
        self.orchestrator_mode_list = draft.orchestrator_mode_list;
        self.ensure_creator_can_edit();
        self.updated_at = Utc::now();
    }

    fn ensure_creator_can_edit(&mut self) {
        if !self.edit_users.contains(&self.create_by) {
            self.edit_users.insert(0, self.create_by.clone());
        }
    }
}

/// Attributes of a project that is about to be created or rewritten.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProjectDraft {
    pub name: String,
    pub description: String,
    pub workspace_id: i64,
    pub create_by: String,
    pub application_area: Option<ApplicationArea>,
    pub business: Option<String>,
    pub product: Option<String>,
    pub edit_users: Vec<String>,
    pub access_users: Vec<String>,
    pub release_users: Vec<String>,
    pub dev_process_list: Vec<String>,
    pub orchestrator_mode_list: Vec<String>,
}

impl ProjectDraft {
    /// Make sure the creator is listed as an editor, ahead of the others.
    pub fn with_creator_as_editor(mut self) -> Self {
        if !self.edit_users.contains(&self.create_by) {
            self.edit_users.insert(0, self.create_by.clone());
        }
        self
    }
}
