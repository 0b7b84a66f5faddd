//! Project request objects with validation.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use validator::Validate;

use domain::{ApplicationArea, ProjectDraft, PROJECT_NAME_PATTERN};

static PROJECT_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(PROJECT_NAME_PATTERN).expect("project name pattern is a valid regex")
});

/// Project listing filter.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ProjectQueryRequest {
    /// Workspace to list; defaults to the caller's workspace
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    #[validate(range(min = 1, message = "workspaceId must be positive"))]
    pub workspace_id: Option<i64>,
    /// Restrict the result to a single project
    #[validate(range(min = 1, message = "Project id must be positive"))]
    pub id: Option<i64>,
    /// Set from the session, never read from the body
    #[serde(skip)]
    pub username: String,
}

/// Project creation request.
#[derive(Debug, Clone, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ProjectCreateRequest {
    /// Project name, unique within the workspace
    #[validate(
        length(min = 1, max = 150, message = "Project name must be 1 to 150 characters"),
        regex(
            path = *PROJECT_NAME_RE,
            message = "Project name must start with a letter and use letters, digits, '_' or '-'"
        )
    )]
    #[cfg_attr(feature = "openapi", schema(example = "etl_daily"))]
    pub name: String,
    #[validate(length(max = 2048, message = "Description must be at most 2048 characters"))]
    #[serde(default)]
    pub description: String,
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, example = "Analysis"))]
    pub application_area: Option<ApplicationArea>,
    pub business: Option<String>,
    pub product: Option<String>,
    #[serde(default)]
    pub edit_users: Vec<String>,
    #[serde(default)]
    pub access_users: Vec<String>,
    #[serde(default)]
    pub release_users: Vec<String>,
    #[serde(default)]
    pub dev_process_list: Vec<String>,
    #[serde(default)]
    pub orchestrator_mode_list: Vec<String>,
    /// Must match the caller's workspace when given
    pub workspace_id: Option<i64>,
}

impl ProjectCreateRequest {
    /// Draft owned by `username` in `workspace_id`.
    pub fn into_draft(self, username: &str, workspace_id: i64) -> ProjectDraft {
        ProjectDraft {
            name: self.name,
            description: self.description,
            workspace_id,
            create_by: username.to_string(),
            application_area: self.application_area,
            business: self.business,
            product: self.product,
            edit_users: self.edit_users,
            access_users: self.access_users,
            release_users: self.release_users,
            dev_process_list: self.dev_process_list,
            orchestrator_mode_list: self.orchestrator_mode_list,
        }
        .with_creator_as_editor()
    }
}

/// Project modification request. Replaces every editable attribute.
#[derive(Debug, Clone, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ProjectModifyRequest {
    #[validate(range(min = 1, message = "Project id must be positive"))]
    pub id: i64,
    #[validate(
        length(min = 1, max = 150, message = "Project name must be 1 to 150 characters"),
        regex(
            path = *PROJECT_NAME_RE,
            message = "Project name must start with a letter and use letters, digits, '_' or '-'"
        )
    )]
    pub name: String,
    #[validate(length(max = 2048, message = "Description must be at most 2048 characters"))]
    #[serde(default)]
    pub description: String,
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>))]
    pub application_area: Option<ApplicationArea>,
    pub business: Option<String>,
    pub product: Option<String>,
    #[serde(default)]
    pub edit_users: Vec<String>,
    #[serde(default)]
    pub access_users: Vec<String>,
    #[serde(default)]
    pub release_users: Vec<String>,
    #[serde(default)]
    pub dev_process_list: Vec<String>,
    #[serde(default)]
    pub orchestrator_mode_list: Vec<String>,
}

impl ProjectModifyRequest {
    /// Draft keeping the original creator and workspace.
    pub fn into_draft(self, create_by: &str, workspace_id: i64) -> ProjectDraft {
        ProjectDraft {
            name: self.name,
            description: self.description,
            workspace_id,
            create_by: create_by.to_string(),
            application_area: self.application_area,
            business: self.business,
            product: self.product,
            edit_users: self.edit_users,
            access_users: self.access_users,
            release_users: self.release_users,
            dev_process_list: self.dev_process_list,
            orchestrator_mode_list: self.orchestrator_mode_list,
        }
        .with_creator_as_editor()
    }
}

/// Project deletion request.
#[derive(Debug, Clone, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ProjectDeleteRequest {
    #[validate(range(min = 1, message = "Project id must be positive"))]
    pub id: i64,
}
