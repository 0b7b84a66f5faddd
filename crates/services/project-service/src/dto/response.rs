//! Project response objects (safe to return to the client).

use chrono::{DateTime, Utc};
use serde::Serialize;

use domain::{ApplicationArea, Project};

/// Project as listed for a given caller.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ProjectResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub workspace_id: i64,
    pub create_by: String,
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>))]
    pub application_area: Option<ApplicationArea>,
    pub business: Option<String>,
    pub product: Option<String>,
    pub edit_users: Vec<String>,
    pub access_users: Vec<String>,
    pub release_users: Vec<String>,
    pub dev_process_list: Vec<String>,
    pub orchestrator_mode_list: Vec<String>,
    pub create_time: DateTime<Utc>,
    pub update_time: DateTime<Utc>,
    /// Whether the caller may modify the project
    pub editable: bool,
}

impl ProjectResponse {
    /// View of `project` as seen by `username`.
    pub fn for_user(project: Project, username: &str) -> Self {
        let editable = project.is_editable_by(username);
        Self {
            id: project.id,
            name: project.name,
            description: project.description,
            workspace_id: project.workspace_id,
            create_by: project.create_by,
            application_area: project.application_area,
            business: project.business,
            product: project.product,
            edit_users: project.edit_users,
            access_users: project.access_users,
            release_users: project.release_users,
            dev_process_list: project.dev_process_list,
            orchestrator_mode_list: project.orchestrator_mode_list,
            create_time: project.created_at,
            update_time: project.updated_at,
            editable,
        }
    }
}

/// Summary returned after creating a project.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ProjectVo {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub workspace_id: i64,
    pub create_by: String,
}

impl From<Project> for ProjectVo {
    fn from(project: Project) -> Self {
        Self {
            id: project.id,
            name: project.name,
            description: project.description,
            workspace_id: project.workspace_id,
            create_by: project.create_by,
        }
    }
}
