//! Project handlers.
//!
//! Each handler reads the session, calls one service method and wraps the
//! outcome in the `{status, message, data}` envelope. Failures are logged
//! here and never leak internal error text to the caller.

use axum::{
    extract::{Extension, State},
    http::{header::CONTENT_LANGUAGE, HeaderMap},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use serde_json::Value;

use common::{AppError, AppResult, Message};
use domain::ApplicationArea;
use project_service_lib::dto::{
    ProjectCreateRequest, ProjectDeleteRequest, ProjectModifyRequest, ProjectQueryRequest,
};

use crate::extractors::ValidatedJson;
use crate::middleware::CurrentUser;
use crate::state::AppState;

/// Create project routes
pub fn project_routes() -> Router<AppState> {
    Router::new()
        .route("/getWorkSpaceStr", get(get_workspace_str))
        .route("/getAllProjects", post(get_all_projects))
        .route("/createProject", post(create_project))
        .route("/modifyProject", post(modify_project))
        .route("/deleteProject", post(delete_project))
        .route("/listApplicationAreas", get(list_application_areas))
        .route("/getProjectAbilities", get(get_project_abilities))
}

fn to_json<T: Serialize>(value: &T) -> AppResult<Value> {
    Ok(serde_json::to_value(value)?)
}

/// Workspace of the current session, serialized as a JSON string
#[utoipa::path(
    get,
    path = "/api/rest_j/v1/dss/framework/project/getWorkSpaceStr",
    tag = "Projects",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "`data.workspaceStr` holds the workspace", body = Message),
        (status = 401, description = "No valid session", body = Message)
    )
)]
pub async fn get_workspace_str(Extension(current_user): Extension<CurrentUser>) -> Response {
    match serde_json::to_string(&current_user.workspace) {
        Ok(workspace) => Message::ok("")
            .data("workspaceStr", workspace)
            .into_response(),
        Err(e) => {
            tracing::error!(
                "Failed to serialize workspace {} for user {}: {}",
                current_user.workspace,
                current_user.username,
                e
            );
            AppError::from(e).into_envelope("Failed to get workspace")
        }
    }
}

/// List the projects of a workspace visible to the caller
#[utoipa::path(
    post,
    path = "/api/rest_j/v1/dss/framework/project/getAllProjects",
    tag = "Projects",
    security(("bearer_auth" = [])),
    request_body = ProjectQueryRequest,
    responses(
        (status = 200, description = "`data.projects` lists the projects", body = Message),
        (status = 400, description = "Invalid request", body = Message),
        (status = 401, description = "No valid session", body = Message)
    )
)]
pub async fn get_all_projects(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(mut query): ValidatedJson<ProjectQueryRequest>,
) -> Response {
    query.username = current_user.username.clone();
    if query.workspace_id.is_none() {
        query.workspace_id = Some(current_user.workspace.workspace_id);
    }
    let workspace_id = query.workspace_id;

    let result = state
        .project_service
        .get_list_by_param(query)
        .await
        .and_then(|projects| to_json(&projects));

    match result {
        Ok(projects) => Message::ok("Workspace projects fetched")
            .data("projects", projects)
            .into_response(),
        Err(e) => {
            tracing::error!(
                "Failed to list projects of workspace {:?} for user {}: [{}] {}",
                workspace_id,
                current_user.username,
                e.code(),
                e
            );
            e.into_envelope("Failed to get projects")
        }
    }
}

/// Create a project in the caller's workspace
#[utoipa::path(
    post,
    path = "/api/rest_j/v1/dss/framework/project/createProject",
    tag = "Projects",
    security(("bearer_auth" = [])),
    request_body = ProjectCreateRequest,
    responses(
        (status = 200, description = "`data.project` holds the created project", body = Message),
        (status = 400, description = "Invalid request", body = Message),
        (status = 401, description = "No valid session", body = Message),
        (status = 409, description = "Project name already taken", body = Message)
    )
)]
pub async fn create_project(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ProjectCreateRequest>,
) -> Response {
    let name = request.name.clone();

    let result = state
        .framework_project_service
        .create_project(request, &current_user.username, &current_user.workspace)
        .await
        .and_then(|project| to_json(&project));

    match result {
        Ok(project) => Message::ok("Project created")
            .data("project", project)
            .into_response(),
        Err(e) => {
            tracing::error!(
                "Failed to create project {} for user {}: [{}] {}",
                name,
                current_user.username,
                e.code(),
                e
            );
            e.into_envelope("Failed to create project")
        }
    }
}

/// Modify a project the caller may edit
#[utoipa::path(
    post,
    path = "/api/rest_j/v1/dss/framework/project/modifyProject",
    tag = "Projects",
    security(("bearer_auth" = [])),
    request_body = ProjectModifyRequest,
    responses(
        (status = 200, description = "Project modified", body = Message),
        (status = 400, description = "Invalid request", body = Message),
        (status = 401, description = "No valid session", body = Message),
        (status = 403, description = "Caller may not edit the project", body = Message),
        (status = 404, description = "Project not found", body = Message)
    )
)]
pub async fn modify_project(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ProjectModifyRequest>,
) -> Response {
    let name = request.name.clone();

    match state
        .framework_project_service
        .modify_project(request, &current_user.username)
        .await
    {
        Ok(()) => Message::ok("Project modified").into_response(),
        Err(e) => {
            tracing::error!(
                "Failed to modify project {} for user {}: [{}] {}",
                name,
                current_user.username,
                e.code(),
                e
            );
            e.into_envelope("Failed to modify project")
        }
    }
}

/// Delete a project the caller created
#[utoipa::path(
    post,
    path = "/api/rest_j/v1/dss/framework/project/deleteProject",
    tag = "Projects",
    security(("bearer_auth" = [])),
    request_body = ProjectDeleteRequest,
    responses(
        (status = 200, description = "Project deleted", body = Message),
        (status = 400, description = "Invalid request", body = Message),
        (status = 401, description = "No valid session", body = Message),
        (status = 403, description = "Caller did not create the project", body = Message),
        (status = 404, description = "Project not found", body = Message)
    )
)]
pub async fn delete_project(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ProjectDeleteRequest>,
) -> Response {
    let id = request.id;

    match state
        .project_service
        .delete_project(&current_user.username, request, &current_user.workspace)
        .await
    {
        Ok(()) => Message::ok("Project deleted").into_response(),
        Err(e) => {
            tracing::error!(
                "Failed to delete project {} for user {}: [{}] {}",
                id,
                current_user.username,
                e.code(),
                e
            );
            // The reason stays in the log
            Message::error("Failed to delete project").with_status(e.status())
        }
    }
}

/// Application areas labelled in the request's `Content-Language`
#[utoipa::path(
    get,
    path = "/api/rest_j/v1/dss/framework/project/listApplicationAreas",
    tag = "Projects",
    security(("bearer_auth" = [])),
    params(
        ("Content-Language" = Option<String>, Header, description = "`zh-CN` for Chinese labels")
    ),
    responses(
        (status = 200, description = "`data.applicationAreas` lists the labels", body = Message),
        (status = 401, description = "No valid session", body = Message)
    )
)]
pub async fn list_application_areas(headers: HeaderMap) -> Response {
    let lang = headers
        .get(CONTENT_LANGUAGE)
        .and_then(|h| h.to_str().ok());

    Message::ok("")
        .data("applicationAreas", ApplicationArea::labels(lang))
        .into_response()
}

/// Abilities (import, export, publish) of this environment
#[utoipa::path(
    get,
    path = "/api/rest_j/v1/dss/framework/project/getProjectAbilities",
    tag = "Projects",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "`data.projectAbilities` lists the abilities", body = Message),
        (status = 401, description = "No valid session", body = Message)
    )
)]
pub async fn get_project_abilities(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
) -> Response {
    match state
        .project_service
        .get_project_abilities(&current_user.username)
        .await
    {
        Ok(abilities) => Message::ok("Project abilities fetched")
            .data("projectAbilities", abilities)
            .into_response(),
        Err(e) => {
            tracing::error!(
                "Failed to get project abilities for user {}: [{}] {}",
                current_user.username,
                e.code(),
                e
            );
            Message::error("Failed to get project abilities").with_status(e.status())
        }
    }
}
