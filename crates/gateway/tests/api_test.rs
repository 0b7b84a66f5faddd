//! Integration tests for the project API.
//!
//! Routes are exercised through the full router (session middleware,
//! validation, envelope) with mocked services, plus one flow against the
//! in-memory services.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::Utc;
use serde_json::{json, Value};
use tower::ServiceExt;

use common::AppError;
use domain::Workspace;
use gateway_lib::config::GatewayConfig;
use gateway_lib::routes::create_router;
use gateway_lib::session::SessionTokens;
use gateway_lib::state::AppState;
use project_service_lib::dto::{ProjectResponse, ProjectVo};
use project_service_lib::service::{MockFrameworkProjectService, MockProjectService};

const TEST_SECRET: &str = "test-secret-key-for-testing-only-32chars";
const BASE: &str = "/api/rest_j/v1/dss/framework/project";

// =============================================================================
// Helpers
// =============================================================================

fn test_config() -> GatewayConfig {
    let mut config = GatewayConfig::default();
    config.jwt.secret = TEST_SECRET.to_string();
    config
}

fn session_token(config: &GatewayConfig) -> String {
    SessionTokens::new(&config.jwt)
        .issue("alice", &Workspace::new(7, "bdp"))
        .unwrap()
}

/// Router over the given mocks and a token for alice in workspace bdp(7).
fn mocked_app(
    projects: MockProjectService,
    framework: MockFrameworkProjectService,
) -> (Router, String) {
    let config = test_config();
    let token = session_token(&config);
    let tokens = Arc::new(SessionTokens::new(&config.jwt));
    let state = AppState::new(Arc::new(projects), Arc::new(framework), tokens, config);
    (create_router(state), token)
}

fn idle_app() -> (Router, String) {
    mocked_app(MockProjectService::new(), MockFrameworkProjectService::new())
}

fn get(path: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(Method::GET).uri(path);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

fn post(path: &str, token: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(path)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn sample_project(id: i64, name: &str) -> ProjectResponse {
    ProjectResponse {
        id,
        name: name.to_string(),
        description: String::new(),
        workspace_id: 7,
        create_by: "alice".to_string(),
        application_area: None,
        business: None,
        product: None,
        edit_users: vec!["alice".to_string()],
        access_users: vec![],
        release_users: vec![],
        dev_process_list: vec![],
        orchestrator_mode_list: vec![],
        create_time: Utc::now(),
        update_time: Utc::now(),
        editable: true,
    }
}

// =============================================================================
// Health & Session
// =============================================================================

#[tokio::test]
async fn test_health_needs_no_session() {
    let (app, _) = idle_app();

    let (status, body) = send(app, get("/health", None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "project-gateway");
}

#[tokio::test]
async fn test_missing_token_requires_login() {
    let (app, _) = idle_app();

    let (status, body) = send(app, get(&format!("{}/getWorkSpaceStr", BASE), None)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["status"], -1);
    assert_eq!(body["message"], "Authentication required");
}

#[tokio::test]
async fn test_foreign_token_requires_login() {
    let (app, _) = idle_app();
    let foreign = SessionTokens::new(&common::JwtConfig {
        secret: "another-secret-key-for-testing-32chars!".to_string(),
        expiration_hours: 1,
    })
    .issue("alice", &Workspace::new(7, "bdp"))
    .unwrap();

    let (status, body) = send(
        app,
        get(&format!("{}/getProjectAbilities", BASE), Some(&foreign)),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["status"], -1);
    assert_eq!(body["message"], "Invalid or expired session");
}

#[tokio::test]
async fn test_workspace_str_serializes_session_workspace() {
    let (app, token) = idle_app();

    let (status, body) = send(app, get(&format!("{}/getWorkSpaceStr", BASE), Some(&token))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], 0);
    let workspace_str = body["data"]["workspaceStr"].as_str().unwrap();
    let workspace: Value = serde_json::from_str(workspace_str).unwrap();
    assert_eq!(workspace, json!({"workspaceId": 7, "workspaceName": "bdp"}));
}

// =============================================================================
// getAllProjects
// =============================================================================

#[tokio::test]
async fn test_get_all_projects_defaults_to_session_workspace() {
    let mut projects = MockProjectService::new();
    projects
        .expect_get_list_by_param()
        .withf(|query| query.workspace_id == Some(7) && query.username == "alice")
        .times(1)
        .returning(|_| Ok(vec![sample_project(1, "etl_daily")]));
    let (app, token) = mocked_app(projects, MockFrameworkProjectService::new());

    let (status, body) = send(
        app,
        post(&format!("{}/getAllProjects", BASE), &token, json!({})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], 0);
    assert_eq!(body["message"], "Workspace projects fetched");
    assert_eq!(body["data"]["projects"][0]["name"], "etl_daily");
    assert_eq!(body["data"]["projects"][0]["editable"], true);
}

#[tokio::test]
async fn test_get_all_projects_honours_body_workspace_not_username() {
    let mut projects = MockProjectService::new();
    projects
        .expect_get_list_by_param()
        .withf(|query| query.workspace_id == Some(3) && query.username == "alice")
        .times(1)
        .returning(|_| Ok(vec![]));
    let (app, token) = mocked_app(projects, MockFrameworkProjectService::new());

    let (status, body) = send(
        app,
        post(
            &format!("{}/getAllProjects", BASE),
            &token,
            json!({"workspaceId": 3, "username": "mallory"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["projects"], json!([]));
}

#[tokio::test]
async fn test_get_all_projects_hides_internal_errors() {
    let mut projects = MockProjectService::new();
    projects
        .expect_get_list_by_param()
        .returning(|_| Err(AppError::internal("connection pool exhausted")));
    let (app, token) = mocked_app(projects, MockFrameworkProjectService::new());

    let (status, body) = send(
        app,
        post(&format!("{}/getAllProjects", BASE), &token, json!({})),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["status"], 1);
    assert_eq!(body["message"], "Failed to get projects: An internal error occurred");
}

// =============================================================================
// createProject
// =============================================================================

#[tokio::test]
async fn test_create_project_returns_summary() {
    let mut framework = MockFrameworkProjectService::new();
    framework
        .expect_create_project()
        .withf(|request, username, workspace| {
            request.name == "etl_daily"
                && username.to_string() == "alice"
                && workspace.workspace_id == 7
        })
        .times(1)
        .returning(|request, username, workspace| {
            Ok(ProjectVo {
                id: 11,
                name: request.name,
                description: request.description,
                workspace_id: workspace.workspace_id,
                create_by: username.to_string(),
            })
        });
    let (app, token) = mocked_app(MockProjectService::new(), framework);

    let (status, body) = send(
        app,
        post(
            &format!("{}/createProject", BASE),
            &token,
            json!({
                "name": "etl_daily",
                "description": "daily loads",
                "applicationArea": "Analysis"
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], 0);
    assert_eq!(body["message"], "Project created");
    assert_eq!(body["data"]["project"]["id"], 11);
    assert_eq!(body["data"]["project"]["createBy"], "alice");
    assert_eq!(body["data"]["project"]["workspaceId"], 7);
}

#[tokio::test]
async fn test_create_project_rejects_invalid_name() {
    let (app, token) = idle_app();

    let (status, body) = send(
        app,
        post(&format!("{}/createProject", BASE), &token, json!({"name": "1st project"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 1);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("Project name must start with a letter"));
}

#[tokio::test]
async fn test_create_project_rejects_unknown_application_area() {
    let (app, token) = idle_app();

    let (status, body) = send(
        app,
        post(
            &format!("{}/createProject", BASE),
            &token,
            json!({"name": "etl", "applicationArea": "Finance"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 1);
    assert_eq!(body["message"], "Invalid request body");
}

#[tokio::test]
async fn test_wrongly_typed_field_gets_fixed_message() {
    let (app, token) = idle_app();

    let (status, body) = send(
        app,
        post(&format!("{}/deleteProject", BASE), &token, json!({"id": "abc"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 1);
    assert_eq!(body["message"], "Invalid request body");
    let message = body["message"].as_str().unwrap();
    assert!(!message.contains("i64"));
    assert!(!message.contains("deserialize"));
}

#[tokio::test]
async fn test_create_project_reports_duplicate_name() {
    let mut framework = MockFrameworkProjectService::new();
    framework
        .expect_create_project()
        .returning(|_, _, _| Err(AppError::conflict("Project name")));
    let (app, token) = mocked_app(MockProjectService::new(), framework);

    let (status, body) = send(
        app,
        post(&format!("{}/createProject", BASE), &token, json!({"name": "etl"})),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["status"], 1);
    assert_eq!(
        body["message"],
        "Failed to create project: Project name already exists"
    );
}

// =============================================================================
// modifyProject & deleteProject
// =============================================================================

#[tokio::test]
async fn test_modify_project_forbidden_for_non_editor() {
    let mut framework = MockFrameworkProjectService::new();
    framework
        .expect_modify_project()
        .withf(|request, _| request.id == 5 && request.name == "renamed")
        .returning(|_, _| Err(AppError::Forbidden));
    let (app, token) = mocked_app(MockProjectService::new(), framework);

    let (status, body) = send(
        app,
        post(
            &format!("{}/modifyProject", BASE),
            &token,
            json!({"id": 5, "name": "renamed"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["status"], 1);
    assert_eq!(body["message"], "Failed to modify project: Access denied");
}

#[tokio::test]
async fn test_delete_project_success() {
    let mut projects = MockProjectService::new();
    projects
        .expect_delete_project()
        .withf(|_, request, workspace| request.id == 5 && workspace.workspace_name == "bdp")
        .times(1)
        .returning(|_, _, _| Ok(()));
    let (app, token) = mocked_app(projects, MockFrameworkProjectService::new());

    let (status, body) = send(
        app,
        post(&format!("{}/deleteProject", BASE), &token, json!({"id": 5})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], 0);
    assert_eq!(body["message"], "Project deleted");
}

#[tokio::test]
async fn test_delete_project_failure_keeps_reason_out_of_message() {
    let mut projects = MockProjectService::new();
    projects
        .expect_delete_project()
        .returning(|_, _, _| Err(AppError::internal("scheduler still references project")));
    let (app, token) = mocked_app(projects, MockFrameworkProjectService::new());

    let (status, body) = send(
        app,
        post(&format!("{}/deleteProject", BASE), &token, json!({"id": 5})),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["status"], 1);
    assert_eq!(body["message"], "Failed to delete project");
}

// =============================================================================
// listApplicationAreas & getProjectAbilities
// =============================================================================

#[tokio::test]
async fn test_application_areas_follow_content_language() {
    let (app, token) = idle_app();
    let mut request = get(&format!("{}/listApplicationAreas", BASE), Some(&token));
    request
        .headers_mut()
        .insert(header::CONTENT_LANGUAGE, "zh-CN".parse().unwrap());

    let (status, body) = send(app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"]["applicationAreas"],
        json!(["运营", "分析", "产品", "风控", "营销", "其他"])
    );
}

#[tokio::test]
async fn test_application_areas_default_to_english() {
    let (app, token) = idle_app();

    let (_, body) = send(
        app,
        get(&format!("{}/listApplicationAreas", BASE), Some(&token)),
    )
    .await;

    assert_eq!(body["status"], 0);
    assert_eq!(
        body["data"]["applicationAreas"],
        json!(["Operation", "Analysis", "Product", "Risk Control", "Marketing", "Other"])
    );
}

#[tokio::test]
async fn test_project_abilities_listed() {
    let mut projects = MockProjectService::new();
    projects
        .expect_get_project_abilities()
        .returning(|_| Ok(vec!["import".to_string(), "export".to_string()]));
    let (app, token) = mocked_app(projects, MockFrameworkProjectService::new());

    let (status, body) = send(
        app,
        get(&format!("{}/getProjectAbilities", BASE), Some(&token)),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["projectAbilities"], json!(["import", "export"]));
}

#[tokio::test]
async fn test_project_abilities_failure_message() {
    let mut projects = MockProjectService::new();
    projects
        .expect_get_project_abilities()
        .returning(|_| Err(AppError::internal("config unreadable")));
    let (app, token) = mocked_app(projects, MockFrameworkProjectService::new());

    let (_, body) = send(
        app,
        get(&format!("{}/getProjectAbilities", BASE), Some(&token)),
    )
    .await;

    assert_eq!(body["status"], 1);
    assert_eq!(body["message"], "Failed to get project abilities");
}

// =============================================================================
// In-memory flow
// =============================================================================

#[tokio::test]
async fn test_project_lifecycle_against_in_memory_services() {
    let config = test_config();
    let token = session_token(&config);
    let app = gateway_lib::app(config).unwrap();

    let (_, created) = send(
        app.clone(),
        post(
            &format!("{}/createProject", BASE),
            &token,
            json!({"name": "etl_daily", "description": "daily loads"}),
        ),
    )
    .await;
    assert_eq!(created["status"], 0);
    let id = created["data"]["project"]["id"].as_i64().unwrap();

    let (_, duplicate) = send(
        app.clone(),
        post(&format!("{}/createProject", BASE), &token, json!({"name": "etl_daily"})),
    )
    .await;
    assert_eq!(duplicate["status"], 1);

    let (_, modified) = send(
        app.clone(),
        post(
            &format!("{}/modifyProject", BASE),
            &token,
            json!({"id": id, "name": "etl_hourly", "description": "hourly loads"}),
        ),
    )
    .await;
    assert_eq!(modified["status"], 0);

    let (_, listed) = send(
        app.clone(),
        post(&format!("{}/getAllProjects", BASE), &token, json!({})),
    )
    .await;
    assert_eq!(listed["data"]["projects"][0]["name"], "etl_hourly");
    assert_eq!(listed["data"]["projects"][0]["createBy"], "alice");

    let (_, deleted) = send(
        app.clone(),
        post(&format!("{}/deleteProject", BASE), &token, json!({"id": id})),
    )
    .await;
    assert_eq!(deleted["status"], 0);

    let (_, listed) = send(
        app,
        post(&format!("{}/getAllProjects", BASE), &token, json!({})),
    )
    .await;
    assert_eq!(listed["data"]["projects"], json!([]));
}
