//! OpenAPI documentation.

use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use common::Message;
use domain::Workspace;
use project_service_lib::dto::{
    ProjectCreateRequest, ProjectDeleteRequest, ProjectModifyRequest, ProjectQueryRequest,
    ProjectResponse, ProjectVo,
};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::project_handler::get_workspace_str,
        crate::handlers::project_handler::get_all_projects,
        crate::handlers::project_handler::create_project,
        crate::handlers::project_handler::modify_project,
        crate::handlers::project_handler::delete_project,
        crate::handlers::project_handler::list_application_areas,
        crate::handlers::project_handler::get_project_abilities,
    ),
    components(
        schemas(
            Message,
            Workspace,
            ProjectQueryRequest,
            ProjectCreateRequest,
            ProjectModifyRequest,
            ProjectDeleteRequest,
            ProjectResponse,
            ProjectVo,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Projects", description = "Workspace project management endpoints"),
    )
)]
pub struct ApiDoc;

/// Security scheme modifier.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
