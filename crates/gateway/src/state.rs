//! Application state for dependency injection.

use std::sync::Arc;

use project_service_lib::service::{FrameworkProjectService, ProjectService};

use crate::config::GatewayConfig;
use crate::session::SessionTokens;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub project_service: Arc<dyn ProjectService>,
    pub framework_project_service: Arc<dyn FrameworkProjectService>,
    pub tokens: Arc<SessionTokens>,
    pub config: GatewayConfig,
}

impl AppState {
    /// Create new app state.
    pub fn new(
        project_service: Arc<dyn ProjectService>,
        framework_project_service: Arc<dyn FrameworkProjectService>,
        tokens: Arc<SessionTokens>,
        config: GatewayConfig,
    ) -> Self {
        Self {
            project_service,
            framework_project_service,
            tokens,
            config,
        }
    }
}
