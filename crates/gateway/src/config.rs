//! Gateway configuration.

use std::env;

use common::{AppError, AppResult, JwtConfig, ServiceConfig};
use domain::{DEFAULT_JWT_EXPIRATION_HOURS, MIN_JWT_SECRET_LENGTH};
use project_service_lib::config::ProjectServiceConfig;

/// Prefix the front end puts in front of every backend route
pub const DEFAULT_API_PREFIX: &str = "/api/rest_j/v1";

/// Base path of the project controller, below the API prefix
pub const PROJECT_BASE_PATH: &str = "/dss/framework/project";

const DEV_JWT_SECRET: &str = "dev-secret-key-minimum-32-chars!!";

/// Gateway configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Bind address and service name
    pub service: ServiceConfig,
    /// Session token settings
    pub jwt: JwtConfig,
    /// Route prefix, e.g. `/api/rest_j/v1`
    pub api_prefix: String,
    /// Project service settings
    pub project: ProjectServiceConfig,
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set, using insecure default for development");
            DEV_JWT_SECRET.to_string()
        });

        Self {
            service: ServiceConfig {
                service_name: "project-gateway".to_string(),
                host: env::var("GATEWAY_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("GATEWAY_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(3000),
            },
            jwt: JwtConfig {
                secret,
                expiration_hours: env::var("JWT_EXPIRATION_HOURS")
                    .ok()
                    .and_then(|h| h.parse().ok())
                    .unwrap_or(DEFAULT_JWT_EXPIRATION_HOURS),
            },
            api_prefix: normalize_prefix(
                &env::var("API_PREFIX").unwrap_or_else(|_| DEFAULT_API_PREFIX.to_string()),
            ),
            project: ProjectServiceConfig::from_env(),
        }
    }

    /// Reject settings the gateway cannot run with.
    pub fn validate(&self) -> AppResult<()> {
        if !self.jwt.is_secure() {
            return Err(AppError::validation(format!(
                "JWT_SECRET must be at least {} characters long",
                MIN_JWT_SECRET_LENGTH
            )));
        }
        if self.jwt.expiration_hours <= 0 {
            return Err(AppError::validation("JWT_EXPIRATION_HOURS must be positive"));
        }
        Ok(())
    }

    /// Full path the project routes are mounted at.
    pub fn project_base_path(&self) -> String {
        format!("{}{}", self.api_prefix, PROJECT_BASE_PATH)
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                service_name: "project-gateway".to_string(),
                ..ServiceConfig::default()
            },
            jwt: JwtConfig {
                secret: DEV_JWT_SECRET.to_string(),
                expiration_hours: DEFAULT_JWT_EXPIRATION_HOURS,
            },
            api_prefix: DEFAULT_API_PREFIX.to_string(),
            project: ProjectServiceConfig::default(),
        }
    }
}

/// `"api/v1/"` -> `"/api/v1"`, `"/"` -> `""`
fn normalize_prefix(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}
