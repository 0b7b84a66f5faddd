//! Domain-level constants.

// =============================================================================
// Projects
// =============================================================================

/// Allowed shape of a project name: a leading letter, then letters, digits, `_` or `-`
pub const PROJECT_NAME_PATTERN: &str = r"^[a-zA-Z][a-zA-Z0-9_\-]*$";

// =============================================================================
// Localisation
// =============================================================================

/// Language tag that selects the Chinese labels
pub const LANG_ZH_CN: &str = "zh-CN";

// =============================================================================
// Authentication
// =============================================================================

/// Default session token expiration in hours
pub const DEFAULT_JWT_EXPIRATION_HOURS: i64 = 24;

/// Minimum JWT secret length (security requirement)
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// Authorization header prefix for Bearer tokens
pub const BEARER_TOKEN_PREFIX: &str = "Bearer ";
