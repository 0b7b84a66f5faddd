//! Workspace (tenant) context.

use serde::{Deserialize, Serialize};

/// Workspace the caller is operating in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    /// Workspace identifier
    pub workspace_id: i64,
    /// Workspace display name
    pub workspace_name: String,
}

impl Workspace {
    pub fn new(workspace_id: i64, workspace_name: impl Into<String>) -> Self {
        Self {
            workspace_id,
            workspace_name: workspace_name.into(),
        }
    }
}

impl std::fmt::Display for Workspace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.workspace_name, self.workspace_id)
    }
}
