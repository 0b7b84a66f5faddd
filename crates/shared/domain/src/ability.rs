//! Project abilities advertised by the environment.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Capability the current environment offers on projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectAbility {
    Import,
    Export,
    Publish,
}

impl ProjectAbility {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectAbility::Import => "import",
            ProjectAbility::Export => "export",
            ProjectAbility::Publish => "publish",
        }
    }
}

impl std::str::FromStr for ProjectAbility {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "import" => Ok(ProjectAbility::Import),
            "export" => Ok(ProjectAbility::Export),
            "publish" => Ok(ProjectAbility::Publish),
            other => Err(DomainError::UnknownAbility(other.to_string())),
        }
    }
}

impl std::fmt::Display for ProjectAbility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
