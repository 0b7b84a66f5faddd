//! Project service configuration.

use std::env;

use domain::ProjectAbility;

/// Project service configuration.
#[derive(Debug, Clone)]
pub struct ProjectServiceConfig {
    /// Abilities this environment offers (import, export, publish)
    pub abilities: Vec<ProjectAbility>,
}

impl ProjectServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            abilities: env::var("PROJECT_ABILITIES")
                .map(|raw| parse_abilities(&raw))
                .unwrap_or_else(|_| default_abilities()),
        }
    }
}

impl Default for ProjectServiceConfig {
    fn default() -> Self {
        Self {
            abilities: default_abilities(),
        }
    }
}

fn default_abilities() -> Vec<ProjectAbility> {
    vec![
        ProjectAbility::Import,
        ProjectAbility::Export,
        ProjectAbility::Publish,
    ]
}

/// Parse a comma-separated ability list, skipping unknown entries.
fn parse_abilities(raw: &str) -> Vec<ProjectAbility> {
    let mut abilities = Vec::new();
    for item in raw.split(',').filter(|s| !s.trim().is_empty()) {
        match item.parse::<ProjectAbility>() {
            Ok(ability) if !abilities.contains(&ability) => abilities.push(ability),
            Ok(_) => {}
            Err(e) => tracing::warn!("Ignoring PROJECT_ABILITIES entry: {}", e),
        }
    }
    abilities
}
