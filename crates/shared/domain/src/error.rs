//! Project rule violations.

use thiserror::Error;

/// Errors raised by the project domain model.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown application area '{0}'")]
    UnknownApplicationArea(String),

    #[error("Unknown project ability '{0}'")]
    UnknownAbility(String),

    #[error("Project {0} not found")]
    ProjectNotFound(i64),

    /// Name already used by an active project of the workspace
    #[error("Project name '{0}' already exists")]
    DuplicateProjectName(String),

    /// Only the creator may delete a project
    #[error("{user} is not the creator of project {project_id}")]
    NotCreator { user: String, project_id: i64 },

    #[error("{user} may not edit project {project_id}")]
    NotEditor { user: String, project_id: i64 },
}

pub type DomainResult<T> = Result<T, DomainError>;
