//! Project Service Library
//!
//! Service collaborators behind the project API: querying, creating,
//! modifying and deleting projects, and reporting the abilities of the
//! environment. Storage sits behind the `ProjectRepository` trait; the
//! bundled `ProjectStore` keeps projects in memory.

pub mod config;
pub mod dto;
pub mod repository;
pub mod service;

use std::sync::Arc;

use crate::config::ProjectServiceConfig;
use crate::repository::{ProjectRepository, ProjectStore};
use crate::service::{
    FrameworkProjectManager, FrameworkProjectService, ProjectManager, ProjectService,
};

/// Both project services wired to one repository.
#[derive(Clone)]
pub struct ProjectServices {
    pub projects: Arc<dyn ProjectService>,
    pub framework: Arc<dyn FrameworkProjectService>,
}

impl ProjectServices {
    /// Wire the services to the given repository.
    pub fn new(repo: Arc<dyn ProjectRepository>, config: ProjectServiceConfig) -> Self {
        Self {
            projects: Arc::new(ProjectManager::new(repo.clone(), config.abilities)),
            framework: Arc::new(FrameworkProjectManager::new(repo)),
        }
    }

    /// Services backed by a fresh in-memory store.
    pub fn in_memory(config: ProjectServiceConfig) -> Self {
        Self::new(Arc::new(ProjectStore::new()), config)
    }
}
