use crate::utils::error::Result;
use crate::utils::validation::validate_project_name;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// One name to scaffold, relative to the directory projects are created in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRequest {
    name: String,
}

impl ProjectRequest {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_project_name(&name)?;
        Ok(Self { name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn project_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.name)
    }
}

/// Substitution input for the embedded templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateContext {
    /// Base name of the directory the project is created in.
    pub wd: String,
    pub project_name: String,
}

/// Result of scaffolding one name within a batch.
#[derive(Debug)]
pub struct ProjectOutcome {
    pub name: String,
    pub result: Result<PathBuf>,
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<ProjectOutcome>,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }
}
