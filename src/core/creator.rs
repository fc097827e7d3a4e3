use crate::core::templates::write_templates;
use crate::domain::model::{ProjectRequest, TemplateContext};
use crate::domain::ports::Toolchain;
use crate::utils::error::{ProjError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Scaffolds one project at a time under `root`.
///
/// Nothing is rolled back: whatever a failed step already created stays on
/// disk, and a second attempt on the same name stops at the existence check.
pub struct ProjectCreator<T: Toolchain> {
    toolchain: T,
    root: PathBuf,
    explicit_module_path: bool,
}

impl<T: Toolchain> ProjectCreator<T> {
    pub fn new(toolchain: T, root: impl Into<PathBuf>) -> Self {
        Self {
            toolchain,
            root: root.into(),
            explicit_module_path: false,
        }
    }

    /// Pass `<root name>/<project name>` to module init instead of letting
    /// the toolchain choose.
    pub fn with_explicit_module_path(mut self, enabled: bool) -> Self {
        self.explicit_module_path = enabled;
        self
    }

    pub fn working_dir_base(&self) -> String {
        self.root
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.root.display().to_string())
    }

    pub fn create(&self, name: &str) -> Result<PathBuf> {
        tracing::info!("making project: {}", name);
        let request = ProjectRequest::new(name)?;
        let project_dir = request.project_dir(&self.root);

        check_absent(&project_dir)?;
        make_directories(&project_dir)?;

        let ctx = TemplateContext {
            wd: self.working_dir_base(),
            project_name: request.name().to_string(),
        };

        let module_path = self
            .explicit_module_path
            .then(|| format!("{}/{}", ctx.wd, ctx.project_name));
        self.toolchain
            .init_module(&project_dir, module_path.as_deref())?;

        write_templates(&ctx, &project_dir)?;

        self.toolchain.tidy(&project_dir)?;

        tracing::info!("completed {}", name);
        Ok(project_dir)
    }
}

fn check_absent(path: &Path) -> Result<()> {
    // symlink_metadata so a dangling link still counts as taken
    if fs::symlink_metadata(path).is_ok() {
        return Err(ProjError::AlreadyExists {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

fn make_directories(project_dir: &Path) -> Result<()> {
    for dir in [project_dir.to_path_buf(), project_dir.join("cmd")] {
        fs::create_dir(&dir).map_err(|source| ProjError::DirectoryCreation {
            path: dir.clone(),
            source,
        })?;
    }
    Ok(())
}
