use crate::utils::error::Result;
use std::path::Path;

/// External module-management tool the creator shells out to.
///
/// Both calls block until the tool exits and run with `dir` as the working
/// directory. A non-zero exit is an error carrying the tool's output.
pub trait Toolchain {
    /// Initialize the module manifest in a freshly created project directory.
    /// Without `module_path` the tool picks its own default name.
    fn init_module(&self, dir: &Path, module_path: Option<&str>) -> Result<()>;

    /// Reconcile the manifest with the imports of the rendered sources.
    fn tidy(&self, dir: &Path) -> Result<()>;
}

impl<T: Toolchain + ?Sized> Toolchain for &T {
    fn init_module(&self, dir: &Path, module_path: Option<&str>) -> Result<()> {
        (**self).init_module(dir, module_path)
    }

    fn tidy(&self, dir: &Path) -> Result<()> {
        (**self).tidy(dir)
    }
}
