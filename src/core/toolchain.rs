use crate::config::ToolchainConfig;
use crate::domain::ports::Toolchain;
use crate::utils::error::{ProjError, Result, Step};
use std::path::Path;
use std::process::Command;

/// Runs the Go toolchain (or whatever program the config names) as a
/// blocking subprocess.
#[derive(Debug, Clone)]
pub struct GoToolchain {
    config: ToolchainConfig,
}

impl GoToolchain {
    pub fn new(config: ToolchainConfig) -> Self {
        Self { config }
    }

    fn run(&self, step: Step, dir: &Path, args: &[String]) -> Result<()> {
        let command_line = std::iter::once(self.config.program.as_str())
            .chain(args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ");
        tracing::info!("{} in {}", command_line, dir.display());

        let output = Command::new(&self.config.program)
            .args(args)
            .current_dir(dir)
            .output()
            .map_err(|source| ProjError::ToolchainSpawn {
                step,
                command: command_line.clone(),
                source,
            })?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        if !output.status.success() {
            return Err(ProjError::Toolchain {
                step,
                command: command_line,
                status: output.status,
                output: combined.trim_end().to_string(),
            });
        }

        if !combined.trim().is_empty() {
            tracing::debug!("{}: {}", command_line, combined.trim_end());
        }
        Ok(())
    }
}

impl Toolchain for GoToolchain {
    fn init_module(&self, dir: &Path, module_path: Option<&str>) -> Result<()> {
        let mut args = self.config.init_args.clone();
        if let Some(module_path) = module_path {
            args.push(module_path.to_string());
        }
        self.run(Step::ModuleInit, dir, &args)
    }

    fn tidy(&self, dir: &Path) -> Result<()> {
        self.run(Step::ModuleTidy, dir, &self.config.tidy_args)
    }
}
