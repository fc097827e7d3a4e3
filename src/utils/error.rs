use std::fmt;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// The step of project creation an error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Arguments,
    Configuration,
    CheckExistence,
    MakeDirectories,
    ModuleInit,
    WriteTemplates,
    ModuleTidy,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::Arguments => "arguments",
            Step::Configuration => "configuration",
            Step::CheckExistence => "check existence",
            Step::MakeDirectories => "make directories",
            Step::ModuleInit => "go mod init",
            Step::WriteTemplates => "write templates",
            Step::ModuleTidy => "go mod tidy",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum ProjError {
    #[error("{0}")]
    Usage(String),

    #[error("check existence: {} already exists", .path.display())]
    AlreadyExists { path: PathBuf },

    #[error("make directories: failed to create {}: {source}", .path.display())]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{step}: failed to start `{command}`: {source}")]
    ToolchainSpawn {
        step: Step,
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{step}: `{command}` exited with {status}: {output}")]
    Toolchain {
        step: Step,
        command: String,
        status: ExitStatus,
        output: String,
    },

    #[error("write templates: failed to render {template}: {source}")]
    Template {
        template: String,
        #[source]
        source: tera::Error,
    },

    #[error("{step}: {}: {source}", .path.display())]
    Io {
        step: Step,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value for {field} ({value:?}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl ProjError {
    pub fn step(&self) -> Step {
        match self {
            ProjError::Usage(_) => Step::Arguments,
            ProjError::AlreadyExists { .. } => Step::CheckExistence,
            ProjError::DirectoryCreation { .. } => Step::MakeDirectories,
            ProjError::ToolchainSpawn { step, .. }
            | ProjError::Toolchain { step, .. }
            | ProjError::Io { step, .. } => *step,
            ProjError::Template { .. } => Step::WriteTemplates,
            ProjError::Config { .. } | ProjError::InvalidConfigValue { .. } => {
                Step::Configuration
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ProjError::Usage(_) => "pass at least one project name, e.g. `proj myapp`",
            ProjError::AlreadyExists { .. } => {
                "remove or rename the existing path, or choose another project name"
            }
            ProjError::DirectoryCreation { .. } | ProjError::Io { .. } => {
                "check permissions of the working directory; the partial project must be removed by hand"
            }
            ProjError::ToolchainSpawn { .. } => {
                "make sure the Go toolchain is installed and on PATH, or set --toolchain"
            }
            ProjError::Toolchain { .. } => {
                "inspect the toolchain output above; the partial project must be removed by hand"
            }
            ProjError::Template { .. } => "the embedded templates are broken; rebuild proj",
            ProjError::Config { .. } | ProjError::InvalidConfigValue { .. } => {
                "fix the configuration file or command line flags"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ProjError>;
