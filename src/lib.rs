pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::Settings, CliConfig};

pub use config::{toml_config::TomlConfig, LogFormat, LoggingConfig, ToolchainConfig};
pub use core::{creator::ProjectCreator, engine::ScaffoldEngine, toolchain::GoToolchain};
pub use domain::model::{BatchReport, ProjectOutcome, ProjectRequest, TemplateContext};
pub use domain::ports::Toolchain;
pub use utils::error::{ProjError, Result, Step};
