#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use serde::{Deserialize, Serialize};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "proj")]
#[command(about = "Scaffold Go command-line projects")]
#[command(version)]
pub struct CliConfig {
    /// Project names, created relative to the working directory
    pub names: Vec<String>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Toolchain program used for `mod init` and `mod tidy`
    #[arg(long)]
    pub toolchain: Option<String>,

    /// Pass "<working dir name>/<project name>" to `mod init`
    #[arg(long)]
    pub explicit_module_path: bool,

    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolchainConfig {
    pub program: String,
    pub init_args: Vec<String>,
    pub tidy_args: Vec<String>,
    pub explicit_module_path: bool,
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        Self {
            program: "go".to_string(),
            init_args: vec!["mod".to_string(), "init".to_string()],
            tidy_args: vec!["mod".to_string(), "tidy".to_string()],
            explicit_module_path: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub format: LogFormat,
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Compact,
            level: "info".to_string(),
        }
    }
}
