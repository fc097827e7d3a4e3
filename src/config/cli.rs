use crate::config::toml_config::TomlConfig;
use crate::config::{CliConfig, LoggingConfig, ToolchainConfig};
use crate::utils::error::{ProjError, Result};
use crate::utils::validation::Validate;

/// Effective settings after layering command line flags over the file config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub names: Vec<String>,
    pub verbose: bool,
    pub toolchain: ToolchainConfig,
    pub logging: LoggingConfig,
}

impl Settings {
    pub fn resolve(cli: &CliConfig, file: TomlConfig) -> Self {
        let TomlConfig {
            mut toolchain,
            mut logging,
        } = file;

        if let Some(program) = &cli.toolchain {
            toolchain.program = program.clone();
        }
        if cli.explicit_module_path {
            toolchain.explicit_module_path = true;
        }
        if let Some(format) = cli.log_format {
            logging.format = format;
        }

        Self {
            names: cli.names.clone(),
            verbose: cli.verbose,
            toolchain,
            logging,
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if self.names.is_empty() {
            return Err(ProjError::Usage("please supply one argument".to_string()));
        }
        Ok(())
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        TomlConfig {
            toolchain: self.toolchain.clone(),
            logging: self.logging.clone(),
        }
        .validate()
    }
}
