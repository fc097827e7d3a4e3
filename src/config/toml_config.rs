use crate::config::{LoggingConfig, ToolchainConfig};
use crate::utils::error::{ProjError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_one_of, validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub toolchain: ToolchainConfig,
    pub logging: LoggingConfig,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| ProjError::Config {
            message: format!("cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ProjError::Config {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${GOROOT})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ProjError::Config {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_path("toolchain.program", &self.toolchain.program)?;

        if self.toolchain.init_args.is_empty() {
            return Err(ProjError::InvalidConfigValue {
                field: "toolchain.init_args".to_string(),
                value: "[]".to_string(),
                reason: "At least one argument is required".to_string(),
            });
        }
        if self.toolchain.tidy_args.is_empty() {
            return Err(ProjError::InvalidConfigValue {
                field: "toolchain.tidy_args".to_string(),
                value: "[]".to_string(),
                reason: "At least one argument is required".to_string(),
            });
        }

        validate_non_empty_string("logging.level", &self.logging.level)?;
        validate_one_of("logging.level", &self.logging.level, &LOG_LEVELS)
    }
}
