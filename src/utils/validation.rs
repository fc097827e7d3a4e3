use crate::utils::error::{ProjError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ProjError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ProjError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ProjError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(ProjError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Unsupported value. Valid values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

/// A project name is used as a path relative to the working directory.
pub fn validate_project_name(name: &str) -> Result<()> {
    validate_non_empty_string("name", name)?;
    validate_path("name", name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("toolchain.program", "go").is_ok());
        assert!(validate_path("toolchain.program", "").is_err());
        assert!(validate_path("toolchain.program", "go\0").is_err());
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("logging.format", "json", &["compact", "json"]).is_ok());
        assert!(validate_one_of("logging.format", "pretty", &["compact", "json"]).is_err());
    }

    #[test]
    fn test_validate_project_name() {
        assert!(validate_project_name("myapp").is_ok());
        assert!(validate_project_name("my-app.v2").is_ok());
        assert!(validate_project_name("   ").is_err());
        assert!(validate_project_name("").is_err());
        assert!(validate_project_name("bad\0name").is_err());
    }
}
