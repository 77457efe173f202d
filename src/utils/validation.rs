use crate::utils::error::{DeployError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(DeployError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(DeployError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DeployError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_distinct_paths(field_name: &str, first: &str, second: &str) -> Result<()> {
    if Path::new(first) == Path::new(second) {
        return Err(DeployError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: second.to_string(),
            reason: "Source and destination must be different paths".to_string(),
        });
    }
    Ok(())
}

pub fn validate_existing_dir(field_name: &str, dir: &str) -> Result<()> {
    validate_path(field_name, dir)?;
    if !Path::new(dir).is_dir() {
        return Err(DeployError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: dir.to_string(),
            reason: "Directory does not exist".to_string(),
        });
    }
    Ok(())
}
