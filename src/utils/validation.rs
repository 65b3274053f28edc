use crate::utils::error::{Result, ScaffoldError};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ScaffoldError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ScaffoldError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ScaffoldError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_artifact_names(
    field_name: &str,
    requested: &[String],
    known: &[&str],
) -> Result<()> {
    let known_set: HashSet<&str> = known.iter().copied().collect();

    for name in requested {
        if !known_set.contains(name.as_str()) {
            return Err(ScaffoldError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: name.clone(),
                reason: format!("Unknown artifact. Known artifacts: {}", known.join(", ")),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output_path", "./scaffold").is_ok());
        assert!(validate_path("output_path", "").is_err());
        assert!(validate_path("output_path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("project.name", "my-app").is_ok());
        assert!(validate_non_empty_string("project.name", "   ").is_err());
    }

    #[test]
    fn test_validate_artifact_names() {
        let known = ["config.yaml", "Dockerfile"];
        let requested = vec!["Dockerfile".to_string()];
        assert!(validate_artifact_names("artifacts", &requested, &known).is_ok());

        let unknown = vec!["Makefile".to_string()];
        assert!(validate_artifact_names("artifacts", &unknown, &known).is_err());
    }
}
