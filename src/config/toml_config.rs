use crate::core::templates::ARTIFACT_NAMES;
use crate::core::ConfigProvider;
use crate::utils::error::{Result, ScaffoldError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub project: Option<ProjectConfig>,
    pub output: OutputConfig,
}

/// Descriptive metadata only; it is echoed in the run summary and never
/// substituted into artifact content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: String,
    pub artifacts: Option<Vec<String>>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ScaffoldError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ScaffoldError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SCAFFOLD_OUT})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern");

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn project_name(&self) -> Option<&str> {
        self.project.as_ref().map(|p| p.name.as_str())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("output.path", &self.output.path)?;

        if let Some(project) = &self.project {
            validation::validate_non_empty_string("project.name", &project.name)?;
        }

        if let Some(artifacts) = &self.output.artifacts {
            validation::validate_artifact_names("output.artifacts", artifacts, &ARTIFACT_NAMES)?;
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn output_path(&self) -> &str {
        &self.output.path
    }

    fn artifact_filter(&self) -> &[String] {
        self.output
            .artifacts
            .as_deref()
            .unwrap_or(&[])
    }
}
