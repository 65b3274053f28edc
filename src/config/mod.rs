pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::core::templates::ARTIFACT_NAMES;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "stackgen")]
#[command(about = "A small scaffolding tool for containerized web projects")]
pub struct CliConfig {
    #[arg(long, default_value = "./scaffold")]
    pub output_path: String,

    /// Emit only the named artifacts (comma separated); default is all.
    #[arg(long, value_delimiter = ',')]
    pub artifacts: Vec<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_artifact_names("artifacts", &self.artifacts, &ARTIFACT_NAMES)?;
        Ok(())
    }
}

impl ConfigProvider for CliConfig {
    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn artifact_filter(&self) -> &[String] {
        &self.artifacts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_unknown_artifact() {
        let config = CliConfig {
            output_path: "./scaffold".to_string(),
            artifacts: vec!["Makefile".to_string()],
            verbose: false,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_default_config() {
        let config = CliConfig {
            output_path: "./scaffold".to_string(),
            artifacts: vec![],
            verbose: false,
        };
        assert!(config.validate().is_ok());
    }
}
