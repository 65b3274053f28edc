use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("Failed to write artifact '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Write,
    Io,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ScaffoldError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ScaffoldError::WriteError { .. } => ErrorCategory::Write,
            ScaffoldError::IoError(_) => ErrorCategory::Io,
            ScaffoldError::ConfigError { .. }
            | ScaffoldError::InvalidConfigValueError { .. }
            | ScaffoldError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // A single failed write leaves the rest of the batch intact.
            ScaffoldError::WriteError { .. } => ErrorSeverity::Medium,
            ScaffoldError::IoError(_) => ErrorSeverity::High,
            ScaffoldError::ConfigError { .. }
            | ScaffoldError::InvalidConfigValueError { .. }
            | ScaffoldError::MissingConfigError { .. } => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ScaffoldError::WriteError { path, .. } => format!(
                "Check that the output directory exists and is writable, then re-run (target: {})",
                path
            ),
            ScaffoldError::IoError(_) => {
                "Check filesystem permissions and available disk space".to_string()
            }
            ScaffoldError::ConfigError { .. } => {
                "Review the configuration file for syntax errors".to_string()
            }
            ScaffoldError::InvalidConfigValueError { field, .. } => {
                format!("Correct the value of '{}' and re-run", field)
            }
            ScaffoldError::MissingConfigError { field } => {
                format!("Add the required field '{}' to the configuration", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ScaffoldError::WriteError { path, .. } => {
                format!("Could not write '{}'", path)
            }
            ScaffoldError::IoError(e) => format!("Filesystem operation failed: {}", e),
            ScaffoldError::ConfigError { message } => {
                format!("Configuration problem: {}", message)
            }
            ScaffoldError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            ScaffoldError::MissingConfigError { field } => {
                format!("Configuration is missing '{}'", field)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;
