use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for hlb operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Base configuration file missing.
    #[error("Base configuration not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    /// Override configuration file missing.
    #[error("Override configuration not found: {}", .0.display())]
    OverrideNotFound(PathBuf),

    /// Template directory missing.
    #[error("Templates directory not found: {}", .0.display())]
    TemplatesDirNotFound(PathBuf),

    /// Configuration resolved to a mapping with no entries.
    #[error("Configuration is empty after loading and merging YAML files")]
    EmptyConfiguration,

    /// Required top-level sections are absent from the merged configuration.
    #[error("Missing required configuration sections: {}", .0.join(", "))]
    MissingSections(Vec<String>),

    /// Output artifact already exists and overwriting was not requested.
    #[error("Refusing to overwrite existing artifact: {} (use --force)", .0.display())]
    ArtifactExists(PathBuf),

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// Template registration or rendering failure.
    #[error("Failed to render template '{name}': {details}")]
    TemplateError { name: String, details: String },
}

impl AppError {
    /// Provide an `io::ErrorKind` view of the failure for exit-path checks.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::ConfigNotFound(_)
            | AppError::OverrideNotFound(_)
            | AppError::TemplatesDirNotFound(_) => io::ErrorKind::NotFound,
            AppError::EmptyConfiguration
            | AppError::MissingSections(_)
            | AppError::ParseError { .. } => io::ErrorKind::InvalidInput,
            AppError::ArtifactExists(_) => io::ErrorKind::AlreadyExists,
            AppError::TemplateError { .. } => io::ErrorKind::Other,
        }
    }
}
