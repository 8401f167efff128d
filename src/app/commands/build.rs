//! Build command - renders installer artifacts from templates.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::domain::AppError;
use crate::domain::config::{build_context, deep_merge, load_yaml, validate};
use crate::services::render_all;

/// Inputs for a single build run.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Base configuration YAML file.
    pub config: PathBuf,
    /// Optional overrides YAML file, deep-merged onto the base.
    pub overrides: Option<PathBuf>,
    /// Directory containing `*.j2` templates.
    pub templates: PathBuf,
    /// Directory where rendered artifacts are written.
    pub output_dir: PathBuf,
    /// Overwrite existing artifacts instead of aborting.
    pub force: bool,
}

/// Outcome of a successful build run.
#[derive(Debug)]
pub struct BuildReport {
    /// Artifacts written, in render order.
    pub artifacts: Vec<PathBuf>,
    /// Output root the artifacts live under.
    pub output_dir: PathBuf,
}

/// Execute the build command.
///
/// Verifies the input paths, loads and merges the configuration, validates
/// its shape, and renders every template into the output directory.
pub fn execute(options: &BuildOptions) -> Result<BuildReport, AppError> {
    if !options.config.exists() {
        return Err(AppError::ConfigNotFound(options.config.clone()));
    }
    if let Some(path) = &options.overrides {
        if !path.exists() {
            return Err(AppError::OverrideNotFound(path.clone()));
        }
    }
    if !options.templates.exists() {
        return Err(AppError::TemplatesDirNotFound(options.templates.clone()));
    }

    let base = load_yaml(&options.config)?;
    debug!("Loaded base configuration from {}", options.config.display());

    let merged = match &options.overrides {
        Some(path) => {
            let overrides = load_yaml(path)?;
            debug!("Applying overrides from {}", path.display());
            deep_merge(&base, &overrides)
        }
        None => base,
    };

    let context = build_context(&merged);
    validate(&context)?;

    let artifacts =
        render_all(&options.templates, &options.output_dir, &context, options.force)?;

    info!("Build completed. Artifacts available in {}", options.output_dir.display());
    Ok(BuildReport { artifacts, output_dir: options.output_dir.clone() })
}
