//! hlb: Render homelab installer artifacts from templates and layered YAML configuration.

pub mod app;
pub mod domain;
pub mod logging;
pub mod services;

pub use app::commands::build::{BuildOptions, BuildReport};
pub use domain::AppError;

/// Render every template under the configured template root into the output
/// directory.
///
/// Returns a `BuildReport` listing the written artifacts.
pub fn build(options: &BuildOptions) -> Result<BuildReport, AppError> {
    app::commands::build::execute(options)
}
