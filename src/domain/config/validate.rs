use serde_yaml::Mapping;

use crate::domain::AppError;

/// Top-level sections every merged configuration must carry.
pub const REQUIRED_SECTIONS: [&str; 3] = ["app", "installer", "docker"];

/// Check the merged configuration for the minimal required shape.
///
/// The check is shallow: the contents and types of the required sections are
/// not inspected.
pub fn validate(config: &Mapping) -> Result<(), AppError> {
    if config.is_empty() {
        return Err(AppError::EmptyConfiguration);
    }

    let missing: Vec<String> = REQUIRED_SECTIONS
        .iter()
        .filter(|section| !config.contains_key(**section))
        .map(|section| (*section).to_string())
        .collect();

    if !missing.is_empty() {
        return Err(AppError::MissingSections(missing));
    }

    Ok(())
}
