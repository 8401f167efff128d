use std::fs;
use std::path::Path;

use serde_yaml::{Mapping, Value};

use crate::domain::AppError;

/// Load a YAML document from `path` into a configuration mapping.
///
/// An empty or `null` document yields an empty mapping. A document whose root
/// is anything other than a mapping is rejected, since every downstream step
/// operates on key/value sections.
pub fn load_yaml(path: &Path) -> Result<Mapping, AppError> {
    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(Mapping::new());
    }
    let document: Value =
        serde_yaml::from_str(&content).map_err(|e| AppError::ParseError {
            what: path.display().to_string(),
            details: e.to_string(),
        })?;

    match document {
        Value::Null => Ok(Mapping::new()),
        Value::Mapping(mapping) => Ok(mapping),
        other => Err(AppError::ParseError {
            what: path.display().to_string(),
            details: format!("expected a mapping at the document root, found {}", kind_of(&other)),
        }),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
