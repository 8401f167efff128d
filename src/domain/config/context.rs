use serde_yaml::{Mapping, Value};

/// Reserved key under which the whole merged configuration is exposed for
/// qualified access inside templates.
pub const CONFIG_KEY: &str = "config";

/// Assemble the rendering context from the merged configuration.
///
/// Every top-level key becomes a substitution variable, and the entire
/// mapping is aliased again under [`CONFIG_KEY`]. A configuration that
/// defines its own top-level `config` key has it replaced by the
/// self-reference.
pub fn build_context(merged: &Mapping) -> Mapping {
    let mut context = merged.clone();
    context.insert(
        Value::String(CONFIG_KEY.to_string()),
        Value::Mapping(merged.clone()),
    );
    context
}
