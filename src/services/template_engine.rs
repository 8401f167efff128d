use minijinja::{AutoEscape, Environment, UndefinedBehavior, Value};

use crate::domain::AppError;

use super::TemplateSource;

/// Build a minijinja environment holding the given template sources.
///
/// Undefined lookups fail the render rather than substituting an empty
/// string, trailing newlines survive rendering, and nothing is HTML-escaped
/// (output is shell scripts and config files, not markup).
pub fn build_template_environment(
    sources: &[TemplateSource],
) -> Result<Environment<'_>, AppError> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_auto_escape_callback(|_| AutoEscape::None);

    for source in sources {
        env.add_template(source.name.as_str(), source.content.as_str()).map_err(|e| {
            AppError::TemplateError { name: source.name.clone(), details: e.to_string() }
        })?;
    }

    Ok(env)
}

pub fn render_template_by_name(
    env: &Environment<'_>,
    template_name: &str,
    ctx: &Value,
) -> Result<String, AppError> {
    let template = env.get_template(template_name).map_err(|e| AppError::TemplateError {
        name: template_name.to_string(),
        details: e.to_string(),
    })?;

    template.render(ctx).map_err(|e| AppError::TemplateError {
        name: template_name.to_string(),
        details: e.to_string(),
    })
}
