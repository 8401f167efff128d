use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use minijinja::Value;
use serde_yaml::Mapping;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::domain::AppError;

use super::template_engine::{build_template_environment, render_template_by_name};

/// Filename suffix marking a file as a template to be rendered.
pub const TEMPLATE_SUFFIX: &str = ".j2";

/// Stripped template name that is rewritten on output.
const INSTALLER_TEMPLATE: &str = "installer.sh";
/// Artifact name the installer template is rewritten to.
const INSTALLER_ARTIFACT: &str = "homelab-install.sh";

/// A template file collected from the template root.
pub struct TemplateSource {
    /// Path relative to the template root, `/`-separated.
    pub name: String,
    pub content: String,
}

/// Render every template under `template_dir` into `output_dir` against the
/// given context.
///
/// Artifacts mirror the template tree with the suffix stripped; a stripped
/// name of exactly `installer.sh` becomes `homelab-install.sh` in the same
/// directory, and any artifact ending in `.sh` is made executable. An
/// existing artifact aborts the whole run unless `force` is set; artifacts
/// already written earlier in the run stay on disk.
pub fn render_all(
    template_dir: &Path,
    output_dir: &Path,
    context: &Mapping,
    force: bool,
) -> Result<Vec<PathBuf>, AppError> {
    let sources = collect_sources(template_dir)?;
    debug!("Discovered {} template(s) under {}", sources.len(), template_dir.display());

    let env = build_template_environment(&sources)?;
    let ctx = Value::from_serialize(context);

    let mut artifacts = Vec::with_capacity(sources.len());
    for source in &sources {
        let output_path = output_dir.join(artifact_path(&source.name));

        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)?;
        }

        if output_path.exists() && !force {
            return Err(AppError::ArtifactExists(output_path));
        }

        info!("Rendering {} -> {}", source.name, output_path.display());
        let rendered = render_template_by_name(&env, &source.name, &ctx)?;
        fs::write(&output_path, rendered)?;

        if output_path.extension() == Some(OsStr::new("sh")) {
            set_executable(&output_path)?;
        }

        artifacts.push(output_path);
    }

    info!("Rendered {} templates to {}", artifacts.len(), output_dir.display());
    Ok(artifacts)
}

/// Collect `*.j2` files under `template_dir`, lexically sorted by relative
/// name for determinism.
fn collect_sources(template_dir: &Path) -> Result<Vec<TemplateSource>, AppError> {
    let mut sources = Vec::new();
    for entry in WalkDir::new(template_dir) {
        let entry = entry.map_err(io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }
        // walkdir yields paths under the root
        let Ok(relative) = entry.path().strip_prefix(template_dir) else { continue };
        let name =
            relative.to_string_lossy().replace(std::path::MAIN_SEPARATOR, "/");
        if !name.ends_with(TEMPLATE_SUFFIX) {
            continue;
        }
        let content = fs::read_to_string(entry.path())?;
        sources.push(TemplateSource { name, content });
    }
    sources.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(sources)
}

/// Map a template name to its artifact path relative to the output root.
fn artifact_path(template_name: &str) -> PathBuf {
    let stripped =
        template_name.strip_suffix(TEMPLATE_SUFFIX).unwrap_or(template_name);
    let mut relative = PathBuf::from(stripped);
    if relative.file_name() == Some(OsStr::new(INSTALLER_TEMPLATE)) {
        relative.set_file_name(INSTALLER_ARTIFACT);
    }
    relative
}

#[cfg(unix)]
fn set_executable(path: &Path) -> Result<(), AppError> {
    use std::os::unix::fs::PermissionsExt;
    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms)?;
    Ok(())
}

#[cfg(not(unix))]
fn set_executable(_path: &Path) -> Result<(), AppError> {
    Ok(())
}
