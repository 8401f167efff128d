//! CLI Adapter.

use std::path::PathBuf;

use clap::Parser;

use crate::app::commands::build::{self, BuildOptions};

#[derive(Parser)]
#[command(name = "hlb")]
#[command(version)]
#[command(
    about = "Render homelab installer artifacts from templates and layered configuration",
    long_about = None
)]
struct Cli {
    /// Path to the base configuration YAML file
    #[arg(long, value_name = "PATH", default_value = "config/defaults.yaml")]
    config: PathBuf,

    /// Optional path to an overrides YAML file
    #[arg(long = "override", value_name = "PATH")]
    overrides: Option<PathBuf>,

    /// Directory containing templates
    #[arg(long, value_name = "PATH", default_value = "templates")]
    templates: PathBuf,

    /// Directory where rendered artifacts are written
    #[arg(long, value_name = "PATH", default_value = "build")]
    output_dir: PathBuf,

    /// Overwrite existing artifacts in the output directory
    #[arg(long)]
    force: bool,

    /// Enable debug logging for additional build details
    #[arg(long)]
    verbose: bool,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    crate::logging::init(cli.verbose);

    let options = BuildOptions {
        config: cli.config,
        overrides: cli.overrides,
        templates: cli.templates,
        output_dir: cli.output_dir,
        force: cli.force,
    };

    if let Err(e) = build::execute(&options) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
