//! Layered YAML configuration: loading, merging, validation, and context
//! assembly.

mod context;
mod loader;
mod merge;
mod validate;

pub use context::{CONFIG_KEY, build_context};
pub use loader::load_yaml;
pub use merge::deep_merge;
pub use validate::{REQUIRED_SECTIONS, validate};
