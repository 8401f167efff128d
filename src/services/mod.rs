//! Template rendering services.

mod renderer;
mod template_engine;

pub use renderer::{TEMPLATE_SUFFIX, TemplateSource, render_all};
