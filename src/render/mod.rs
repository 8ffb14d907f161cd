//! Deployment file rendering (templates, context, generation)

pub mod context;
pub mod embedded;
pub mod generator;
pub mod template;

pub use context::{build_context, RenderContext};
pub use generator::{OutputFile, TemplateGenerator, TemplateSource, OUTPUT_FILES};
pub use template::{render_template, Strictness};
