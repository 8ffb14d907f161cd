//! `{{ variable }}` placeholder substitution

use crate::error::TemplateError;
use crate::render::RenderContext;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{([^{}]*)\}\}").expect("valid regex"));

static VARIABLE_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_.\-]*$").expect("valid regex"));

/// How undefined variables are handled while rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strictness {
    /// Fail with [`TemplateError::Render`] naming the first undefined variable.
    #[default]
    Strict,
    /// Substitute an empty string.
    Lenient,
}

/// Substitute every placeholder in `source` from `context`.
///
/// Anything between `{{` and `}}` that is not a variable name is reported as
/// [`TemplateError::Malformed`] regardless of strictness. `template` is only
/// used to label errors.
pub fn render_template(
    template: &str,
    source: &str,
    context: &RenderContext,
    strictness: Strictness,
) -> Result<String, TemplateError> {
    let mut failure: Option<TemplateError> = None;

    let rendered = PLACEHOLDER.replace_all(source, |caps: &Captures| {
        let name = caps[1].trim();
        if !VARIABLE_NAME.is_match(name) {
            if failure.is_none() {
                failure = Some(TemplateError::Malformed {
                    template: template.to_string(),
                    placeholder: caps[0].to_string(),
                });
            }
            return String::new();
        }
        match context.get(name) {
            Some(value) => value.clone(),
            None => {
                if strictness == Strictness::Lenient {
                    tracing::debug!("{template}: '{name}' is undefined, rendering empty");
                } else if failure.is_none() {
                    failure = Some(TemplateError::Render {
                        template: template.to_string(),
                        variable: name.to_string(),
                    });
                }
                String::new()
            }
        }
    });

    match failure {
        Some(err) => Err(err),
        None => Ok(rendered.into_owned()),
    }
}
