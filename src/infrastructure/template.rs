//! Placeholder template renderer
//!
//! Implements the TemplateRenderer port with `${key}` substitution.
//! Placeholders without a matching property are left untouched.

use std::borrow::Cow;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::domain::entities::Properties;
use crate::domain::ports::{RenderError, TemplateRenderer};

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([A-Za-z0-9_.\-]+)\}").expect("valid placeholder regex"));

/// Renders `${key}` placeholders in place
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderRenderer;

impl PlaceholderRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Substitute properties into `text`
    pub fn render_str<'a>(&self, text: &'a str, properties: &Properties) -> Cow<'a, str> {
        PLACEHOLDER_RE.replace_all(text, |caps: &Captures<'_>| {
            match properties.get(&caps[1]) {
                Some(value) => value.to_string(),
                None => caps[0].to_string(),
            }
        })
    }
}

impl TemplateRenderer for PlaceholderRenderer {
    fn render(&self, path: &Path, properties: &Properties) -> Result<(), RenderError> {
        let io_err = |source| RenderError::Io {
            path: path.to_path_buf(),
            source,
        };
        let original = fs::read_to_string(path).map_err(io_err)?;
        let rendered = self.render_str(&original, properties);
        if let Cow::Owned(text) = rendered {
            fs::write(path, text).map_err(io_err)?;
        }
        tracing::debug!(path = %path.display(), "rendered template");
        Ok(())
    }
}
