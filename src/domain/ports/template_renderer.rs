//! Template Renderer Port
//!
//! Substitutes properties into a file on local disk, in place.

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::entities::Properties;

/// Error while rendering a template
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to render {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to render {}: {message}", path.display())]
    Invalid { path: PathBuf, message: String },
}

/// Trait for in-place template rendering
pub trait TemplateRenderer: Send + Sync {
    /// Rewrite the file at `path` with `properties` substituted
    fn render(&self, path: &Path, properties: &Properties) -> Result<(), RenderError>;
}
