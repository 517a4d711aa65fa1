//! Local preparation of the staged component directory

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::entities::{Properties, APPLICATION_PROPERTIES, LOG4J_PROPERTIES};
use crate::domain::ports::{RenderError, TemplateRenderer};
use crate::domain::value_objects::ServiceVariant;
use crate::infrastructure::assets::{write_asset, YARN_KILL_SCRIPT};

/// Staged files rendered in place besides the service template
pub const RENDERED_FILES: [&str; 3] = [LOG4J_PROPERTIES, APPLICATION_PROPERTIES, YARN_KILL_SCRIPT];

/// Staged component directory with the install assets written into it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedComponent {
    dir: PathBuf,
    service_template: &'static str,
}

impl StagedComponent {
    /// Write the termination helper and the variant's service template into `dir`.
    pub fn prepare(dir: &Path, variant: &ServiceVariant) -> io::Result<Self> {
        let service_template = variant.service_template();
        write_asset(dir, YARN_KILL_SCRIPT)?;
        write_asset(dir, service_template)?;
        Ok(Self {
            dir: dir.to_path_buf(),
            service_template,
        })
    }

    pub fn service_template(&self) -> &'static str {
        self.service_template
    }

    pub fn file(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    /// Substitute `properties` into the service template and the rendered files.
    pub fn render(
        &self,
        renderer: &dyn TemplateRenderer,
        properties: &Properties,
    ) -> Result<(), RenderError> {
        std::iter::once(self.service_template)
            .chain(RENDERED_FILES)
            .try_for_each(|name| renderer.render(&self.file(name), properties))
    }

    /// Every visible entry of the directory, sorted by name
    pub fn entries(&self) -> io::Result<Vec<PathBuf>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            if entry.file_name().to_string_lossy().starts_with('.') {
                continue;
            }
            entries.push(entry.path());
        }
        entries.sort();
        Ok(entries)
    }
}
