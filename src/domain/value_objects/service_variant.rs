//! Service variant - compiled (jar) or scripted (python) Spark job

use crate::domain::entities::{keys, Properties};
use crate::error::{DeployerError, DeployerResult};

/// Service template for jobs submitted from a jar
pub const COMPILED_SERVICE_TEMPLATE: &str = "systemd.service.tpl";
/// Service template for jobs submitted from a python entry point
pub const SCRIPTED_SERVICE_TEMPLATE: &str = "systemd.service.py.tpl";

/// How the Spark job is launched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceVariant {
    /// `component_main_jar` + `component_main_class`
    Compiled { main_jar: String, main_class: String },
    /// `component_main_py`
    Scripted { main_py: String },
}

impl ServiceVariant {
    /// Select the variant from the component properties.
    ///
    /// Exactly one of `component_main_jar` / `component_main_py` must be set,
    /// and a jar always needs `component_main_class`. Anything else is a
    /// configuration error naming the application and component.
    pub fn resolve(
        properties: &Properties,
        application: &str,
        component: &str,
    ) -> DeployerResult<Self> {
        let names = || (application.to_string(), component.to_string());
        let jar = properties.get(keys::MAIN_JAR);
        let py = properties.get(keys::MAIN_PY);

        if jar.is_some() && !properties.contains(keys::MAIN_CLASS) {
            let (application, component) = names();
            return Err(DeployerError::MissingMainClass {
                application,
                component,
            });
        }

        match (jar, py) {
            (Some(main_jar), None) => Ok(Self::Compiled {
                main_jar: main_jar.to_string(),
                main_class: properties
                    .get(keys::MAIN_CLASS)
                    .unwrap_or_default()
                    .to_string(),
            }),
            (None, Some(main_py)) => Ok(Self::Scripted {
                main_py: main_py.to_string(),
            }),
            (Some(_), Some(_)) => {
                let (application, component) = names();
                Err(DeployerError::AmbiguousMainEntry {
                    application,
                    component,
                })
            }
            (None, None) => {
                let (application, component) = names();
                Err(DeployerError::MissingMainEntry {
                    application,
                    component,
                })
            }
        }
    }

    pub fn is_compiled(&self) -> bool {
        matches!(self, Self::Compiled { .. })
    }

    /// File name of the service template this variant installs
    pub fn service_template(&self) -> &'static str {
        match self {
            Self::Compiled { .. } => COMPILED_SERVICE_TEMPLATE,
            Self::Scripted { .. } => SCRIPTED_SERVICE_TEMPLATE,
        }
    }

    /// Jar to update with `application.properties` after install
    pub fn main_jar(&self) -> Option<&str> {
        match self {
            Self::Compiled { main_jar, .. } => Some(main_jar),
            Self::Scripted { .. } => None,
        }
    }
}
