//! Error types for the component deployer
//!
//! Uses `thiserror` for library errors. Configuration errors are raised before
//! any remote mutation; transport and render errors are passed through verbatim.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::{RenderError, TransportError};

/// Result type alias for deployer operations
pub type DeployerResult<T> = Result<T, DeployerError>;

/// Fixed message for packages that still ship their own `upstart.conf`.
pub const UPSTART_DEPRECATION_MESSAGE: &str = "Support for user supplied upstart.conf files has been deprecated, \
the deployment manager will supply one automatically. \
Please see PNDA example-applications for usage.";

/// Main error type for deployer operations
#[derive(Error, Debug)]
pub enum DeployerError {
    /// Package still carries a user supplied `upstart.conf`
    #[error("{}", UPSTART_DEPRECATION_MESSAGE)]
    DeprecatedUpstart {
        application: String,
        component: String,
    },

    /// Neither `component_main_jar` nor `component_main_py` was supplied
    #[error("properties.json must contain \"main_jar or main_py\" for {application} sparkStreaming {component}")]
    MissingMainEntry {
        application: String,
        component: String,
    },

    /// `component_main_jar` was supplied without `component_main_class`
    #[error("properties.json must contain \"main_class\" for {application} sparkStreaming {component}")]
    MissingMainClass {
        application: String,
        component: String,
    },

    /// Both `component_main_jar` and `component_main_py` were supplied
    #[error("properties.json must contain only one of \"main_jar\" or \"main_py\" for {application} sparkStreaming {component}")]
    AmbiguousMainEntry {
        application: String,
        component: String,
    },

    /// No creator is registered for the requested component type
    #[error("unknown component type '{0}'")]
    UnknownComponentType(String),

    /// Remote command execution or file copy failed
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Template rendering failed
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Invalid deployer configuration file
    #[error("invalid configuration in {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DeployerError {
    /// True for errors raised by local checks before any host is contacted.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::DeprecatedUpstart { .. }
                | Self::MissingMainEntry { .. }
                | Self::MissingMainClass { .. }
                | Self::AmbiguousMainEntry { .. }
        )
    }
}
