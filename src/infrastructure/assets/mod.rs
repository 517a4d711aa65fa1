//! Embedded component assets
//!
//! The service templates and the YARN termination helper ship inside the
//! binary and are written into the staged component directory on install.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::{COMPILED_SERVICE_TEMPLATE, SCRIPTED_SERVICE_TEMPLATE};

/// Termination helper run before start and after stop of the service
pub const YARN_KILL_SCRIPT: &str = "yarn-kill.py";

const COMPILED_SERVICE: &str = include_str!("systemd.service.tpl");
const SCRIPTED_SERVICE: &str = include_str!("systemd.service.py.tpl");
const YARN_KILL: &str = include_str!("yarn-kill.py");

/// Contents of the embedded asset named `name`
pub fn asset(name: &str) -> Option<&'static str> {
    match name {
        COMPILED_SERVICE_TEMPLATE => Some(COMPILED_SERVICE),
        SCRIPTED_SERVICE_TEMPLATE => Some(SCRIPTED_SERVICE),
        YARN_KILL_SCRIPT => Some(YARN_KILL),
        _ => None,
    }
}

/// Write the embedded asset `name` into `dir`, replacing any existing copy
pub fn write_asset(dir: &Path, name: &str) -> io::Result<PathBuf> {
    let content = asset(name).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("no embedded asset named {}", name),
        )
    })?;
    let path = dir.join(name);
    fs::write(&path, content)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn every_template_is_embedded() {
        for name in [COMPILED_SERVICE_TEMPLATE, SCRIPTED_SERVICE_TEMPLATE, YARN_KILL_SCRIPT] {
            assert!(asset(name).is_some(), "{} missing", name);
        }
        assert!(asset("upstart.conf").is_none());
    }

    #[test]
    fn compiled_template_references_main_class() {
        let text = asset(COMPILED_SERVICE_TEMPLATE).unwrap();
        assert!(text.contains("${component_main_class}"));
        assert!(text.contains("${component_respawn_type}"));
    }

    #[test]
    fn scripted_template_references_main_py() {
        let text = asset(SCRIPTED_SERVICE_TEMPLATE).unwrap();
        assert!(text.contains("${component_main_py}"));
        assert!(!text.contains("${component_main_class}"));
    }

    #[test]
    fn write_asset_creates_file() {
        let dir = tempdir().unwrap();
        let path = write_asset(dir.path(), YARN_KILL_SCRIPT).unwrap();
        assert_eq!(path, dir.path().join(YARN_KILL_SCRIPT));
        assert!(fs::read_to_string(path).unwrap().contains("${component_job_name}"));
    }

    #[test]
    fn write_unknown_asset_fails() {
        let dir = tempdir().unwrap();
        let err = write_asset(dir.path(), "nope").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
