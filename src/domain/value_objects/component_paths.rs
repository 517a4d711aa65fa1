//! Path triple derived from namespace, application and component names

use serde::Serialize;

/// Directory systemd loads unit files from on the primary host
pub const SYSTEMD_UNIT_DIR: &str = "/usr/lib/systemd/system";

/// Remote locations for one (application, component) pair.
///
/// Every field is a deterministic function of the namespace, application
/// name and component name, so two different pairs never share a path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ComponentPaths {
    /// Unprivileged staging directory the package is copied into first
    pub tmp_path: String,
    /// Final install directory owned by root
    pub install_path: String,
    /// systemd service name
    pub service_name: String,
}

impl ComponentPaths {
    pub fn new(namespace: &str, application: &str, component: &str) -> Self {
        Self {
            tmp_path: format!("/tmp/{}/{}/{}", namespace, application, component),
            install_path: format!("/opt/{}/{}/{}", namespace, application, component),
            service_name: format!("{}-{}-{}", namespace, application, component),
        }
    }

    /// Installed unit file path, e.g. `/usr/lib/systemd/system/<service>.service`
    pub fn unit_install_path(&self) -> String {
        format!("{}/{}.service", SYSTEMD_UNIT_DIR, self.service_name)
    }

    /// Path of `file_name` inside the remote staging directory
    pub fn tmp_file(&self, file_name: &str) -> String {
        format!("{}/{}", self.tmp_path, file_name)
    }

    /// Path of `file_name` inside the install directory
    pub fn install_file(&self, file_name: &str) -> String {
        format!("{}/{}", self.install_path, file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_paths_from_identity() {
        let paths = ComponentPaths::new("platform-app", "orders", "ingest");
        assert_eq!(paths.tmp_path, "/tmp/platform-app/orders/ingest");
        assert_eq!(paths.install_path, "/opt/platform-app/orders/ingest");
        assert_eq!(paths.service_name, "platform-app-orders-ingest");
    }

    #[test]
    fn unit_install_path_uses_systemd_dir() {
        let paths = ComponentPaths::new("ns", "app", "comp");
        assert_eq!(
            paths.unit_install_path(),
            "/usr/lib/systemd/system/ns-app-comp.service"
        );
    }

    #[test]
    fn file_helpers_join_with_slash() {
        let paths = ComponentPaths::new("ns", "app", "comp");
        assert_eq!(paths.tmp_file("log4j.properties"), "/tmp/ns/app/comp/log4j.properties");
        assert_eq!(paths.install_file("yarn-kill.py"), "/opt/ns/app/comp/yarn-kill.py");
    }

    #[test]
    fn different_components_never_collide() {
        let a = ComponentPaths::new("ns", "app", "one");
        let b = ComponentPaths::new("ns", "app", "two");
        assert_ne!(a.install_path, b.install_path);
        assert_ne!(a.service_name, b.service_name);
    }
}
