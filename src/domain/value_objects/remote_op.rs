//! Typed remote operations
//!
//! Install, uninstall, start and stop steps are built as `RemoteOp` values
//! and only turned into shell text at the edge, by `to_shell()`, so the
//! command sets can be inspected without a shell.

use serde::{Deserialize, Serialize};

/// A single operation to run on a remote host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum RemoteOp {
    /// `mkdir -p`
    MakeDir { path: String, privileged: bool },
    /// Copy one file
    Copy {
        from: String,
        to: String,
        privileged: bool,
    },
    /// Copy every entry of a directory, subdirectories included, into another directory
    CopyContents {
        from_dir: String,
        to_dir: String,
        privileged: bool,
    },
    /// Move one file
    Move {
        from: String,
        to: String,
        privileged: bool,
    },
    /// `chmod a+x`
    MakeExecutable { path: String, privileged: bool },
    /// Add `entry` as a resource of `jar`, working inside `dir`
    UpdateJar {
        dir: String,
        jar: String,
        entry: String,
        privileged: bool,
    },
    /// Recursive directory removal
    RemoveDir { path: String, privileged: bool },
    /// Single file removal
    RemoveFile { path: String, privileged: bool },
    /// Make the service manager re-read its unit definitions
    ReloadServiceManager,
    StartService { name: String },
    StopService { name: String },
}

impl RemoteOp {
    pub fn mkdir(path: impl Into<String>) -> Self {
        Self::MakeDir {
            path: path.into(),
            privileged: false,
        }
    }

    pub fn sudo_mkdir(path: impl Into<String>) -> Self {
        Self::MakeDir {
            path: path.into(),
            privileged: true,
        }
    }

    pub fn sudo_copy(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::Copy {
            from: from.into(),
            to: to.into(),
            privileged: true,
        }
    }

    pub fn sudo_copy_contents(from_dir: impl Into<String>, to_dir: impl Into<String>) -> Self {
        Self::CopyContents {
            from_dir: from_dir.into(),
            to_dir: to_dir.into(),
            privileged: true,
        }
    }

    pub fn sudo_move(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::Move {
            from: from.into(),
            to: to.into(),
            privileged: true,
        }
    }

    pub fn sudo_make_executable(path: impl Into<String>) -> Self {
        Self::MakeExecutable {
            path: path.into(),
            privileged: true,
        }
    }

    pub fn sudo_update_jar(
        dir: impl Into<String>,
        jar: impl Into<String>,
        entry: impl Into<String>,
    ) -> Self {
        Self::UpdateJar {
            dir: dir.into(),
            jar: jar.into(),
            entry: entry.into(),
            privileged: true,
        }
    }

    pub fn sudo_remove_dir(path: impl Into<String>) -> Self {
        Self::RemoveDir {
            path: path.into(),
            privileged: true,
        }
    }

    pub fn sudo_remove_file(path: impl Into<String>) -> Self {
        Self::RemoveFile {
            path: path.into(),
            privileged: true,
        }
    }

    pub fn start_service(name: impl Into<String>) -> Self {
        Self::StartService { name: name.into() }
    }

    pub fn stop_service(name: impl Into<String>) -> Self {
        Self::StopService { name: name.into() }
    }

    /// Whether this operation needs root on the remote host
    pub fn is_privileged(&self) -> bool {
        match self {
            Self::MakeDir { privileged, .. }
            | Self::Copy { privileged, .. }
            | Self::CopyContents { privileged, .. }
            | Self::Move { privileged, .. }
            | Self::MakeExecutable { privileged, .. }
            | Self::UpdateJar { privileged, .. }
            | Self::RemoveDir { privileged, .. }
            | Self::RemoveFile { privileged, .. } => *privileged,
            Self::ReloadServiceManager | Self::StartService { .. } | Self::StopService { .. } => {
                true
            }
        }
    }

    /// Render as a POSIX shell command line
    pub fn to_shell(&self) -> String {
        let sudo = if self.is_privileged() { "sudo " } else { "" };
        match self {
            Self::MakeDir { path, .. } => format!("{}mkdir -p {}", sudo, quote(path)),
            Self::Copy { from, to, .. } => format!("{}cp {} {}", sudo, quote(from), quote(to)),
            Self::CopyContents { from_dir, to_dir, .. } => {
                format!("{}cp -r {}/* {}", sudo, quote(from_dir), quote(to_dir))
            }
            Self::Move { from, to, .. } => format!("{}mv {} {}", sudo, quote(from), quote(to)),
            Self::MakeExecutable { path, .. } => format!("{}chmod a+x {}", sudo, quote(path)),
            Self::UpdateJar {
                dir, jar, entry, ..
            } => format!(
                "cd {} && {}jar uf {} {}",
                quote(dir),
                sudo,
                quote(jar),
                quote(entry)
            ),
            Self::RemoveDir { path, .. } => format!("{}rm -rf {}", sudo, quote(path)),
            Self::RemoveFile { path, .. } => format!("{}rm {}", sudo, quote(path)),
            Self::ReloadServiceManager => format!("{}systemctl daemon-reload", sudo),
            Self::StartService { name } => format!("{}service {} start", sudo, quote(name)),
            Self::StopService { name } => format!("{}service {} stop", sudo, quote(name)),
        }
    }
}

impl std::fmt::Display for RemoteOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_shell())
    }
}

/// Render a sequence of operations, one command line per operation
pub fn render_shell(ops: &[RemoteOp]) -> Vec<String> {
    ops.iter().map(RemoteOp::to_shell).collect()
}

/// Quote a word for the shell, leaving plain paths untouched
fn quote(word: &str) -> String {
    let plain = !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "_./@%+=:,-".contains(c));
    if plain {
        word.to_string()
    } else {
        format!("'{}'", word.replace('\'', "'\\''"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unprivileged_mkdir_has_no_sudo() {
        assert_eq!(RemoteOp::mkdir("/tmp/ns/app/c").to_shell(), "mkdir -p /tmp/ns/app/c");
    }

    #[test]
    fn privileged_ops_use_sudo() {
        assert_eq!(
            RemoteOp::sudo_mkdir("/opt/ns/app/c").to_shell(),
            "sudo mkdir -p /opt/ns/app/c"
        );
        assert_eq!(
            RemoteOp::sudo_move("/tmp/a", "/opt/a").to_shell(),
            "sudo mv /tmp/a /opt/a"
        );
        assert_eq!(
            RemoteOp::sudo_remove_file("/usr/lib/systemd/system/x.service").to_shell(),
            "sudo rm /usr/lib/systemd/system/x.service"
        );
    }

    #[test]
    fn copy_contents_keeps_glob_unquoted() {
        assert_eq!(
            RemoteOp::sudo_copy_contents("/tmp/my dir", "/opt/x").to_shell(),
            "sudo cp -r '/tmp/my dir'/* /opt/x"
        );
    }

    #[cfg(unix)]
    #[test]
    fn copy_contents_copies_subdirectories() {
        let root = tempfile::tempdir().unwrap();
        let from = root.path().join("staging");
        let to = root.path().join("install");
        std::fs::create_dir_all(from.join("lib")).unwrap();
        std::fs::create_dir(&to).unwrap();
        std::fs::write(from.join("lib/dep.py"), "").unwrap();
        std::fs::write(from.join("job.py"), "").unwrap();
        let op = RemoteOp::CopyContents {
            from_dir: from.to_string_lossy().into_owned(),
            to_dir: to.to_string_lossy().into_owned(),
            privileged: false,
        };

        let status = std::process::Command::new("sh")
            .arg("-c")
            .arg(op.to_shell())
            .status()
            .unwrap();

        assert!(status.success());
        assert!(to.join("job.py").is_file());
        assert!(to.join("lib/dep.py").is_file());
    }

    #[test]
    fn update_jar_changes_directory_first() {
        assert_eq!(
            RemoteOp::sudo_update_jar("/opt/ns/app/c", "app.jar", "application.properties")
                .to_shell(),
            "cd /opt/ns/app/c && sudo jar uf app.jar application.properties"
        );
    }

    #[test]
    fn service_ops_render_service_commands() {
        assert_eq!(
            RemoteOp::ReloadServiceManager.to_shell(),
            "sudo systemctl daemon-reload"
        );
        assert_eq!(
            RemoteOp::start_service("ns-app-c").to_shell(),
            "sudo service ns-app-c start"
        );
        assert_eq!(
            RemoteOp::stop_service("ns-app-c").to_shell(),
            "sudo service ns-app-c stop"
        );
    }

    #[test]
    fn quote_escapes_single_quotes() {
        assert_eq!(quote("it's"), "'it'\\''s'");
        assert_eq!(quote(""), "''");
    }

    #[test]
    fn ops_serialize_with_tag() {
        let json = serde_json::to_value(RemoteOp::stop_service("svc")).unwrap();
        assert_eq!(json["op"], "stop_service");
        assert_eq!(json["name"], "svc");
    }
}
