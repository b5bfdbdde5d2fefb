//! Container invocation descriptor.

use std::ffi::OsString;
use std::path::PathBuf;
use uuid::Uuid;

/// Prefix of generated container names
const CONTAINER_NAME_PREFIX: &str = "linux-packages";

/// Access mode of a bind mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountMode {
    /// `:rw`
    ReadWrite,
    /// `:ro`
    ReadOnly,
}

impl MountMode {
    fn suffix(self) -> &'static str {
        match self {
            MountMode::ReadWrite => "rw",
            MountMode::ReadOnly => "ro",
        }
    }
}

/// Host directory bind-mounted into the container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mount {
    /// Host path
    pub host: PathBuf,
    /// Mount point inside the container
    pub container: String,
    /// Explicit access mode; the runtime default applies when `None`
    pub mode: Option<MountMode>,
}

impl Mount {
    /// Renders the `-v` value, e.g. `/repo/packaging:/build-inside:rw`
    ///
    /// The host path is kept byte for byte, it may not be UTF-8.
    pub fn to_volume_arg(&self) -> OsString {
        let mut arg = self.host.clone().into_os_string();
        arg.push(":");
        arg.push(&self.container);
        if let Some(mode) = self.mode {
            arg.push(":");
            arg.push(mode.suffix());
        }
        arg
    }
}

/// One `run --rm` invocation of a container image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerRun {
    /// Unique container name, used to force-remove it on interrupt
    pub name: String,
    /// Image to run
    pub image: String,
    /// Environment variables, in order
    pub env: Vec<(String, String)>,
    /// Bind mounts, in order
    pub mounts: Vec<Mount>,
    /// Working directory inside the container
    pub workdir: Option<String>,
    /// Command and arguments run inside the container
    pub command: Vec<String>,
}

impl ContainerRun {
    /// Creates an invocation of `image` with a fresh unique name.
    pub fn new(image: impl Into<String>) -> Self {
        Self {
            name: format!("{}-{}", CONTAINER_NAME_PREFIX, Uuid::new_v4()),
            image: image.into(),
            env: Vec::new(),
            mounts: Vec::new(),
            workdir: None,
            command: Vec::new(),
        }
    }

    /// Adds an environment variable.
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    /// Adds a bind mount.
    pub fn mount(
        mut self,
        host: impl Into<PathBuf>,
        container: impl Into<String>,
        mode: Option<MountMode>,
    ) -> Self {
        self.mounts.push(Mount {
            host: host.into(),
            container: container.into(),
            mode,
        });
        self
    }

    /// Sets the working directory.
    pub fn workdir(mut self, dir: impl Into<String>) -> Self {
        self.workdir = Some(dir.into());
        self
    }

    /// Appends command arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.command.extend(args.into_iter().map(Into::into));
        self
    }

    /// Looks up an environment variable set on this invocation.
    pub fn env_value(&self, key: &str) -> Option<&str> {
        self.env
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Full argument list for the container CLI, starting with `run`.
    pub fn to_args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "run".into(),
            "--rm".into(),
            "--name".into(),
            self.name.clone().into(),
        ];

        for (key, value) in &self.env {
            args.push("-e".into());
            args.push(format!("{key}={value}").into());
        }

        for mount in &self.mounts {
            args.push("-v".into());
            args.push(mount.to_volume_arg());
        }

        if let Some(workdir) = &self.workdir {
            args.push("-w".into());
            args.push(workdir.into());
        }

        args.push(self.image.clone().into());
        args.extend(self.command.iter().map(OsString::from));
        args
    }
}
