//! Fixed on-disk structure of a ZEO instance home.

use std::path::{Path, PathBuf};

/// Subdirectories created under every instance home, in creation order.
pub const INSTANCE_DIRS: [&str; 4] = ["etc", "var", "log", "bin"];

/// Paths that make up one instance home.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceLayout {
    home: PathBuf,
    package: String,
}

impl InstanceLayout {
    pub fn new(home: impl Into<PathBuf>, package: impl Into<String>) -> Self {
        Self { home: home.into(), package: package.into() }
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Instance subdirectories (`etc`, `var`, `log`, `bin`).
    pub fn directories(&self) -> Vec<PathBuf> {
        INSTANCE_DIRS.iter().map(|dir| self.home.join(dir)).collect()
    }

    /// `etc/<package>.conf`
    pub fn config_file(&self) -> PathBuf {
        self.home.join("etc").join(format!("{}.conf", self.package))
    }

    /// `bin/<package>ctl`
    pub fn control_script(&self) -> PathBuf {
        self.home.join("bin").join(format!("{}ctl", self.package))
    }

    /// `bin/run<package>`
    pub fn run_script(&self) -> PathBuf {
        self.home.join("bin").join(format!("run{}", self.package))
    }
}
