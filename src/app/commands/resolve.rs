//! Parameter resolution: locate dependencies and build `InstanceParams`.

use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::domain::{AppError, InstanceParams, ServerAddress};
use crate::ports::InstanceFilesystem;

/// Package directory that marks the storage engine on the search path.
const STORAGE_PACKAGE: &str = "ZODB";

/// Package directory that marks the daemon-management library on the search path.
const DAEMON_PACKAGE: &str = "zdaemon";

/// Interpreters tried on `PATH` when none is configured, in order.
const INTERPRETER_CANDIDATES: [&str; 2] = ["python3", "python"];

/// Dependency locations the resolver works from.
#[derive(Debug, Clone, Default)]
pub struct ResolverInputs {
    /// Directories probed for the `ZODB` and `zdaemon` packages, first match wins.
    pub search_path: Vec<PathBuf>,
    /// Explicit installation root of `zdaemon`; probed on `search_path` when absent.
    pub zdaemon_home: Option<PathBuf>,
    /// Interpreter written into the generated scripts; looked up on `PATH` when absent.
    pub python: Option<PathBuf>,
    /// Base for relative instance homes.
    pub current_dir: PathBuf,
}

/// Resolve every template parameter for the instance at `home`.
pub fn execute<F: InstanceFilesystem>(
    fs: &F,
    inputs: &ResolverInputs,
    home: &Path,
    address: Option<&str>,
) -> Result<InstanceParams, AppError> {
    let instance_home = absolute_home(&inputs.current_dir, home);

    let zodb3_home = find_package_root(fs, &inputs.search_path, STORAGE_PACKAGE).ok_or_else(
        || AppError::dependency_not_found("Can't find ZODB software (not in search path)"),
    )?;

    let zdaemon_home = match &inputs.zdaemon_home {
        Some(dir) => dir.clone(),
        None => find_package_root(fs, &inputs.search_path, DAEMON_PACKAGE).ok_or_else(|| {
            AppError::dependency_not_found("Can't find zdaemon software (not in search path)")
        })?,
    };

    let python = match &inputs.python {
        Some(path) => path.clone(),
        None => locate_interpreter()?,
    };

    let address = ServerAddress::from_arg(address)?;

    debug!(
        instance_home = %instance_home.display(),
        zodb3_home = %zodb3_home.display(),
        zdaemon_home = %zdaemon_home.display(),
        python = %python.display(),
        %address,
        "resolved instance parameters"
    );

    InstanceParams::new(&zodb3_home, &zdaemon_home, &instance_home, &address, &python)
}

/// First search path entry that contains `package` as a subdirectory or file.
fn find_package_root<F: InstanceFilesystem>(
    fs: &F,
    search_path: &[PathBuf],
    package: &str,
) -> Option<PathBuf> {
    let found = search_path.iter().find(|entry| fs.exists(&entry.join(package))).cloned();
    debug!(package, found = ?found, "probed search path");
    found
}

fn locate_interpreter() -> Result<PathBuf, AppError> {
    INTERPRETER_CANDIDATES.iter().find_map(|name| which::which(name).ok()).ok_or_else(|| {
        AppError::dependency_not_found("Can't find a Python interpreter (not in PATH)")
    })
}

/// Make `home` absolute against `current_dir`, normalizing `.` and `..` logically.
pub(crate) fn absolute_home(current_dir: &Path, home: &Path) -> PathBuf {
    if home.is_absolute() {
        normalize_path(home)
    } else {
        normalize_path(&current_dir.join(home))
    }
}

/// Normalize path by resolving `.` and `..` components logically.
/// This does not access the filesystem.
fn normalize_path(path: &Path) -> PathBuf {
    let mut ret = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(..) | Component::RootDir => ret.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                ret.pop();
            }
            Component::Normal(c) => ret.push(c),
        }
    }
    ret
}
