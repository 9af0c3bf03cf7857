use std::path::Path;

use crate::domain::AppError;

/// Port for the filesystem primitives the instance materializer needs.
///
/// Paths are absolute; implementations never delete anything.
pub trait InstanceFilesystem {
    /// True when `path` exists (file or directory).
    fn exists(&self, path: &Path) -> bool;

    /// True when `path` is an existing directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Create a single directory. The parent must already exist.
    fn create_dir(&self, path: &Path) -> Result<(), AppError>;

    fn read_to_string(&self, path: &Path) -> Result<String, AppError>;

    /// Create or truncate `path` and write `content`.
    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError>;

    /// Permission bits of `path` (no file type bits).
    fn mode(&self, path: &Path) -> Result<u32, AppError>;

    fn set_mode(&self, path: &Path, mode: u32) -> Result<(), AppError>;

    /// The file mode creation mask of the running process.
    fn umask(&self) -> u32;
}
