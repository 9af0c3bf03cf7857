//! `InstanceFilesystem` implementation backed by the host filesystem.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use nix::sys::stat::{Mode, umask};

use crate::domain::AppError;
use crate::ports::InstanceFilesystem;

/// Host filesystem adapter.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl InstanceFilesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_dir(&self, path: &Path) -> Result<(), AppError> {
        fs::create_dir(path).map_err(|e| AppError::at_path(path, e))
    }

    fn read_to_string(&self, path: &Path) -> Result<String, AppError> {
        fs::read_to_string(path).map_err(|e| AppError::at_path(path, e))
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        fs::write(path, content).map_err(|e| AppError::at_path(path, e))
    }

    fn mode(&self, path: &Path) -> Result<u32, AppError> {
        let metadata = fs::metadata(path).map_err(|e| AppError::at_path(path, e))?;
        Ok(metadata.permissions().mode() & 0o7777)
    }

    fn set_mode(&self, path: &Path, mode: u32) -> Result<(), AppError> {
        fs::set_permissions(path, fs::Permissions::from_mode(mode))
            .map_err(|e| AppError::at_path(path, e))
    }

    fn umask(&self) -> u32 {
        // umask(2) can only be read by setting it, so restore immediately.
        let current = umask(Mode::from_bits_truncate(0o022));
        umask(current);
        u32::from(current.bits())
    }
}
