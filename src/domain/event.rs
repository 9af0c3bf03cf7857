use std::fmt;
use std::path::PathBuf;

/// A filesystem action taken (or declined) while materializing an instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstanceEvent {
    CreatedDirectory(PathBuf),
    WroteFile(PathBuf),
    /// Existing file differs from the rendered template and was left alone.
    ConflictSkipped(PathBuf),
    ChangedMode { path: PathBuf, mode: u32 },
}

impl InstanceEvent {
    pub fn is_warning(&self) -> bool {
        matches!(self, InstanceEvent::ConflictSkipped(_))
    }
}

impl fmt::Display for InstanceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstanceEvent::CreatedDirectory(path) => {
                write!(f, "Created directory {}", path.display())
            }
            InstanceEvent::WroteFile(path) => write!(f, "Wrote file {}", path.display()),
            InstanceEvent::ConflictSkipped(path) => {
                write!(f, "Warning: not overwriting existing file '{}'", path.display())
            }
            InstanceEvent::ChangedMode { path, mode } => {
                write!(f, "Changed mode for {} to {:o}", path.display(), mode)
            }
        }
    }
}
