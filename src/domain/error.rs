use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for mkzeoinstance operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Filesystem operation failed on a specific path.
    #[error("{}: {source}", path.display())]
    FileSystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Command line could not be interpreted.
    #[error("{0}")]
    Usage(String),

    /// The `[host:]port` argument is malformed.
    #[error("Invalid address '{value}': {reason}")]
    InvalidAddress { value: String, reason: String },

    /// A required sibling package could not be located.
    #[error("{0}")]
    DependencyNotFound(String),

    /// Template registration or rendering failed.
    #[error("Template error in '{name}': {details}")]
    Template { name: String, details: String },
}

impl AppError {
    pub fn usage<S: Into<String>>(message: S) -> Self {
        AppError::Usage(message.into())
    }

    /// Wrap an I/O error with the path it failed on.
    pub fn at_path(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AppError::FileSystem { path: path.into(), source }
    }

    pub fn dependency_not_found<S: Into<String>>(message: S) -> Self {
        AppError::DependencyNotFound(message.into())
    }

    /// Process exit code for this error.
    ///
    /// Anticipated failures (bad invocation, missing dependency) exit with 2;
    /// anything else aborts the run with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Usage(_)
            | AppError::InvalidAddress { .. }
            | AppError::DependencyNotFound(_) => 2,
            AppError::Io(_) | AppError::FileSystem { .. } | AppError::Template { .. } => 1,
        }
    }

    /// Whether the message belongs on stdout next to the usage text.
    pub fn is_anticipated(&self) -> bool {
        self.exit_code() == 2
    }

    /// Provide an `io::ErrorKind`-like view for callers matching on kinds.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) | AppError::FileSystem { source: err, .. } => err.kind(),
            AppError::Usage(_) | AppError::InvalidAddress { .. } => io::ErrorKind::InvalidInput,
            AppError::DependencyNotFound(_) => io::ErrorKind::NotFound,
            AppError::Template { .. } => io::ErrorKind::Other,
        }
    }
}
