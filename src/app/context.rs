use crate::domain::InstanceEvent;
use crate::ports::{ActionReporter, InstanceFilesystem};

/// Application context holding dependencies for command execution.
pub struct AppContext<F: InstanceFilesystem, R: ActionReporter> {
    filesystem: F,
    reporter: R,
}

impl<F: InstanceFilesystem, R: ActionReporter> AppContext<F, R> {
    /// Create a new application context.
    pub fn new(filesystem: F, reporter: R) -> Self {
        Self { filesystem, reporter }
    }

    /// Get a reference to the filesystem port.
    pub fn filesystem(&self) -> &F {
        &self.filesystem
    }

    /// Get a reference to the action reporter.
    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub(crate) fn report(&self, event: InstanceEvent) {
        self.reporter.report(&event);
    }
}
