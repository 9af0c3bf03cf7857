mod action_reporter;
mod instance_filesystem;

pub use action_reporter::{ActionReporter, NoopReporter};
pub use instance_filesystem::InstanceFilesystem;
