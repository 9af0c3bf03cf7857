pub mod assets;
pub mod local_filesystem;
pub mod stdout_reporter;

pub use assets::{InstanceTemplate, InstanceTemplates};
pub use local_filesystem::LocalFilesystem;
pub use stdout_reporter::StdoutReporter;
