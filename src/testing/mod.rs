
pub use memory_filesystem::MemoryFilesystem;
pub use recording_reporter::RecordingReporter;
