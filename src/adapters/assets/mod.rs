mod instance_templates;

pub use instance_templates::{InstanceTemplate, InstanceTemplates};
