//! mkzeoinstance: scaffold the home directory of a ZEO storage server instance.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    ResolverInputs, create_instance, create_instance_with, default_inputs, resolve_params,
};
pub use domain::{AppError, InstanceEvent, InstanceLayout, InstanceParams, ServerAddress};
pub use ports::{ActionReporter, NoopReporter};
