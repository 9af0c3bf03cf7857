//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::{Path, PathBuf};

use crate::adapters::{InstanceTemplates, LocalFilesystem, StdoutReporter};
use crate::app::{
    AppContext,
    commands::{create, resolve},
};
use crate::ports::ActionReporter;

pub use crate::app::commands::resolve::ResolverInputs;
pub use crate::domain::{AppError, InstanceEvent, InstanceLayout, InstanceParams, ServerAddress};

/// Resolve template parameters for an instance at `home` on the host filesystem.
pub fn resolve_params(
    inputs: &ResolverInputs,
    home: &Path,
    address: Option<&str>,
) -> Result<InstanceParams, AppError> {
    resolve::execute(&LocalFilesystem::new(), inputs, home, address)
}

/// Materialize an instance from already resolved parameters, reporting each
/// action to `reporter`.
pub fn create_instance_with<R: ActionReporter>(
    params: &InstanceParams,
    reporter: R,
) -> Result<InstanceLayout, AppError> {
    let ctx = AppContext::new(LocalFilesystem::new(), reporter);
    let templates = InstanceTemplates::load()?;
    create::execute(&ctx, &templates, params)
}

/// Resolve parameters and create the instance home, printing each action.
pub fn create_instance(
    inputs: &ResolverInputs,
    home: &Path,
    address: Option<&str>,
) -> Result<InstanceLayout, AppError> {
    let params = resolve_params(inputs, home, address)?;
    create_instance_with(&params, StdoutReporter)
}

/// Resolver inputs rooted at the process's current directory.
pub fn default_inputs(
    search_path: Vec<PathBuf>,
    zdaemon_home: Option<PathBuf>,
    python: Option<PathBuf>,
) -> Result<ResolverInputs, AppError> {
    Ok(ResolverInputs { search_path, zdaemon_home, python, current_dir: std::env::current_dir()? })
}
