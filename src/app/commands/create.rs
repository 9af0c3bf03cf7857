//! Instance materializer: directories, config file, and executable scripts.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::adapters::{InstanceTemplate, InstanceTemplates};
use crate::app::AppContext;
use crate::domain::{AppError, InstanceEvent, InstanceLayout, InstanceParams};
use crate::ports::{ActionReporter, InstanceFilesystem};

/// Create the instance home described by `params`.
///
/// Creates the home and its `etc`, `var`, `log`, `bin` subdirectories, then
/// writes `etc/zeo.conf`, `bin/zeoctl` and `bin/runzeo`. Existing files that
/// differ from the rendered template are reported and left untouched.
pub fn execute<F, R>(
    ctx: &AppContext<F, R>,
    templates: &InstanceTemplates,
    params: &InstanceParams,
) -> Result<InstanceLayout, AppError>
where
    F: InstanceFilesystem,
    R: ActionReporter,
{
    let layout = params.layout();

    make_dir(ctx, layout.home())?;
    for dir in layout.directories() {
        make_dir(ctx, &dir)?;
    }

    for template in InstanceTemplate::ALL {
        let path = target_path(&layout, template);
        let content = templates.render(template, params)?;
        if template.is_executable() {
            make_executable_file(ctx, &path, &content)?;
        } else {
            make_file(ctx, &path, &content)?;
        }
    }

    Ok(layout)
}

fn target_path(layout: &InstanceLayout, template: InstanceTemplate) -> PathBuf {
    match template {
        InstanceTemplate::Config => layout.config_file(),
        InstanceTemplate::ControlScript => layout.control_script(),
        InstanceTemplate::RunScript => layout.run_script(),
    }
}

/// Ensure `path` is a directory, creating missing ancestors parent-first.
pub fn make_dir<F, R>(ctx: &AppContext<F, R>, path: &Path) -> Result<(), AppError>
where
    F: InstanceFilesystem,
    R: ActionReporter,
{
    let fs = ctx.filesystem();
    if fs.is_dir(path) {
        return Ok(());
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && path.file_name().is_some()
        && !fs.is_dir(parent)
    {
        make_dir(ctx, parent)?;
    }

    fs.create_dir(path)?;
    ctx.report(InstanceEvent::CreatedDirectory(path.to_path_buf()));
    Ok(())
}

/// Write `content` to `path` unless a file with other content is already there.
///
/// Existing content is compared after trimming surrounding whitespace on both
/// sides. An existing file that is blank after trimming is rewritten.
pub fn make_file<F, R>(ctx: &AppContext<F, R>, path: &Path, content: &str) -> Result<(), AppError>
where
    F: InstanceFilesystem,
    R: ActionReporter,
{
    if let Some(parent) = path.parent() {
        make_dir(ctx, parent)?;
    }

    let fs = ctx.filesystem();
    if fs.exists(path) {
        let existing = fs.read_to_string(path)?;
        let existing = existing.trim();
        if !existing.is_empty() {
            if existing != content.trim() {
                ctx.report(InstanceEvent::ConflictSkipped(path.to_path_buf()));
            } else {
                debug!(path = %path.display(), "file already up to date");
            }
            return Ok(());
        }
    }

    fs.write_file(path, content)?;
    ctx.report(InstanceEvent::WroteFile(path.to_path_buf()));
    Ok(())
}

/// `make_file`, then force the mode to `0o777 & !umask`.
pub fn make_executable_file<F, R>(
    ctx: &AppContext<F, R>,
    path: &Path,
    content: &str,
) -> Result<(), AppError>
where
    F: InstanceFilesystem,
    R: ActionReporter,
{
    make_file(ctx, path, content)?;

    let fs = ctx.filesystem();
    let mode = 0o777 & !fs.umask();
    if fs.mode(path)? != mode {
        fs.set_mode(path, mode)?;
        ctx.report(InstanceEvent::ChangedMode { path: path.to_path_buf(), mode });
    }
    Ok(())
}
