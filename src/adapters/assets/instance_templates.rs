use include_dir::{Dir, include_dir};
use minijinja::{AutoEscape, Environment};

use crate::domain::{AppError, InstanceParams};

static TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

/// The three files written into an instance home.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstanceTemplate {
    /// `etc/zeo.conf`
    Config,
    /// `bin/zeoctl`
    ControlScript,
    /// `bin/runzeo`
    RunScript,
}

impl InstanceTemplate {
    pub const ALL: [InstanceTemplate; 3] =
        [InstanceTemplate::Config, InstanceTemplate::ControlScript, InstanceTemplate::RunScript];

    /// Asset file name under `src/assets/templates`.
    pub fn asset_name(self) -> &'static str {
        match self {
            InstanceTemplate::Config => "zeo.conf.j2",
            InstanceTemplate::ControlScript => "zeoctl.j2",
            InstanceTemplate::RunScript => "runzeo.j2",
        }
    }

    /// Whether the rendered file must be executable.
    pub fn is_executable(self) -> bool {
        !matches!(self, InstanceTemplate::Config)
    }
}

/// Renders the embedded instance templates.
pub struct InstanceTemplates {
    env: Environment<'static>,
}

impl InstanceTemplates {
    pub fn load() -> Result<Self, AppError> {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_auto_escape_callback(|_name: &str| AutoEscape::None);

        for template in InstanceTemplate::ALL {
            let name = template.asset_name();
            let source = TEMPLATES_DIR
                .get_file(name)
                .and_then(|file| file.contents_utf8())
                .ok_or_else(|| AppError::Template {
                    name: name.to_string(),
                    details: "missing or not UTF-8".to_string(),
                })?;
            env.add_template(name, source).map_err(|e| AppError::Template {
                name: name.to_string(),
                details: e.to_string(),
            })?;
        }

        Ok(Self { env })
    }

    pub fn render(
        &self,
        template: InstanceTemplate,
        params: &InstanceParams,
    ) -> Result<String, AppError> {
        let name = template.asset_name();
        let to_error = |e: minijinja::Error| AppError::Template {
            name: name.to_string(),
            details: e.to_string(),
        };
        self.env.get_template(name).map_err(to_error)?.render(params).map_err(to_error)
    }
}
