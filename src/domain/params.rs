use std::path::Path;

use serde::Serialize;

use super::{AppError, InstanceLayout, ServerAddress};

/// Lowercase package name used for file names.
pub const PACKAGE: &str = "zeo";

/// Display package name used in script headers.
pub const PACKAGE_DISPLAY: &str = "ZEO";

/// Values substituted into the instance templates.
///
/// Field names are the template placeholder names. Paths are kept as UTF-8
/// text; a path that is not valid UTF-8 is rejected rather than rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstanceParams {
    pub package: String,
    #[serde(rename = "PACKAGE")]
    pub package_display: String,
    pub zodb3_home: String,
    pub zdaemon_home: String,
    pub instance_home: String,
    pub address: String,
    pub python: String,
}

impl InstanceParams {
    pub fn new(
        zodb3_home: &Path,
        zdaemon_home: &Path,
        instance_home: &Path,
        address: &ServerAddress,
        python: &Path,
    ) -> Result<Self, AppError> {
        Ok(Self {
            package: PACKAGE.to_string(),
            package_display: PACKAGE_DISPLAY.to_string(),
            zodb3_home: path_text("ZODB home", zodb3_home)?,
            zdaemon_home: path_text("zdaemon home", zdaemon_home)?,
            instance_home: path_text("instance home", instance_home)?,
            address: address.to_string(),
            python: path_text("python interpreter", python)?,
        })
    }

    pub fn layout(&self) -> InstanceLayout {
        InstanceLayout::new(&self.instance_home, &self.package)
    }
}

fn path_text(what: &str, path: &Path) -> Result<String, AppError> {
    path.to_str().map(str::to_string).ok_or_else(|| {
        AppError::usage(format!("{} is not valid UTF-8: {}", what, path.display()))
    })
}
