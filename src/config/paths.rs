use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

const APP_DIR: &str = ".redminecli";
const CONFIG_FILE: &str = "config";

#[derive(Debug, Clone)]
pub struct AppPaths {
    config_file: PathBuf,
}

impl AppPaths {
    /// Resolves `~/.redminecli/config`, or `override_file` when one is given.
    pub fn discover(override_file: Option<PathBuf>) -> AppResult<Self> {
        if let Some(config_file) = override_file {
            return Ok(Self::from_file(config_file));
        }

        let home = dirs::home_dir()
            .ok_or_else(|| AppError::Config("unable to resolve home directory".to_string()))?;

        Ok(Self::from_file(home.join(APP_DIR).join(CONFIG_FILE)))
    }

    fn from_file(config_file: PathBuf) -> Self {
        Self { config_file }
    }

    pub fn config_file(&self) -> &Path {
        &self.config_file
    }
}
