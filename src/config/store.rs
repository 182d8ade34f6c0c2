use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::AppResult;

use super::model::Config;

pub trait ConfigStore {
    fn load(&self) -> AppResult<Config>;
    fn save(&self, config: &Config) -> AppResult<()>;
}

/// YAML file holding every profile. A missing file reads as an empty config.
#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> AppResult<Config> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "config file absent, starting empty");
            return Ok(Config::default());
        }

        let raw = fs::read_to_string(&self.path)?;
        if raw.trim().is_empty() {
            return Ok(Config::default());
        }

        let mut config: Config = serde_yaml::from_str(&raw)?;
        for name in config.repair_names() {
            warn!(profile = %name, "profile name disagreed with its key; using the key");
        }

        debug!(
            path = %self.path.display(),
            profiles = config.profiles.len(),
            "loaded config"
        );
        Ok(config)
    }

    fn save(&self, config: &Config) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let payload = serde_yaml::to_string(config)?;
        fs::write(&self.path, payload)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;

            let mut perms = fs::metadata(&self.path)?.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(&self.path, perms)?;
        }

        debug!(path = %self.path.display(), "saved config");
        Ok(())
    }
}
