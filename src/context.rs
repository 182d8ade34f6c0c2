use std::path::PathBuf;

use tracing::info;

use crate::api::RedmineClient;
use crate::config::{AppPaths, Config, ConfigStore, FileConfigStore, Profile};
use crate::error::AppResult;
use crate::output::{Output, OutputMode};

/// Everything one command invocation needs: the loaded config, where it lives,
/// which profile was requested on the command line, and how to print.
#[derive(Debug)]
pub struct AppContext {
    pub requested_profile: Option<String>,
    pub paths: AppPaths,
    pub store: FileConfigStore,
    pub config: Config,
    pub output: Output,
}

impl AppContext {
    pub fn bootstrap(
        requested_profile: Option<String>,
        config_file: Option<PathBuf>,
        json: bool,
    ) -> AppResult<Self> {
        let requested_profile = requested_profile
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());
        let paths = AppPaths::discover(config_file)?;
        let store = FileConfigStore::new(paths.config_file());
        let config = store.load()?;
        let output = Output::new(OutputMode::from(json));

        Ok(Self {
            requested_profile,
            paths,
            store,
            config,
            output,
        })
    }

    /// The `--profile` selection when given, otherwise the stored default.
    pub fn profile(&self) -> AppResult<Profile> {
        self.config.resolve(self.requested_profile.as_deref())
    }

    pub fn client(&self) -> AppResult<RedmineClient> {
        let profile = self.profile()?;
        info!(profile = %profile.name, url = %profile.base_url(), "using profile");
        RedmineClient::from_profile(&profile)
    }

    pub fn save(&self) -> AppResult<()> {
        self.store.save(&self.config)
    }
}
