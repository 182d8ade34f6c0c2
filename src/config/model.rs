use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{AppError, AppResult};

use super::profile::{Profile, normalize_url};

/// Root record of the config file.
///
/// Profiles are kept in a `BTreeMap`, so whenever a profile has to be picked
/// without an explicit name (no default set, or the default was removed) the
/// lexicographically smallest name wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub default_profile: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub profiles: BTreeMap<String, Profile>,
}

impl Config {
    /// Inserts or replaces `name`. The first profile added becomes the default.
    pub fn add_profile(&mut self, name: &str, url: &str, api_key: &str) -> AppResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::InvalidInput(
                "profile name must not be empty".to_string(),
            ));
        }

        let was_empty = self.profiles.is_empty();
        self.profiles
            .insert(name.to_string(), Profile::new(name, url, api_key));

        if was_empty || self.default_profile.is_empty() {
            self.default_profile = name.to_string();
        }

        Ok(())
    }

    pub fn remove_profile(&mut self, name: &str) -> AppResult<Profile> {
        let name = name.trim();
        let removed = self
            .profiles
            .remove(name)
            .ok_or_else(|| AppError::ProfileNotFound(name.to_string()))?;

        if self.default_profile == name {
            self.default_profile = self.first_profile_name().unwrap_or_default();
        }

        Ok(removed)
    }

    pub fn set_default_profile(&mut self, name: &str) -> AppResult<()> {
        let name = name.trim();
        if !self.profiles.contains_key(name) {
            return Err(AppError::ProfileNotFound(name.to_string()));
        }

        self.default_profile = name.to_string();
        Ok(())
    }

    pub fn current_profile(&self) -> AppResult<Profile> {
        if self.default_profile.is_empty() && self.profiles.is_empty() {
            return Err(AppError::NoProfilesConfigured);
        }

        if self.default_profile.is_empty() {
            return self
                .profiles
                .values()
                .next()
                .cloned()
                .ok_or(AppError::NoProfilesConfigured);
        }

        self.profile(&self.default_profile)
    }

    /// Resolves `requested` when given, otherwise falls back to [`Config::current_profile`].
    pub fn resolve(&self, requested: Option<&str>) -> AppResult<Profile> {
        match requested {
            Some(name) => self.profile(name),
            None => self.current_profile(),
        }
    }

    pub fn profile(&self, name: &str) -> AppResult<Profile> {
        let name = name.trim();
        self.profiles
            .get(name)
            .cloned()
            .ok_or_else(|| AppError::ProfileNotFound(name.to_string()))
    }

    pub fn set_api_key(&mut self, name: &str, api_key: &str) -> AppResult<()> {
        let profile = self.profile_mut(name)?;
        profile.api_key = api_key.to_string();
        Ok(())
    }

    pub fn set_url(&mut self, name: &str, url: &str) -> AppResult<()> {
        let profile = self.profile_mut(name)?;
        profile.redmine_url = normalize_url(url);
        Ok(())
    }

    pub fn is_default(&self, name: &str) -> bool {
        !self.default_profile.is_empty() && self.default_profile == name.trim()
    }

    /// Forces every record's `name` to match its map key. Returns the names that were repaired.
    pub fn repair_names(&mut self) -> Vec<String> {
        let mut repaired = Vec::new();
        for (key, profile) in &mut self.profiles {
            if profile.name != *key {
                profile.name = key.clone();
                repaired.push(key.clone());
            }
        }
        repaired
    }

    fn profile_mut(&mut self, name: &str) -> AppResult<&mut Profile> {
        let name = name.trim();
        self.profiles
            .get_mut(name)
            .ok_or_else(|| AppError::ProfileNotFound(name.to_string()))
    }

    fn first_profile_name(&self) -> Option<String> {
        self.profiles.keys().next().cloned()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<BTreeMap<String, Profile>, D::Error>
where
    D: Deserializer<'de>,
{
    let profiles = Option::<BTreeMap<String, Profile>>::deserialize(deserializer)?;
    Ok(profiles.unwrap_or_default())
}
