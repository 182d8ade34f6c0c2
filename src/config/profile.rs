use serde::{Deserialize, Serialize};

/// One named server credential set as stored in the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub redmine_url: String,
    #[serde(default)]
    pub api_key: String,
}

impl Profile {
    pub fn new(name: &str, url: &str, api_key: &str) -> Self {
        Self {
            name: name.to_string(),
            redmine_url: normalize_url(url),
            api_key: api_key.to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        self.redmine_url.trim_end_matches('/')
    }

    pub fn masked_api_key(&self) -> String {
        mask_api_key(&self.api_key)
    }

    pub fn issue_url(&self, id: u32) -> String {
        format!("{}/issues/{id}", self.base_url())
    }
}

pub fn normalize_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Keys of up to 8 characters are fully starred; longer keys keep 4 characters on each end.
pub fn mask_api_key(key: &str) -> String {
    let chars = key.chars().collect::<Vec<_>>();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }

    let head = chars[..4].iter().collect::<String>();
    let tail = chars[chars.len() - 4..].iter().collect::<String>();
    format!("{head}{}{tail}", "*".repeat(chars.len() - 8))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_trailing_slashes_from_url() {
        let profile = Profile::new("work", "https://redmine.example.test//", "key");
        assert_eq!(profile.redmine_url, "https://redmine.example.test");
    }

    #[test]
    fn masks_short_keys_entirely() {
        assert_eq!(mask_api_key("abc123"), "******");
        assert_eq!(mask_api_key(""), "");
    }

    #[test]
    fn masks_middle_of_long_keys() {
        assert_eq!(mask_api_key("0123456789abcdef"), "0123********cdef");
    }

    #[test]
    fn builds_issue_url_from_hand_edited_base() {
        let profile = Profile {
            name: "legacy".to_string(),
            redmine_url: "https://tracker.example.test/redmine/".to_string(),
            api_key: String::new(),
        };
        assert_eq!(
            profile.issue_url(42),
            "https://tracker.example.test/redmine/issues/42"
        );
    }
}
