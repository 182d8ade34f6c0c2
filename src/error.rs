use std::io;

use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("profile '{0}' not found")]
    ProfileNotFound(String),
    #[error("no profiles configured. run `redmine profile add <name> <url> <api-key>`")]
    NoProfilesConfigured,
    #[error("configuration error: {0}")]
    Config(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("api request failed with status {status}: {body}")]
    Api { status: u16, body: String },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("config file format error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("url parse error: {0}")]
    Url(#[from] url::ParseError),
}
