pub mod auth;
pub mod config;
pub mod issue_add;
pub mod issue_edit;
pub mod issues;
pub mod profile;
pub mod prompt;
pub mod search;
pub mod users;
