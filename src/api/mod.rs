pub mod client;
pub mod issues;
pub mod lookups;
pub mod models;
pub mod search;

pub use client::RedmineClient;
