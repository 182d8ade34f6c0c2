pub mod model;
pub mod paths;
pub mod profile;
pub mod store;

pub use model::Config;
pub use paths::AppPaths;
pub use profile::Profile;
pub use store::{ConfigStore, FileConfigStore};
