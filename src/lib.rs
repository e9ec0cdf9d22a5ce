pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{HttpJsonSource, InMemoryUserStore};
pub use config::TomlConfig;
pub use core::client::GithubOrgClient;
pub use domain::model::UserRecord;
pub use utils::error::{OrgReposError, Result};
