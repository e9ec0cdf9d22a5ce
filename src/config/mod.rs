#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command, UsersAction};
pub use toml_config::{GithubConfig, TomlConfig, UsersConfig};
