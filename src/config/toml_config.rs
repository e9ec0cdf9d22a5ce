use crate::core::users::DEFAULT_MIN_AGE;
use crate::utils::error::{OrgReposError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_ORG_URL: &str = "https://api.github.com/orgs/{}";
pub const DEFAULT_USER_AGENT: &str = "orgrepos";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_PAGE_SIZE: usize = 100;
pub const DEFAULT_BATCH_SIZE: usize = 50;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub github: GithubConfig,
    #[serde(default)]
    pub users: UsersConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GithubConfig {
    pub org_url: Option<String>,
    pub user_agent: Option<String>,
    pub token: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UsersConfig {
    pub csv_path: Option<String>,
    pub page_size: Option<usize>,
    pub batch_size: Option<usize>,
    pub min_age: Option<u32>,
}

impl TomlConfig {
    /// Load a config from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| OrgReposError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| OrgReposError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl GithubConfig {
    pub fn org_url(&self) -> &str {
        self.org_url.as_deref().unwrap_or(DEFAULT_ORG_URL)
    }

    pub fn user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }

    /// Configured token, falling back to `GITHUB_TOKEN`.
    pub fn token(&self) -> Option<String> {
        self.token
            .clone()
            .filter(|t| !t.trim().is_empty())
            .or_else(|| std::env::var("GITHUB_TOKEN").ok())
    }

    pub fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }
}

impl UsersConfig {
    pub fn page_size(&self) -> usize {
        self.page_size.unwrap_or(DEFAULT_PAGE_SIZE)
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size.unwrap_or(DEFAULT_BATCH_SIZE)
    }

    pub fn min_age(&self) -> u32 {
        self.min_age.unwrap_or(DEFAULT_MIN_AGE)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url_template("github.org_url", self.github.org_url())?;
        validation::validate_non_empty_string("github.user_agent", self.github.user_agent())?;
        validation::validate_positive_number(
            "github.timeout_seconds",
            self.github.timeout_seconds() as usize,
            1,
        )?;

        if let Some(path) = &self.users.csv_path {
            validation::validate_path("users.csv_path", path)?;
        }
        validation::validate_positive_number("users.page_size", self.users.page_size(), 1)?;
        validation::validate_positive_number("users.batch_size", self.users.batch_size(), 1)?;

        Ok(())
    }
}
