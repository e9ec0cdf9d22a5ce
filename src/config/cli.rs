use crate::config::toml_config::TomlConfig;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "orgrepos")]
#[command(about = "List a GitHub organization's repositories and page through user data")]
pub struct CliConfig {
    #[arg(long, global = true, help = "TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, global = true, help = "Organization URL template, e.g. https://api.github.com/orgs/{}")]
    pub org_url: Option<String>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the organization payload
    Org { org: String },

    /// Print the organization's public repository names
    Repos {
        org: String,

        #[arg(long, help = "Only repositories whose license.key matches")]
        license: Option<String>,
    },

    /// Page through the user_data seed file
    Users {
        #[arg(long, help = "CSV with a user_id,name,email,age header")]
        csv: Option<String>,

        #[arg(long)]
        page_size: Option<usize>,

        #[arg(long)]
        batch_size: Option<usize>,

        #[arg(long)]
        min_age: Option<u32>,

        #[command(subcommand)]
        action: UsersAction,
    },
}

#[derive(Debug, Clone, Copy, Subcommand)]
pub enum UsersAction {
    /// One row at a time
    Stream,
    /// Rows grouped into batches
    Batches,
    /// Rows fetched lazily page by page
    Paginate,
    /// Users older than the minimum age
    Adults,
    /// Average age across all users
    AverageAge,
}

impl CliConfig {
    /// Load the TOML file (if any) and lay the command-line overrides on top.
    pub fn resolve(&self) -> Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };

        if let Some(org_url) = &self.org_url {
            config.github.org_url = Some(org_url.clone());
        }

        if let Command::Users {
            csv,
            page_size,
            batch_size,
            min_age,
            ..
        } = &self.command
        {
            if csv.is_some() {
                config.users.csv_path = csv.clone();
            }
            if page_size.is_some() {
                config.users.page_size = *page_size;
            }
            if batch_size.is_some() {
                config.users.batch_size = *batch_size;
            }
            if min_age.is_some() {
                config.users.min_age = *min_age;
            }
        }

        Ok(config)
    }
}
