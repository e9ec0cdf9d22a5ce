use clap::Parser;
use orgrepos::config::{Command, UsersAction, UsersConfig};
use orgrepos::core::users;
use orgrepos::utils::validation::{validate_non_empty_string, validate_required_field, Validate};
use orgrepos::utils::logger;
use orgrepos::{CliConfig, GithubOrgClient, HttpJsonSource, InMemoryUserStore, Result, TomlConfig};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(&cli).await {
        tracing::error!("❌ {} (severity: {:?})", e, e.severity());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: &CliConfig) -> Result<()> {
    let config = cli.resolve()?;
    config.validate()?;

    match &cli.command {
        Command::Org { org } => {
            let client = org_client(&config, org)?;
            let payload = client.org().await?;
            println!("{}", serde_json::to_string_pretty(payload)?);
        }
        Command::Repos { org, license } => {
            let client = org_client(&config, org)?;
            let names = client.public_repos(license.as_deref()).await?;
            tracing::info!("{} repositories for {}", names.len(), client.org_name());
            for name in names {
                println!("{}", name);
            }
        }
        Command::Users { action, .. } => run_users(&config.users, *action)?,
    }

    Ok(())
}

fn org_client(config: &TomlConfig, org: &str) -> Result<GithubOrgClient<HttpJsonSource>> {
    validate_non_empty_string("org", org)?;
    let source = HttpJsonSource::from_config(&config.github)?;
    GithubOrgClient::new(org, source).with_org_url(config.github.org_url())
}

fn run_users(config: &UsersConfig, action: UsersAction) -> Result<()> {
    let csv_path = validate_required_field("users.csv_path", &config.csv_path)?;
    let mut store = InMemoryUserStore::new();
    store.seed_from_csv(csv_path)?;

    match action {
        UsersAction::Stream => {
            for user in users::stream_users(&store) {
                println!("{:?}", user?);
            }
        }
        UsersAction::Paginate => {
            for user in users::lazy_paginate(&store, config.page_size())? {
                println!("{:?}", user?);
            }
        }
        UsersAction::Batches => {
            for (index, batch) in users::stream_users_in_batches(&store, config.batch_size())?.enumerate() {
                let batch = batch?;
                println!("-- batch {} ({} users)", index + 1, batch.len());
                for user in batch {
                    println!("{:?}", user);
                }
            }
        }
        UsersAction::Adults => {
            let adults = users::batch_processing_with_min_age(
                &store,
                config.batch_size(),
                config.min_age(),
            )?;
            for user in adults {
                println!("{:?}", user?);
            }
        }
        UsersAction::AverageAge => match users::average_age(&store)? {
            Some(average) => println!("Average age of users: {:.2}", average),
            None => println!("No users found"),
        },
    }

    Ok(())
}
