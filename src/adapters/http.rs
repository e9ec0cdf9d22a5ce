use crate::config::GithubConfig;
use crate::domain::ports::JsonSource;
use crate::utils::error::{OrgReposError, Result};
use crate::utils::http::get_json;
use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT},
    Client,
};
use serde_json::Value;
use std::time::Duration;

const GITHUB_API_VERSION: &str = "2022-11-28";

/// [`JsonSource`] backed by a reqwest client with GitHub API headers.
#[derive(Debug, Clone)]
pub struct HttpJsonSource {
    client: Client,
}

impl HttpJsonSource {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn from_config(config: &GithubConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static(GITHUB_API_VERSION),
        );
        headers.insert(USER_AGENT, header_value("github.user_agent", config.user_agent())?);

        if let Some(token) = config.token() {
            headers.insert(
                AUTHORIZATION,
                header_value("github.token", &format!("Bearer {}", token))?,
            );
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .build()?;

        Ok(Self::new(client))
    }
}

fn header_value(field: &str, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|e| OrgReposError::InvalidConfigValueError {
        field: field.to_string(),
        value: if field == "github.token" {
            "<redacted>".to_string()
        } else {
            value.to_string()
        },
        reason: e.to_string(),
    })
}

#[async_trait]
impl JsonSource for HttpJsonSource {
    async fn get_json(&self, url: &str) -> Result<Value> {
        get_json(&self.client, url).await
    }
}
