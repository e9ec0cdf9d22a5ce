use crate::utils::error::{OrgReposError, Result};
use reqwest::Client;
use serde_json::Value;

/// Issue one GET to `url` and return the decoded JSON body.
pub async fn get_json(client: &Client, url: &str) -> Result<Value> {
    tracing::debug!("GET {}", url);
    let response = client.get(url).send().await?;

    let status = response.status();
    tracing::debug!("Response status from {}: {}", url, status);

    if !status.is_success() {
        return Err(OrgReposError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    Ok(response.json().await?)
}
