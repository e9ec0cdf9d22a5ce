use crate::config::toml_config::DEFAULT_ORG_URL;
use crate::domain::ports::JsonSource;
use crate::utils::error::{OrgReposError, Result};
use crate::utils::memo::Memoized;
use crate::utils::nested::access_nested_map;
use crate::utils::validation::validate_url_template;
use serde_json::Value;

/// Client for one GitHub organization.
///
/// The organization payload and the repository listing are each fetched at
/// most once per client; build a new client to see fresh data.
pub struct GithubOrgClient<S: JsonSource> {
    org_name: String,
    org_url: String,
    source: S,
    org: Memoized<Value>,
    repos_payload: Memoized<Value>,
}

impl<S: JsonSource> GithubOrgClient<S> {
    pub const ORG_URL: &'static str = DEFAULT_ORG_URL;

    pub fn new(org_name: impl Into<String>, source: S) -> Self {
        Self {
            org_name: org_name.into(),
            org_url: Self::ORG_URL.to_string(),
            source,
            org: Memoized::new(),
            repos_payload: Memoized::new(),
        }
    }

    /// Use `template` instead of [`Self::ORG_URL`]; its single `{}` is replaced by the org name.
    pub fn with_org_url(mut self, template: impl Into<String>) -> Result<Self> {
        let template = template.into();
        validate_url_template("org_url", &template)?;
        self.org_url = template;
        Ok(self)
    }

    pub fn org_name(&self) -> &str {
        &self.org_name
    }

    pub fn org_url(&self) -> String {
        self.org_url.replacen("{}", &self.org_name, 1)
    }

    pub async fn org(&self) -> Result<&Value> {
        self.org
            .get_or_try_compute(|| async move {
                let url = self.org_url();
                tracing::debug!("Fetching organization {} from {}", self.org_name, url);
                self.source.get_json(&url).await
            })
            .await
    }

    pub async fn public_repos_url(&self) -> Result<String> {
        let org = self.org().await?;
        let repos_url = access_nested_map(org, &["repos_url"])?;

        repos_url
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| OrgReposError::UnexpectedShape {
                url: self.org_url(),
                expected: "repos_url to be a string".to_string(),
            })
    }

    pub async fn repos_payload(&self) -> Result<&Value> {
        self.repos_payload
            .get_or_try_compute(|| async move {
                let url = self.public_repos_url().await?;
                let payload = self.source.get_json(&url).await?;
                if !payload.is_array() {
                    return Err(OrgReposError::UnexpectedShape {
                        url,
                        expected: "an array of repositories".to_string(),
                    });
                }
                Ok(payload)
            })
            .await
    }

    /// Names of the organization's public repositories, in listing order.
    ///
    /// With `license`, only repositories whose `license.key` equals it are kept.
    pub async fn public_repos(&self, license: Option<&str>) -> Result<Vec<String>> {
        let payload = self.repos_payload().await?;
        let repos = payload.as_array().map(Vec::as_slice).unwrap_or_default();

        let names: Vec<String> = repos
            .iter()
            .filter(|repo| license.map_or(true, |key| Self::has_license(repo, key)))
            .filter_map(|repo| match repo.get("name").and_then(Value::as_str) {
                Some(name) => Some(name.to_string()),
                None => {
                    tracing::warn!("Skipping repository without a name: {}", repo);
                    None
                }
            })
            .collect();

        tracing::debug!(
            "{} of {} repositories match license filter {:?}",
            names.len(),
            repos.len(),
            license
        );
        Ok(names)
    }

    pub fn has_license(repo: &Value, license_key: &str) -> bool {
        access_nested_map(repo, &["license", "key"])
            .ok()
            .and_then(Value::as_str)
            .is_some_and(|key| key == license_key)
    }
}
