use crate::domain::model::UserRecord;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Anything that can turn a URL into a decoded JSON document.
#[async_trait]
pub trait JsonSource: Send + Sync {
    async fn get_json(&self, url: &str) -> Result<Value>;
}

/// Paged, ordered access to user rows (`LIMIT page_size OFFSET offset`).
pub trait UserStore {
    fn paginate(&self, page_size: usize, offset: usize) -> Result<Vec<UserRecord>>;
}
