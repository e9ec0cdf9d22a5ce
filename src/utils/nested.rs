use crate::utils::error::{OrgReposError, Result};
use serde_json::Value;

/// Follow `path` through nested JSON objects and return the value at its end.
///
/// A key that is absent, or a step into something that is not an object,
/// fails with [`OrgReposError::KeyNotFound`] naming the offending key.
pub fn access_nested_map<'a>(map: &'a Value, path: &[&str]) -> Result<&'a Value> {
    let mut current = map;
    for key in path {
        current = current
            .as_object()
            .and_then(|obj| obj.get(*key))
            .ok_or_else(|| OrgReposError::KeyNotFound {
                key: key.to_string(),
                path: path.join("."),
            })?;
    }
    Ok(current)
}
