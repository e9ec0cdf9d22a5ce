use crate::utils::error::{OrgReposError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: impl ToString, reason: impl Into<String>) -> OrgReposError {
    OrgReposError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(invalid(field_name, url_str, "URL cannot be empty"));
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(invalid(
                field_name,
                url_str,
                format!("Unsupported URL scheme: {}", scheme),
            )),
        },
        Err(e) => Err(invalid(field_name, url_str, format!("Invalid URL format: {}", e))),
    }
}

/// The org URL is a template: a valid URL with exactly one `{}` slot.
pub fn validate_url_template(field_name: &str, template: &str) -> Result<()> {
    match template.matches("{}").count() {
        1 => validate_url(field_name, template),
        n => Err(invalid(
            field_name,
            template,
            format!("Template must contain exactly one {{}} placeholder, found {}", n),
        )),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(invalid(field_name, path, "Path cannot be empty"));
    }

    if path.contains('\0') {
        return Err(invalid(field_name, path, "Path contains null bytes"));
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(invalid(
            field_name,
            value,
            format!("Value must be at least {}", min_value),
        ));
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| OrgReposError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("github.org_url", "https://example.com").is_ok());
        assert!(validate_url("github.org_url", "http://example.com").is_ok());
        assert!(validate_url("github.org_url", "").is_err());
        assert!(validate_url("github.org_url", "invalid-url").is_err());
        assert!(validate_url("github.org_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_url_template() {
        assert!(validate_url_template("github.org_url", "https://api.github.com/orgs/{}").is_ok());
        assert!(validate_url_template("github.org_url", "https://api.github.com/orgs/").is_err());
        assert!(validate_url_template("github.org_url", "https://{}/orgs/{}").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("users.page_size", 5, 1).is_ok());
        assert!(validate_positive_number("users.page_size", 0, 1).is_err());
    }

    #[test]
    fn test_validate_required_and_non_empty() {
        let missing: Option<String> = None;
        assert!(matches!(
            validate_required_field("users.csv_path", &missing),
            Err(OrgReposError::MissingConfigError { .. })
        ));
        assert!(validate_non_empty_string("org", "  ").is_err());
        assert!(validate_non_empty_string("org", "google").is_ok());
    }
}
