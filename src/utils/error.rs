use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrgReposError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Unexpected HTTP status {status} from {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Key '{key}' not found (path: {path})")]
    KeyNotFound { key: String, path: String },

    #[error("Unexpected payload from {url}: expected {expected}")]
    UnexpectedShape { url: String, expected: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl OrgReposError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            OrgReposError::ApiError(_) | OrgReposError::HttpStatus { .. } => ErrorSeverity::Medium,
            OrgReposError::IoError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    /// Short message for the terminal; the full error goes to the log.
    pub fn user_friendly_message(&self) -> String {
        match self {
            OrgReposError::ApiError(_) => "Could not reach the API, check the network".to_string(),
            OrgReposError::HttpStatus { status: 404, url } => format!("Nothing found at {}", url),
            OrgReposError::HttpStatus { status: 401 | 403, .. } => {
                "The API refused the request, check the token or rate limit".to_string()
            }
            OrgReposError::ConfigError { .. }
            | OrgReposError::InvalidConfigValueError { .. }
            | OrgReposError::MissingConfigError { .. } => format!("Bad configuration: {}", self),
            other => other.to_string(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, OrgReposError>;
