pub mod error;
pub mod http;
pub mod logger;
pub mod memo;
pub mod nested;
pub mod validation;
