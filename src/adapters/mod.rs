// Adapters layer: concrete implementations of the domain ports.

pub mod http;
pub mod user_store;

pub use http::HttpJsonSource;
pub use user_store::InMemoryUserStore;
