pub mod client;
pub mod users;

pub use crate::domain::model::UserRecord;
pub use crate::domain::ports::{JsonSource, UserStore};
pub use crate::utils::error::Result;
