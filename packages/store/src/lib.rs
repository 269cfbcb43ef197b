pub mod error;
pub mod models;
pub mod repo;

#[cfg(feature = "sqlite")]
mod sqlite;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStore;

pub use error::StoreError;
pub use models::{Contact, NewContact};
pub use repo::ContactStore;
