//! # Contact storage seam
//!
//! [`ContactStore`] is the async interface the Resource API talks to. It is a thin
//! statement-per-method pass-through: every method maps to exactly one SQL statement in
//! [`crate::SqliteStore`], and each statement is its own implicit transaction. No method
//! combines steps; existence checks and confirming reads are composed by the caller.
//!
//! The returned futures are `Send` so handlers built on top of a store can run on a
//! multi-threaded runtime.

use std::future::Future;

use crate::error::StoreError;
use crate::models::Contact;

/// Async trait for reading and writing contact rows.
pub trait ContactStore: Send + Sync + 'static {
    /// All rows, in the store's natural order.
    fn all(&self) -> impl Future<Output = Result<Vec<Contact>, StoreError>> + Send;

    /// The row with `id`, or `None`.
    fn find(&self, id: &str) -> impl Future<Output = Result<Option<Contact>, StoreError>> + Send;

    /// Insert a complete row.
    fn insert(&self, contact: &Contact) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Overwrite every field of the row with `contact.id`. Returns the affected row count.
    fn update(&self, contact: &Contact) -> impl Future<Output = Result<u64, StoreError>> + Send;

    /// Remove the row with `id`. Returns the affected row count.
    fn delete(&self, id: &str) -> impl Future<Output = Result<u64, StoreError>> + Send;
}
