//! # Resource API operations
//!
//! Each operation is a stateless async function over a shared [`ContactStore`]. The HTTP
//! layer in [`crate::routes`] only extracts inputs and maps the `Result` to a response.
//!
//! ## Ordering rules
//!
//! 1. Create validates before any store access.
//! 2. Update and delete confirm existence (with [`get_contact`] semantics) first, so an
//!    unknown id is not-found whatever the body. Update then validates before writing.
//! 3. Create and update re-read the row after writing, so the response is exactly what
//!    was stored.
//!
//! ## Known limitation
//!
//! The existence check and the write are two separate statements with no transaction
//! around them. A concurrent delete of the same id between the two is not prevented; it
//! is detected through the write's affected-row count and reported as
//! [`ApiError::NotFound`]. A failing confirmation read after a successful insert or
//! update leaves the write in place.

use store::{Contact, ContactStore};
use uuid::Uuid;

use crate::error::ApiError;
use crate::payload::ContactPayload;

/// Every contact, in the store's natural order.
pub async fn list_contacts<S: ContactStore>(store: &S) -> Result<Vec<Contact>, ApiError> {
    Ok(store.all().await?)
}

/// The contact with `id`.
pub async fn get_contact<S: ContactStore>(store: &S, id: &str) -> Result<Contact, ApiError> {
    store.find(id).await?.ok_or(ApiError::NotFound)
}

/// Validate `payload`, assign a new id, insert, and return the stored row.
pub async fn create_contact<S: ContactStore>(
    store: &S,
    payload: ContactPayload,
) -> Result<Contact, ApiError> {
    let fields = payload.validate()?;
    let contact = Contact::from_new(Uuid::new_v4().to_string(), fields);

    store.insert(&contact).await?;
    tracing::info!(id = %contact.id, "Created contact {}", contact.full_name());

    get_contact(store, &contact.id).await
}

/// Overwrite every field of the existing contact `id` with the validated `payload`.
///
/// Last writer wins; there is no merge and no version check.
pub async fn update_contact<S: ContactStore>(
    store: &S,
    id: &str,
    payload: ContactPayload,
) -> Result<Contact, ApiError> {
    get_contact(store, id).await?;
    let fields = payload.validate()?;

    let contact = Contact::from_new(id.to_string(), fields);
    if store.update(&contact).await? == 0 {
        // Removed between the existence check and the write
        tracing::warn!(id, "Contact vanished before update");
        return Err(ApiError::NotFound);
    }
    tracing::info!(id, "Updated contact {}", contact.full_name());

    get_contact(store, id).await
}

/// Remove the existing contact `id`.
pub async fn delete_contact<S: ContactStore>(store: &S, id: &str) -> Result<(), ApiError> {
    get_contact(store, id).await?;

    if store.delete(id).await? == 0 {
        tracing::warn!(id, "Contact vanished before delete");
        return Err(ApiError::NotFound);
    }
    tracing::info!(id, "Deleted contact");

    Ok(())
}
