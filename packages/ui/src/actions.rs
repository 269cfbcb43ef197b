//! Load, save and delete flows of the contacts view.
//!
//! Each action talks to a [`ContactsApi`], reports the outcome through the view's
//! notification slot and, after a successful mutation, reloads the whole list. Failures
//! are logged and leave the cached list as it was.

use std::future::Future;

use api::{ClientError, ContactsClient};
use store::{Contact, NewContact};

use crate::notification::{
    copied_message, Severity, CREATED, DELETED, DELETE_FAILED, LOAD_FAILED, SAVE_FAILED,
    UPDATED,
};
use crate::state::ViewState;

/// The remote operations the view uses.
pub trait ContactsApi {
    fn fetch_contacts(&self) -> impl Future<Output = Result<Vec<Contact>, ClientError>>;
    fn create_contact(
        &self,
        contact: &NewContact,
    ) -> impl Future<Output = Result<Contact, ClientError>>;
    fn update_contact(
        &self,
        id: &str,
        contact: &NewContact,
    ) -> impl Future<Output = Result<Contact, ClientError>>;
    fn delete_contact(&self, id: &str) -> impl Future<Output = Result<(), ClientError>>;
}

impl ContactsApi for ContactsClient {
    async fn fetch_contacts(&self) -> Result<Vec<Contact>, ClientError> {
        ContactsClient::fetch_contacts(self).await
    }

    async fn create_contact(&self, contact: &NewContact) -> Result<Contact, ClientError> {
        ContactsClient::create_contact(self, contact).await
    }

    async fn update_contact(&self, id: &str, contact: &NewContact) -> Result<Contact, ClientError> {
        ContactsClient::update_contact(self, id, contact).await
    }

    async fn delete_contact(&self, id: &str) -> Result<(), ClientError> {
        ContactsClient::delete_contact(self, id).await
    }
}

/// Replace the cached list with the server's.
pub async fn load_contacts<A: ContactsApi, V: ViewState>(api: &A, view: &mut V) {
    match api.fetch_contacts().await {
        Ok(contacts) => view.set_contacts(contacts),
        Err(e) => {
            tracing::error!("Error loading contacts: {e}");
            view.notify(Severity::Error, LOAD_FAILED.to_string());
        }
    }
}

/// Create, or update when the dialog was opened on a contact with an id.
///
/// On failure the dialog stays open with its values.
pub async fn save_contact<A: ContactsApi, V: ViewState>(api: &A, view: &mut V, contact: NewContact) {
    let editing_id = view
        .editing()
        .map(|c| c.id)
        .filter(|id| !id.is_empty());

    let result = match &editing_id {
        Some(id) => api.update_contact(id, &contact).await.map(|_| UPDATED),
        None => api.create_contact(&contact).await.map(|_| CREATED),
    };

    match result {
        Ok(message) => {
            view.notify(Severity::Success, message.to_string());
            view.close_dialog();
            load_contacts(api, view).await;
        }
        Err(e) => {
            tracing::error!("Error saving contact: {e}");
            view.notify(Severity::Error, SAVE_FAILED.to_string());
        }
    }
}

pub async fn delete_contact<A: ContactsApi, V: ViewState>(api: &A, view: &mut V, id: &str) {
    match api.delete_contact(id).await {
        Ok(()) => {
            view.notify(Severity::Success, DELETED.to_string());
            load_contacts(api, view).await;
        }
        Err(e) => {
            tracing::error!("Error deleting contact: {e}");
            view.notify(Severity::Error, DELETE_FAILED.to_string());
        }
    }
}

/// Report an id copied to the clipboard.
pub fn copied_id<V: ViewState>(view: &mut V, id: &str) {
    view.notify(Severity::Success, copied_message(id));
}
