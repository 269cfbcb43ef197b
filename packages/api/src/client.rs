//! # Remote Client: the browser side of the Resource API
//!
//! [`ContactsClient`] issues one HTTP call per operation. It looks only at whether the
//! call succeeded (transport reached the server and the status is 2xx); the body of an
//! error response is never read. On failure each method returns the fixed
//! [`ClientError`] for its operation. On success the JSON body is decoded and returned
//! as-is, except for delete which reads no body.
//!
//! There is no timeout, retry, or cancellation.

use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use store::{Contact, NewContact};

use crate::error::ClientError;

/// Base URL used when `CONTACTS_API_URL` is not set at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:9001/contacts";

/// HTTP client for the `/contacts` resource.
#[derive(Clone, Debug)]
pub struct ContactsClient {
    base_url: String,
    http: reqwest::Client,
}

impl Default for ContactsClient {
    fn default() -> Self {
        Self::new(option_env!("CONTACTS_API_URL").unwrap_or(DEFAULT_API_URL))
    }
}

impl ContactsClient {
    /// Client for the collection at `base_url` (e.g. `http://localhost:9001/contacts`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn item_url(&self, id: &str) -> String {
        format!("{}/{}", self.base_url, id)
    }

    pub async fn fetch_contacts(&self) -> Result<Vec<Contact>, ClientError> {
        let failure = ClientError::FetchContacts;
        let response = execute(self.http.get(&self.base_url), failure).await?;
        decode(response, failure).await
    }

    pub async fn fetch_contact(&self, id: &str) -> Result<Contact, ClientError> {
        let failure = ClientError::FetchContact;
        let response = execute(self.http.get(self.item_url(id)), failure).await?;
        decode(response, failure).await
    }

    pub async fn create_contact(&self, contact: &NewContact) -> Result<Contact, ClientError> {
        let failure = ClientError::CreateContact;
        let response = execute(self.http.post(&self.base_url).json(contact), failure).await?;
        decode(response, failure).await
    }

    pub async fn update_contact(
        &self,
        id: &str,
        contact: &NewContact,
    ) -> Result<Contact, ClientError> {
        let failure = ClientError::UpdateContact;
        let response = execute(self.http.put(self.item_url(id)).json(contact), failure).await?;
        decode(response, failure).await
    }

    pub async fn delete_contact(&self, id: &str) -> Result<(), ClientError> {
        execute(self.http.delete(self.item_url(id)), ClientError::DeleteContact).await?;
        Ok(())
    }
}

async fn execute(request: RequestBuilder, failure: ClientError) -> Result<Response, ClientError> {
    let response = request.send().await.map_err(|e| {
        tracing::debug!("{failure}: {e}");
        failure
    })?;

    if !response.status().is_success() {
        tracing::debug!(status = %response.status(), "{failure}");
        return Err(failure);
    }
    Ok(response)
}

async fn decode<T: DeserializeOwned>(response: Response, failure: ClientError) -> Result<T, ClientError> {
    response.json().await.map_err(|e| {
        tracing::debug!("{failure}: {e}");
        failure
    })
}
