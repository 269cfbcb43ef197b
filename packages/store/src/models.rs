//! # Domain models for contacts
//!
//! Defines the records persisted by a [`crate::ContactStore`] and exchanged with the
//! HTTP API. Both types are `Serialize + Deserialize` with camelCase keys so the JSON
//! wire format and the `contacts` table columns use the same names.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Contact`] | A persisted contact row. `id` is assigned by the server at creation and never changes. |
//! | [`NewContact`] | The five editable fields. Body of create/update requests and output of the contact form. |

use serde::{Deserialize, Serialize};

/// A contact as stored in the `contacts` table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlite", derive(sqlx::FromRow))]
#[cfg_attr(feature = "sqlite", sqlx(rename_all = "camelCase"))]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// UUID v4 string, generated on creation
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Stored verbatim; the client sends `XXX-XXX-XXXX`
    pub phone_number: String,
    pub age: i64,
}

impl Contact {
    /// Attach an id to a set of editable fields.
    pub fn from_new(id: String, fields: NewContact) -> Self {
        Self {
            id,
            first_name: fields.first_name,
            last_name: fields.last_name,
            email: fields.email,
            phone_number: fields.phone_number,
            age: fields.age,
        }
    }

    /// The editable fields of this contact.
    pub fn fields(&self) -> NewContact {
        NewContact {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone_number: self.phone_number.clone(),
            age: self.age,
        }
    }

    /// "First Last", as shown in log lines.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Contact fields without an id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContact {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub age: i64,
}
