//! Contacts view: the table, the add/edit dialog, notifications, and the actions that
//! drive them against the Resource API.

pub mod actions;
pub mod form;
pub mod notification;
pub mod state;

mod app;
pub use app::ContactsApp;

mod contact_table;
pub use contact_table::{filter_by_id, ContactTable};

mod contact_dialog;
pub use contact_dialog::{ContactDialog, ModalOverlay};

pub use actions::ContactsApi;
pub use form::{ContactForm, Field, FormErrors};
pub use notification::{Notification, Severity, Snackbar, NOTIFICATION_TIMEOUT};
pub use state::{ContactsState, DialogState, ViewState};
