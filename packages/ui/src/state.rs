use dioxus::prelude::*;
use store::Contact;

use crate::notification::{Notification, Severity};

/// Whether the contact dialog is showing, and for which contact.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DialogState {
    #[default]
    Closed,
    /// `None` while adding, the captured contact while editing.
    Open { editing: Option<Contact> },
}

/// Everything the contacts view shows: the cached list, the dialog, and the
/// notification slot.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactsState {
    pub contacts: Vec<Contact>,
    pub dialog: DialogState,
    pub notification: Option<Notification>,
    next_seq: u64,
}

impl ContactsState {
    pub fn open_dialog(&mut self, contact: Option<Contact>) {
        self.dialog = DialogState::Open { editing: contact };
    }

    pub fn is_dialog_open(&self) -> bool {
        matches!(self.dialog, DialogState::Open { .. })
    }

    /// Clear the notification if it is still the one numbered `seq`.
    pub fn dismiss(&mut self, seq: u64) {
        if self.notification.as_ref().is_some_and(|n| n.seq == seq) {
            self.notification = None;
        }
    }
}

/// What the action functions need from the view.
///
/// Implemented for the plain [`ContactsState`] (tests) and for the component's
/// `Signal<ContactsState>`.
pub trait ViewState {
    fn set_contacts(&mut self, contacts: Vec<Contact>);
    /// The contact captured when the dialog was opened, if editing.
    fn editing(&self) -> Option<Contact>;
    fn close_dialog(&mut self);
    /// Replace the current notification.
    fn notify(&mut self, severity: Severity, message: String);
}

impl ViewState for ContactsState {
    fn set_contacts(&mut self, contacts: Vec<Contact>) {
        self.contacts = contacts;
    }

    fn editing(&self) -> Option<Contact> {
        match &self.dialog {
            DialogState::Open { editing } => editing.clone(),
            DialogState::Closed => None,
        }
    }

    fn close_dialog(&mut self) {
        self.dialog = DialogState::Closed;
    }

    fn notify(&mut self, severity: Severity, message: String) {
        self.next_seq += 1;
        self.notification = Some(Notification {
            message,
            severity,
            seq: self.next_seq,
        });
    }
}

impl ViewState for Signal<ContactsState> {
    fn set_contacts(&mut self, contacts: Vec<Contact>) {
        self.write().set_contacts(contacts);
    }

    fn editing(&self) -> Option<Contact> {
        self.peek().editing()
    }

    fn close_dialog(&mut self) {
        self.write().close_dialog();
    }

    fn notify(&mut self, severity: Severity, message: String) {
        self.write().notify(severity, message);
    }
}
