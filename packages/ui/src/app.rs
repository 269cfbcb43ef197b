use api::ContactsClient;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaPlus;
use dioxus_free_icons::Icon;
use store::{Contact, NewContact};

use crate::actions;
use crate::contact_dialog::ContactDialog;
use crate::contact_table::ContactTable;
use crate::notification::{sleep, Snackbar, NOTIFICATION_TIMEOUT};
use crate::state::{ContactsState, DialogState};

const CONTACTS_CSS: Asset = asset!("/assets/contacts.css");

/// Put `text` on the system clipboard.
fn write_clipboard(text: &str) {
    match serde_json::to_string(text) {
        Ok(literal) => {
            let _ = document::eval(&format!("navigator.clipboard.writeText({literal});"));
        }
        Err(e) => tracing::warn!("Could not copy to clipboard: {e}"),
    }
}

/// Root of the contacts screen: owns the state, runs the actions and wires the table,
/// the dialog and the notification together.
#[component]
pub fn ContactsApp() -> Element {
    let client = use_hook(ContactsClient::default);
    let mut state = use_signal(ContactsState::default);

    // Initial load
    let loader = client.clone();
    let _ = use_resource(move || {
        let client = loader.clone();
        async move {
            let mut view = state;
            actions::load_contacts(&client, &mut view).await;
        }
    });

    // Auto-dismiss each notification after the timeout unless it was replaced
    let current_seq = use_memo(move || state.read().notification.as_ref().map(|n| n.seq));
    use_effect(move || {
        if let Some(seq) = current_seq() {
            spawn(async move {
                sleep(NOTIFICATION_TIMEOUT).await;
                state.write().dismiss(seq);
            });
        }
    });

    let saver = client.clone();
    let handle_save = move |contact: NewContact| {
        let client = saver.clone();
        spawn(async move {
            let mut view = state;
            actions::save_contact(&client, &mut view, contact).await;
        });
    };

    let deleter = client.clone();
    let handle_delete = move |id: String| {
        let client = deleter.clone();
        spawn(async move {
            let mut view = state;
            actions::delete_contact(&client, &mut view, &id).await;
        });
    };

    let handle_copy = move |id: String| {
        write_clipboard(&id);
        let mut view = state;
        actions::copied_id(&mut view, &id);
    };

    let contacts = state.read().contacts.clone();
    let notification = state.read().notification.clone();
    let dialog_state = state.read().dialog.clone();
    let dialog = match dialog_state {
        DialogState::Open { editing } => rsx! {
            ContactDialog {
                contact: editing,
                on_save: handle_save,
                on_close: move |_| state.write().dialog = DialogState::Closed,
            }
        },
        DialogState::Closed => rsx! {},
    };

    rsx! {
        document::Stylesheet { href: CONTACTS_CSS }
        div { class: "contacts-page",
            header { class: "contacts-header",
                h1 { "Contact Management" }
                button {
                    class: "primary",
                    onclick: move |_| state.write().open_dialog(None),
                    Icon { icon: FaPlus, width: 12, height: 12 }
                    " Add Contact"
                }
            }
            ContactTable {
                contacts,
                on_edit: move |contact: Contact| state.write().open_dialog(Some(contact)),
                on_delete: handle_delete,
                on_copy_id: handle_copy,
            }
            {dialog}
            Snackbar {
                notification,
                on_close: move |seq: u64| state.write().dismiss(seq),
            }
        }
    }
}
