use dioxus::prelude::*;
use store::{Contact, NewContact};

use crate::form::{ContactForm, Field, FormErrors};

/// Backdrop for the contact dialog. A click on the dimmed area outside the card
/// dismisses the dialog through `on_close`.
#[component]
pub fn ModalOverlay(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}

/// Add/edit form for one contact.
///
/// Field errors appear once the user has tried to save. `on_save` only fires with a
/// valid, normalized contact.
#[component]
pub fn ContactDialog(
    contact: Option<Contact>,
    on_save: EventHandler<NewContact>,
    on_close: EventHandler<()>,
) -> Element {
    let title = if contact.is_some() { "Edit Contact" } else { "Add Contact" };
    let mut form = use_signal(move || ContactForm::from_contact(contact.as_ref()));
    let mut submitted = use_signal(|| false);

    let errors = if submitted() {
        form.read().errors()
    } else {
        FormErrors::default()
    };

    let handle_save = move |_| {
        submitted.set(true);
        if let Ok(contact) = form.read().submit() {
            on_save.call(contact);
        }
    };

    rsx! {
        ModalOverlay { on_close,
            div { class: "contact-dialog",
                h2 { "{title}" }
                for field in Field::ALL {
                    div { key: "{field.name()}", class: "form-field",
                        label { r#for: "contact-{field.name()}", "{field.label()}" }
                        input {
                            id: "contact-{field.name()}",
                            name: field.name(),
                            r#type: field.input_type(),
                            class: if errors.get(field).is_some() { "invalid" },
                            value: "{form.read().get(field)}",
                            oninput: move |evt: FormEvent| form.write().set(field, evt.value()),
                        }
                        if let Some(message) = errors.get(field) {
                            p { class: "field-error", "{message}" }
                        }
                    }
                }
                div { class: "dialog-actions",
                    button { onclick: move |_| on_close.call(()), "Cancel" }
                    button { class: "primary", onclick: handle_save, "Save" }
                }
            }
        }
    }
}
