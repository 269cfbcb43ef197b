use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCopy, FaPen, FaTrashCan};
use dioxus_free_icons::Icon;
use store::Contact;

/// Contacts whose id contains `term`. Case-sensitive; contacts with an empty id always
/// pass.
pub fn filter_by_id<'a>(contacts: &'a [Contact], term: &str) -> Vec<&'a Contact> {
    contacts
        .iter()
        .filter(|c| c.id.is_empty() || c.id.contains(term))
        .collect()
}

/// Searchable table of contacts with per-row copy, edit and delete buttons.
#[component]
pub fn ContactTable(
    contacts: Vec<Contact>,
    on_edit: EventHandler<Contact>,
    on_delete: EventHandler<String>,
    on_copy_id: EventHandler<String>,
) -> Element {
    let mut search = use_signal(String::new);
    let term = search();
    let visible = filter_by_id(&contacts, &term);

    rsx! {
        div { class: "contact-search",
            input {
                r#type: "text",
                placeholder: "Search by ID",
                value: "{term}",
                oninput: move |evt: FormEvent| search.set(evt.value()),
            }
        }
        table { class: "contact-table",
            thead {
                tr {
                    th { "First Name" }
                    th { "Last Name" }
                    th { "Email" }
                    th { "Phone" }
                    th { "Age" }
                    th { "Actions" }
                }
            }
            tbody {
                for contact in visible {
                    ContactRow {
                        key: "{contact.id}",
                        contact: contact.clone(),
                        on_edit,
                        on_delete,
                        on_copy_id,
                    }
                }
            }
        }
    }
}

#[component]
fn ContactRow(
    contact: Contact,
    on_edit: EventHandler<Contact>,
    on_delete: EventHandler<String>,
    on_copy_id: EventHandler<String>,
) -> Element {
    let id = contact.id.clone();
    let delete_id = contact.id.clone();
    let edit = contact.clone();

    rsx! {
        tr {
            td { "{contact.first_name}" }
            td { "{contact.last_name}" }
            td { "{contact.email}" }
            td { "{contact.phone_number}" }
            td { "{contact.age}" }
            td { class: "contact-actions",
                button {
                    title: "Copy ID",
                    onclick: move |_| on_copy_id.call(id.clone()),
                    Icon { icon: FaCopy, width: 14, height: 14 }
                }
                button {
                    title: "Edit",
                    onclick: move |_| on_edit.call(edit.clone()),
                    Icon { icon: FaPen, width: 14, height: 14 }
                }
                button {
                    class: "danger",
                    title: "Delete",
                    onclick: move |_| on_delete.call(delete_id.clone()),
                    Icon { icon: FaTrashCan, width: 14, height: 14 }
                }
            }
        }
    }
}
