use std::time::Duration;

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaXmark;
use dioxus_free_icons::Icon;

/// How long a notification stays on screen.
pub const NOTIFICATION_TIMEOUT: Duration = Duration::from_millis(4000);

pub const CREATED: &str = "Contact created successfully";
pub const UPDATED: &str = "Contact updated successfully";
pub const SAVE_FAILED: &str = "Failed to save contact";
pub const DELETED: &str = "Contact deleted successfully";
pub const DELETE_FAILED: &str = "Failed to delete contact";
pub const LOAD_FAILED: &str = "Failed to load contacts";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    fn class(self) -> &'static str {
        match self {
            Severity::Success => "notification notification-success",
            Severity::Error => "notification notification-error",
        }
    }
}

/// The single visible notification.
///
/// `seq` increases with every notification shown so a pending auto-dismiss for an older
/// message can tell it has been replaced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    pub seq: u64,
}

pub fn copied_message(id: &str) -> String {
    format!("ID copied to clipboard: {id}")
}

/// Wait without blocking the UI thread.
pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

#[component]
pub fn Snackbar(notification: Option<Notification>, on_close: EventHandler<u64>) -> Element {
    let Some(notification) = notification else {
        return rsx! {};
    };
    let seq = notification.seq;

    rsx! {
        div { class: "{notification.severity.class()}", role: "alert",
            span { class: "notification-message", "{notification.message}" }
            button {
                class: "notification-close",
                title: "Dismiss",
                onclick: move |_| on_close.call(seq),
                Icon { icon: FaXmark, width: 12, height: 12 }
            }
        }
    }
}
