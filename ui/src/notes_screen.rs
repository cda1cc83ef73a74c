//! The notes page controller: identity header, composer, and the feed.

use api::{has_own_notes, ApiClient, Note};
use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::composer::NoteComposer;
use crate::feed::NoteFeed;
use crate::LogoutButton;

#[component]
pub fn NotesScreen() -> Element {
    let auth = use_auth();
    let mut notes = use_signal(Vec::<Note>::new);
    let mut feed_error = use_signal(|| Option::<String>::None);
    let mut status = use_signal(|| Option::<String>::None);
    let mut note_text = use_signal(String::new);
    let mut prefilled = use_signal(|| false);

    // Fetch the feed on mount and again whenever the identity changes
    // (login, logout); the last refresh to resolve wins.
    use_effect(move || {
        let _identity = auth().user.clone();
        spawn(async move {
            let client = ApiClient::default();
            match client.notes().await {
                Ok(list) => {
                    feed_error.set(None);
                    notes.set(list);
                }
                Err(e) => {
                    notes.set(Vec::new());
                    feed_error.set(Some(e.to_string()));
                }
            }
        });
    });

    // Pre-fill the composer once from the session check.
    use_effect(move || {
        let state = auth();
        if !prefilled() && !state.loading && state.user.is_some() && !state.saved_note.is_empty() {
            note_text.set(state.saved_note.clone());
            prefilled.set(true);
        }
    });

    let refresh = move || async move {
        let client = ApiClient::default();
        match client.notes().await {
            Ok(list) => {
                feed_error.set(None);
                notes.set(list);
            }
            Err(e) => feed_error.set(Some(e.to_string())),
        }
    };

    let handle_saved = move |_| {
        spawn(async move {
            refresh().await;
        });
    };

    let handle_delete = move |id: i64| {
        spawn(async move {
            status.set(None);
            let client = ApiClient::default();
            match client.delete_one(id).await {
                Ok(()) => {
                    status.set(Some("Note deleted.".to_string()));
                    refresh().await;
                }
                Err(e) => status.set(Some(e.to_string())),
            }
        });
    };

    let handle_delete_all = move |_| {
        spawn(async move {
            status.set(None);
            let client = ApiClient::default();
            match client.delete_all().await {
                Ok(()) => {
                    note_text.set(String::new());
                    status.set(Some("Your notes were deleted.".to_string()));
                    refresh().await;
                }
                Err(e) => status.set(Some(e.to_string())),
            }
        });
    };

    let state = auth();
    let viewer = state.username().map(str::to_string);
    let signed_in = state.user.is_some();
    let is_admin = state.is_admin();
    let has_own = has_own_notes(&notes(), viewer.as_deref());

    rsx! {
        div {
            class: "notes-screen",

            header {
                class: "notes-header",
                if let Some(name) = viewer.as_deref() {
                    span { class: "user-badge", "Signed in as {name}" }
                    if is_admin {
                        a { class: "admin-link", href: "/admin", "Admin" }
                    }
                    a { class: "account-link", href: "/account", "Account" }
                    LogoutButton {}
                } else {
                    a { class: "auth-link", href: "/auth", "Sign in" }
                }
            }

            if let Some(msg) = status() {
                div { class: "screen-status", "{msg}" }
            }

            NoteComposer {
                note_text,
                disabled: !signed_in,
                on_saved: handle_saved,
            }

            if signed_in && has_own {
                button {
                    class: "delete-all",
                    onclick: handle_delete_all,
                    "Delete all my notes"
                }
            }

            if let Some(err) = feed_error() {
                div { class: "feed-error", "{err}" }
            } else {
                NoteFeed {
                    notes: notes(),
                    viewer,
                    on_delete: handle_delete,
                }
            }
        }
    }
}
