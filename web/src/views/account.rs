//! Account page: identity summary and sign-out.

use dioxus::prelude::*;
use ui::nav::{redirect_after, REDIRECT_DELAY_MS};
use ui::{use_auth, LogoutButton};

#[component]
pub fn Account() -> Element {
    let auth = use_auth();

    // No session: back to the sign-in page.
    use_effect(move || {
        let state = auth();
        if !state.loading && state.user.is_none() {
            spawn(async move {
                redirect_after("/auth", REDIRECT_DELAY_MS).await;
            });
        }
    });

    let state = auth();

    rsx! {
        div {
            class: "page page-account",
            h1 { "Account" }

            if state.loading {
                p { "Checking session..." }
            } else if let Some(user) = state.user {
                p { class: "user-badge", "Signed in as {user.username}" }
                if user.is_admin {
                    p { a { href: "/admin", "Admin console" } }
                }
                if !state.saved_note.is_empty() {
                    p { class: "saved-note", "Last saved note: {state.saved_note}" }
                }
                LogoutButton {}
                p { a { href: "/chat", "Back to chat" } }
            } else {
                p { "You are signed out. Taking you to the sign-in page..." }
            }
        }
    }
}
