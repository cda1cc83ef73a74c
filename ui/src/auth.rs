//! Authentication context and hooks for the UI.

use api::{ApiClient, User};
use dioxus::prelude::*;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    /// Last saved note from the session check; pre-fills the composer.
    pub saved_note: String,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            saved_note: String::new(),
            loading: true,
        }
    }
}

impl AuthState {
    pub fn signed_in(user: User, saved_note: String) -> Self {
        Self {
            user: Some(user),
            saved_note,
            loading: false,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            user: None,
            saved_note: String::new(),
            loading: false,
        }
    }

    /// Username of the signed-in user, if any.
    pub fn username(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.username.as_str())
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_admin)
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);

    // Session check on mount
    let _ = use_resource(move || async move {
        let client = ApiClient::default();
        match client.me().await {
            Ok(me) => {
                if me.authenticated {
                    if let Some(user) = me.user {
                        auth_state.set(AuthState::signed_in(user, me.note.unwrap_or_default()));
                        return;
                    }
                }
                auth_state.set(AuthState::signed_out());
            }
            Err(e) => {
                tracing::error!("session check failed: {e}");
                auth_state.set(AuthState::signed_out());
            }
        }
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(#[props(default = "Sign out".to_string())] label: String) -> Element {
    let mut auth_state = use_auth();

    let onclick = move |_| async move {
        let client = ApiClient::default();
        match client.logout().await {
            Ok(()) => auth_state.set(AuthState::signed_out()),
            Err(e) => tracing::error!("logout failed: {e}"),
        }
    };

    rsx! {
        button {
            class: "logout-btn",
            onclick: onclick,
            "{label}"
        }
    }
}
