//! Sign-in page with username/password form.

use api::{validate, ApiClient};
use dioxus::prelude::*;
use ui::nav::{redirect_after, REDIRECT_DELAY_MS};
use ui::{use_auth, AuthState};

#[component]
pub fn Auth() -> Element {
    let mut auth = use_auth();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut status = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Already signed in: move along to the chat view.
    use_effect(move || {
        let state = auth();
        if !state.loading && state.user.is_some() {
            spawn(async move {
                redirect_after("/chat", REDIRECT_DELAY_MS).await;
            });
        }
    });

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);
            status.set(None);

            let u = username().trim().to_string();
            let p = password();
            if let Err(e) = validate::validate_credentials(&u, &p) {
                error.set(Some(e));
                return;
            }

            loading.set(true);
            let client = ApiClient::default();
            match client.login(&u, &p).await {
                Ok(resp) => {
                    let name = resp.user.username.clone();
                    auth.set(AuthState::signed_in(resp.user, resp.note.unwrap_or_default()));
                    status.set(Some(format!("Signed in as {name}")));
                    redirect_after("/chat", REDIRECT_DELAY_MS).await;
                }
                Err(e) => {
                    loading.set(false);
                    auth.set(AuthState::signed_out());
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "page page-auth",

            h1 { "Notewall" }
            p { class: "page-subtitle", "Sign in to your account" }

            form {
                class: "auth-form",
                onsubmit: handle_login,

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }
                if let Some(msg) = status() {
                    div { class: "form-status", "{msg}" }
                }

                input {
                    r#type: "text",
                    placeholder: "Username",
                    value: username(),
                    oninput: move |evt: FormEvent| username.set(evt.value()),
                }
                input {
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
                button {
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign in" }
                }
            }

            p {
                class: "auth-switch",
                "No account yet? "
                a { href: "/signup", "Sign up" }
            }
        }
    }
}
