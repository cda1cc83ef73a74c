//! Signup page with password-policy validation before any request.

use api::{validate, ApiClient};
use dioxus::prelude::*;
use ui::nav::{redirect_after, REDIRECT_DELAY_MS};
use ui::{use_auth, AuthState};

#[component]
pub fn Signup() -> Element {
    let mut auth = use_auth();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
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

    let handle_signup = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);
            status.set(None);

            let u = username().trim().to_string();
            let p = password();
            if let Err(e) = validate::validate_signup(&u, &p, &confirm()) {
                error.set(Some(e));
                return;
            }

            loading.set(true);
            let client = ApiClient::default();
            match client.signup(&u, &p).await {
                Ok(resp) => {
                    let name = resp.user.username.clone();
                    auth.set(AuthState::signed_in(resp.user, resp.note.unwrap_or_default()));
                    status.set(Some(format!("Account created. Signed in as {name}.")));
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
            class: "page page-signup",

            h1 { "Create Account" }
            p { class: "page-subtitle", "Sign up for Notewall" }

            form {
                class: "auth-form",
                onsubmit: handle_signup,

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
                    placeholder: "Password (min 8 characters, one number)",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
                input {
                    r#type: "password",
                    placeholder: "Confirm password",
                    value: confirm(),
                    oninput: move |evt: FormEvent| confirm.set(evt.value()),
                }
                button {
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Sign up" }
                }
            }

            p {
                class: "auth-switch",
                "Already have an account? "
                a { href: "/auth", "Sign in" }
            }
        }
    }
}
