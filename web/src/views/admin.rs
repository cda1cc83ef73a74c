//! Admin console: list users, delete a user and their notes.

use api::{AdminUser, ApiClient};
use dioxus::prelude::*;
use ui::use_auth;

#[component]
pub fn Admin() -> Element {
    let auth = use_auth();
    let mut users = use_signal(Vec::<AdminUser>::new);
    let mut error = use_signal(|| Option::<String>::None);

    let _loader = use_resource(move || async move {
        let client = ApiClient::default();
        match client.admin_users().await {
            Ok(list) => users.set(list),
            Err(e) => error.set(Some(e.to_string())),
        }
    });

    let handle_delete = move |username: String| {
        spawn(async move {
            error.set(None);
            let client = ApiClient::default();
            match client.admin_delete_user(&username).await {
                Ok(()) => match client.admin_users().await {
                    Ok(list) => users.set(list),
                    Err(e) => error.set(Some(e.to_string())),
                },
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    let state = auth();
    if !state.loading && !state.is_admin() {
        return rsx! {
            div {
                class: "page page-admin",
                p { "Admins only." }
                p { a { href: "/", "Back" } }
            }
        };
    }

    rsx! {
        div {
            class: "page page-admin",
            h1 { "Users" }

            if let Some(err) = error() {
                div { class: "form-error", "{err}" }
            }

            table {
                class: "admin-users",
                thead {
                    tr {
                        th { "Username" }
                        th { "Saved note" }
                        th { "" }
                    }
                }
                tbody {
                    for user in users() {
                        tr {
                            key: "{user.username}",
                            td { "{user.username}" }
                            td { "{user.note}" }
                            td {
                                if !user.is_admin {
                                    button {
                                        onclick: {
                                            let name = user.username.clone();
                                            move |_| handle_delete(name.clone())
                                        },
                                        "Delete"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
