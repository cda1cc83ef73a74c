//! Note composer: text, optional image upload, optional link attachment.

use api::{links, ApiClient};
use dioxus::prelude::*;

use crate::nav::{current_origin, sleep_ms, SAVED_NOTICE_MS};

/// The note submission form.
///
/// The note text signal is owned by the parent so the bulk-delete flow can
/// clear it; the image and link inputs are local and cleared after a save
/// while the text stays put. When an image is attached, the upload runs
/// first and any failure aborts the whole submission.
#[component]
pub fn NoteComposer(
    mut note_text: Signal<String>,
    disabled: bool,
    on_saved: EventHandler<()>,
) -> Element {
    let mut link_url = use_signal(String::new);
    let mut attachment = use_signal(|| Option::<(String, Vec<u8>)>::None);
    // Bumped to remount the file input, which is the only way to clear it.
    let mut file_epoch = use_signal(|| 0u32);
    let mut status = use_signal(|| Option::<String>::None);
    let mut error = use_signal(|| Option::<String>::None);

    let pick_file = move |evt: FormEvent| {
        let Some(file_engine) = evt.files() else {
            return;
        };
        let Some(name) = file_engine.files().first().cloned() else {
            attachment.set(None);
            return;
        };
        spawn(async move {
            match file_engine.read_file(&name).await {
                Some(bytes) => attachment.set(Some((name, bytes))),
                None => error.set(Some(format!("Could not read {name}."))),
            }
        });
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);
            status.set(None);

            let client = ApiClient::default();

            let image_url = match attachment() {
                Some((name, bytes)) => match client.upload_image(&name, bytes).await {
                    Ok(url) => Some(url),
                    Err(e) => {
                        error.set(Some(e.to_string()));
                        return;
                    }
                },
                None => None,
            };

            let link = links::normalize_link(&link_url(), &current_origin());
            if let Err(e) = client
                .save_note(&note_text(), image_url.as_deref(), link.as_deref())
                .await
            {
                error.set(Some(e.to_string()));
                return;
            }

            attachment.set(None);
            link_url.set(String::new());
            file_epoch += 1;
            on_saved.call(());

            status.set(Some("Note saved.".to_string()));
            sleep_ms(SAVED_NOTICE_MS).await;
            status.set(None);
        });
    };

    rsx! {
        form {
            class: "composer",
            onsubmit: handle_submit,

            if let Some(err) = error() {
                div { class: "form-error", "{err}" }
            }
            if let Some(msg) = status() {
                div { class: "form-status", "{msg}" }
            }

            textarea {
                class: "composer-text",
                placeholder: "Write a note...",
                disabled: disabled,
                value: note_text(),
                oninput: move |evt: FormEvent| note_text.set(evt.value()),
            }
            input {
                key: "{file_epoch}",
                class: "composer-file",
                r#type: "file",
                accept: ".png,.jpg,.jpeg,.gif,.webp",
                disabled: disabled,
                onchange: pick_file,
            }
            input {
                class: "composer-link",
                r#type: "url",
                placeholder: "Attach a link (optional)",
                disabled: disabled,
                value: link_url(),
                oninput: move |evt: FormEvent| link_url.set(evt.value()),
            }
            button {
                class: "composer-submit",
                r#type: "submit",
                disabled: disabled,
                "Save note"
            }
        }
    }
}
