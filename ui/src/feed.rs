//! Feed rendering: the server-ordered note list and per-note cards.

use api::{links, timefmt, Note};
use dioxus::prelude::*;

use crate::nav::current_origin;

/// The note feed. Rebuilt from scratch from the server-ordered list on
/// every render; no client-side re-sorting or diffing.
#[component]
pub fn NoteFeed(notes: Vec<Note>, viewer: Option<String>, on_delete: EventHandler<i64>) -> Element {
    if notes.is_empty() {
        return rsx! {
            div { class: "feed-empty", "No notes yet." }
        };
    }

    rsx! {
        div {
            class: "feed",
            for note in notes {
                NoteCard {
                    key: "{note.id}",
                    note,
                    viewer: viewer.clone(),
                    on_delete,
                }
            }
        }
    }
}

/// One note: author, time, text, and the enrichments computed purely from
/// the note's own fields. The delete button renders only for the author.
#[component]
pub fn NoteCard(note: Note, viewer: Option<String>, on_delete: EventHandler<i64>) -> Element {
    let deletable = note.deletable_by(viewer.as_deref());
    let video = links::youtube_id(&note.note);
    let link = note
        .link_url
        .as_deref()
        .and_then(|raw| links::normalize_link(raw, &current_origin()));
    let time = note
        .created_at
        .as_deref()
        .map(|raw| timefmt::format_timestamp(raw).unwrap_or_else(|| raw.to_string()));
    let id = note.id;

    rsx! {
        div {
            class: "note-card",
            div {
                class: "note-header",
                span { class: "note-author", "{note.username}" }
                if let Some(time) = time {
                    span { class: "note-time", "{time}" }
                }
                if deletable {
                    button {
                        class: "note-delete",
                        title: "Delete note",
                        onclick: move |_| on_delete.call(id),
                        "Delete"
                    }
                }
            }
            p { class: "note-body", "{note.note}" }
            if let Some(video) = video {
                iframe {
                    class: "note-video",
                    src: "https://www.youtube.com/embed/{video}",
                    allowfullscreen: true,
                }
            }
            if let Some(image_url) = note.image_url.as_deref() {
                img {
                    class: "note-image",
                    src: "{image_url}",
                    alt: "attached image",
                }
            }
            if let Some(link) = link {
                div {
                    class: "note-link",
                    a {
                        href: "{link}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "{link}"
                    }
                    iframe {
                        class: "note-link-preview",
                        src: "{link}",
                        "sandbox": "allow-scripts",
                    }
                }
            }
        }
    }
}
