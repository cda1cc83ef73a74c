//! Chat page: the signed-in notes view.

use dioxus::prelude::*;
use ui::NotesScreen;

#[component]
pub fn Chat() -> Element {
    rsx! {
        div {
            class: "page page-chat",
            h1 { "Chat" }
            NotesScreen {}
        }
    }
}
