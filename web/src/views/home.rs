//! Landing page: the public feed plus the composer when signed in.

use dioxus::prelude::*;
use ui::NotesScreen;

#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "page page-main",
            h1 { "Notewall" }
            NotesScreen {}
        }
    }
}
