//! This crate contains all shared UI for the workspace.

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState, LogoutButton};

mod feed;
pub use feed::{NoteCard, NoteFeed};

mod composer;
pub use composer::NoteComposer;

mod notes_screen;
pub use notes_screen::NotesScreen;

pub mod nav;
