//! # API crate — REST bindings and shared logic for Notewall
//!
//! The Notewall backend is an external REST service; this crate is the only
//! place the frontends talk to it from. It also hosts the small pieces of
//! pure logic the UI needs, so they stay unit-testable off the browser.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`client::ApiClient`] with one async method per backend endpoint, plus [`client::ApiError`] |
//! | [`links`] | Link normalization (http/https only) and YouTube video-id extraction |
//! | [`models`] | Wire types (`User`, `Note`, response envelopes) and feed predicates |
//! | [`timefmt`] | Human formatting of the backend's `created_at` timestamps |
//! | [`validate`] | Pre-network credential and signup validation |

pub mod client;
pub mod links;
pub mod models;
pub mod timefmt;
pub mod validate;

pub use client::{ApiClient, ApiError};
pub use models::{
    has_own_notes, AdminUser, AdminUsersResponse, AuthResponse, MeResponse, Note, NotesResponse,
    UploadResponse, User,
};
