//! Wire types exchanged with the Notewall backend.
//!
//! Everything here is received from the server; the client never mints ids
//! or identities of its own. The shapes follow the backend's JSON exactly,
//! with `#[serde(default)]` on the fields older rows may omit.

use serde::{Deserialize, Serialize};

/// The authenticated user, as reported by login/signup/session-check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub username: String,
    #[serde(default)]
    pub is_admin: bool,
}

/// One feed entry. `created_at` stays a raw string on the wire; see
/// [`crate::timefmt`] for display formatting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Note {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub link_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Note {
    /// Whether `viewer` may delete this note. Deletion is offered only on
    /// the viewer's own notes; the backend enforces the same rule.
    pub fn deletable_by(&self, viewer: Option<&str>) -> bool {
        viewer.is_some_and(|v| v == self.username)
    }
}

/// Whether any note in the feed belongs to `viewer`. Gates the bulk-delete
/// affordance; recomputed on every feed render.
pub fn has_own_notes(notes: &[Note], viewer: Option<&str>) -> bool {
    viewer.is_some_and(|v| notes.iter().any(|n| n.username == v))
}

/// `GET /api/me` response. `user` and `note` are present only when
/// `authenticated` is true.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct MeResponse {
    #[serde(default)]
    pub authenticated: bool,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub note: Option<String>,
}

/// `POST /api/login` / `POST /api/signup` response.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AuthResponse {
    pub user: User,
    #[serde(default)]
    pub note: Option<String>,
}

/// `GET /api/notes` response.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct NotesResponse {
    #[serde(default)]
    pub notes: Vec<Note>,
}

/// `POST /api/upload_image` response.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct UploadResponse {
    pub url: String,
}

/// One row of the admin user listing.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AdminUser {
    pub username: String,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub is_admin: bool,
}

/// `GET /api/admin/users` response.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AdminUsersResponse {
    #[serde(default)]
    pub users: Vec<AdminUser>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(id: i64, username: &str) -> Note {
        Note {
            id,
            username: username.to_string(),
            note: String::new(),
            image_url: None,
            link_url: None,
            created_at: None,
        }
    }

    #[test]
    fn deletable_only_by_author() {
        let n = note(1, "alice");
        assert!(n.deletable_by(Some("alice")));
        assert!(!n.deletable_by(Some("bob")));
        assert!(!n.deletable_by(None));
    }

    #[test]
    fn own_notes_gate_bulk_delete() {
        let feed = vec![note(1, "alice"), note(2, "bob")];
        assert!(has_own_notes(&feed, Some("alice")));
        assert!(!has_own_notes(&feed, Some("carol")));
        assert!(!has_own_notes(&feed, None));
        assert!(!has_own_notes(&[], Some("alice")));
    }

    #[test]
    fn me_response_signed_out() {
        let me: MeResponse = serde_json::from_str(r#"{"authenticated": false}"#).unwrap();
        assert!(!me.authenticated);
        assert!(me.user.is_none());
        assert!(me.note.is_none());
    }

    #[test]
    fn me_response_signed_in() {
        let body = r#"{
            "authenticated": true,
            "user": {"username": "alice", "is_admin": false},
            "note": "hello"
        }"#;
        let me: MeResponse = serde_json::from_str(body).unwrap();
        assert!(me.authenticated);
        assert_eq!(me.user.unwrap().username, "alice");
        assert_eq!(me.note.as_deref(), Some("hello"));
    }

    #[test]
    fn notes_response_with_nullable_attachments() {
        let body = r#"{"notes": [
            {"id": 7, "username": "bob", "note": "hi",
             "image_url": "/uploads/a.png", "link_url": null,
             "created_at": "2024-05-01 13:45:10"},
            {"id": 8, "username": "alice", "note": ""}
        ]}"#;
        let resp: NotesResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.notes.len(), 2);
        assert_eq!(resp.notes[0].image_url.as_deref(), Some("/uploads/a.png"));
        assert!(resp.notes[0].link_url.is_none());
        assert_eq!(
            resp.notes[0].created_at.as_deref(),
            Some("2024-05-01 13:45:10")
        );
        assert!(resp.notes[1].created_at.is_none());
    }

    #[test]
    fn admin_users_response() {
        let body = r#"{"users": [
            {"username": "root@example.com", "note": "", "is_admin": true},
            {"username": "bob@example.com", "note": "todo"}
        ]}"#;
        let resp: AdminUsersResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.users.len(), 2);
        assert!(resp.users[0].is_admin);
        assert!(!resp.users[1].is_admin);
    }
}
