//! HTTP client for the Notewall backend.
//!
//! One async method per endpoint. All JSON requests go out with
//! `Content-Type: application/json`; the image upload is multipart. Any
//! non-2xx response is expected to carry a JSON body with an `error`
//! string; when the body does not parse, the caller gets a generic
//! failure message instead.

use reqwest::multipart;
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

use crate::models::{
    AdminUser, AdminUsersResponse, AuthResponse, MeResponse, Note, NotesResponse, UploadResponse,
};

/// Fallback message for error responses without a usable body.
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend's `error` field, or [`GENERIC_FAILURE`].
    #[error("{0}")]
    Server(String),
    /// Transport-level failure (DNS, connection, fetch rejection).
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Thin client over the backend's REST endpoints.
///
/// Cheap to construct; views build one per operation the same way the rest
/// of the workspace builds repositories per use.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base: String,
    http: reqwest::Client,
}

impl Default for ApiClient {
    fn default() -> Self {
        #[cfg(target_arch = "wasm32")]
        let base = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default();
        #[cfg(not(target_arch = "wasm32"))]
        let base = String::from("http://localhost:8000");
        Self::new(base)
    }
}

impl ApiClient {
    /// Client rooted at `base`, e.g. the page origin.
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Session check.
    pub async fn me(&self) -> Result<MeResponse, ApiError> {
        let resp = check(self.http.get(self.url("/api/me")).send().await?).await?;
        Ok(resp.json().await?)
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let resp = self
            .http
            .post(self.url("/api/login"))
            .json(&json!({ "username": username, "password": password }))
            .send()
            .await?;
        Ok(check(resp).await?.json().await?)
    }

    pub async fn signup(&self, username: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let resp = self
            .http
            .post(self.url("/api/signup"))
            .json(&json!({ "username": username, "password": password }))
            .send()
            .await?;
        Ok(check(resp).await?.json().await?)
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        check(self.http.post(self.url("/api/logout")).send().await?).await?;
        Ok(())
    }

    /// The full feed, in server order.
    pub async fn notes(&self) -> Result<Vec<Note>, ApiError> {
        let resp = check(self.http.get(self.url("/api/notes")).send().await?).await?;
        Ok(resp.json::<NotesResponse>().await?.notes)
    }

    /// Save a note. `link_url` must already be normalized (see
    /// [`crate::links::normalize_link`]); `None` attachments go out as null.
    pub async fn save_note(
        &self,
        note: &str,
        image_url: Option<&str>,
        link_url: Option<&str>,
    ) -> Result<(), ApiError> {
        let resp = self
            .http
            .post(self.url("/api/note"))
            .json(&json!({ "note": note, "image_url": image_url, "link_url": link_url }))
            .send()
            .await?;
        check(resp).await?;
        Ok(())
    }

    /// Upload an image; returns the URL the backend stored it under.
    pub async fn upload_image(&self, filename: &str, bytes: Vec<u8>) -> Result<String, ApiError> {
        let part = multipart::Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str(mime_for(filename))?;
        let form = multipart::Form::new().part("file", part);
        let resp = self
            .http
            .post(self.url("/api/upload_image"))
            .multipart(form)
            .send()
            .await?;
        Ok(check(resp).await?.json::<UploadResponse>().await?.url)
    }

    /// Delete every note owned by the signed-in user.
    pub async fn delete_all(&self) -> Result<(), ApiError> {
        check(
            self.http
                .post(self.url("/api/messages/delete"))
                .send()
                .await?,
        )
        .await?;
        Ok(())
    }

    /// Delete a single note by id. The backend refuses ids owned by others.
    pub async fn delete_one(&self, id: i64) -> Result<(), ApiError> {
        let resp = self
            .http
            .post(self.url("/api/messages/delete_one"))
            .json(&json!({ "id": id }))
            .send()
            .await?;
        check(resp).await?;
        Ok(())
    }

    pub async fn admin_users(&self) -> Result<Vec<AdminUser>, ApiError> {
        let resp = check(self.http.get(self.url("/api/admin/users")).send().await?).await?;
        Ok(resp.json::<AdminUsersResponse>().await?.users)
    }

    pub async fn admin_delete_user(&self, username: &str) -> Result<(), ApiError> {
        let resp = self
            .http
            .post(self.url("/api/admin/users/delete"))
            .json(&json!({ "username": username }))
            .send()
            .await?;
        check(resp).await?;
        Ok(())
    }
}

async fn check(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    if resp.status().is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::Server(parse_error_body(&body)))
}

fn parse_error_body(body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        error: Option<String>,
    }
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|e| !e.is_empty())
        .unwrap_or_else(|| GENERIC_FAILURE.to_string())
}

fn mime_for(filename: &str) -> &'static str {
    let ext = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_surfaces_server_message() {
        assert_eq!(
            parse_error_body(r#"{"error": "Invalid credentials."}"#),
            "Invalid credentials."
        );
    }

    #[test]
    fn error_body_falls_back_when_unparseable() {
        assert_eq!(parse_error_body("<html>502</html>"), GENERIC_FAILURE);
        assert_eq!(parse_error_body(""), GENERIC_FAILURE);
        assert_eq!(parse_error_body(r#"{"detail": "nope"}"#), GENERIC_FAILURE);
        assert_eq!(parse_error_body(r#"{"error": ""}"#), GENERIC_FAILURE);
    }

    #[test]
    fn mime_mapping_covers_allowed_uploads() {
        assert_eq!(mime_for("photo.PNG"), "image/png");
        assert_eq!(mime_for("photo.jpeg"), "image/jpeg");
        assert_eq!(mime_for("anim.gif"), "image/gif");
        assert_eq!(mime_for("pic.webp"), "image/webp");
        assert_eq!(mime_for("notes.txt"), "application/octet-stream");
        assert_eq!(mime_for("noext"), "application/octet-stream");
    }

    #[test]
    fn urls_join_base_and_path() {
        let client = ApiClient::new("http://localhost:8000");
        assert_eq!(client.url("/api/me"), "http://localhost:8000/api/me");
    }
}
