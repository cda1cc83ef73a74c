//! Navigation and timing helpers shared by the views.

use std::time::Duration;

/// Delay before auth-driven redirects, long enough to read the status line.
pub const REDIRECT_DELAY_MS: u64 = 1200;

/// How long the transient "saved" notice stays visible.
pub const SAVED_NOTICE_MS: u64 = 1500;

pub async fn sleep_ms(ms: u64) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(Duration::from_millis(ms)).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

/// Navigate to `path` via a full page load.
pub fn redirect(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!("redirect to {path} skipped outside the browser");
    }
}

/// Redirect after a fixed delay so a status message stays readable.
pub async fn redirect_after(path: &str, ms: u64) {
    sleep_ms(ms).await;
    redirect(path);
}

/// Origin used to resolve origin-relative links.
pub fn current_origin() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        String::from("http://localhost:8000")
    }
}
