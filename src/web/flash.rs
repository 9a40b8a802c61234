//! One-shot flash messages carried across a redirect in a cookie.
//!
//! Messages queued while handling a request are serialized as JSON,
//! percent-encoded, and stored in a cookie on the response; the next
//! rendered page takes them off the jar and clears the cookie.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};

/// Name of the cookie holding queued flash messages.
const FLASH_COOKIE: &str = "taskboard_flash";

/// Characters escaped when storing the JSON payload in a cookie value.
const COOKIE_UNSAFE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b',')
    .add(b';')
    .add(b'\\')
    .add(b'%');

/// Queue of user-facing messages for the next rendered page.
#[derive(Debug, Default)]
pub struct Flash {
    messages: Vec<String>,
}

impl Flash {
    /// Creates an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    /// Queues a message.
    pub fn push(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    /// Stores the queued messages on the jar for the next request.
    ///
    /// An empty queue leaves the jar untouched.
    #[must_use]
    pub fn store(self, jar: CookieJar) -> CookieJar {
        if self.messages.is_empty() {
            return jar;
        }
        let payload = serde_json::to_string(&self.messages).unwrap_or_default();
        let encoded = utf8_percent_encode(&payload, COOKIE_UNSAFE).to_string();
        let mut cookie = Cookie::new(FLASH_COOKIE, encoded);
        cookie.set_path("/");
        cookie.set_http_only(true);
        cookie.set_same_site(SameSite::Lax);
        jar.add(cookie)
    }

    /// Takes queued messages off the jar, clearing the cookie.
    ///
    /// A missing or malformed cookie yields no messages; flash state is
    /// best-effort presentation and never an error.
    #[must_use]
    pub fn take(jar: CookieJar) -> (CookieJar, Vec<String>) {
        let decoded = jar.get(FLASH_COOKIE).map(|cookie| {
            percent_decode_str(cookie.value())
                .decode_utf8_lossy()
                .into_owned()
        });
        let Some(payload) = decoded else {
            return (jar, Vec::new());
        };
        let messages = serde_json::from_str(&payload).unwrap_or_default();
        let mut removal = Cookie::from(FLASH_COOKIE);
        removal.set_path("/");
        (jar.remove(removal), messages)
    }
}
