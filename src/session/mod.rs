use axum_extra::extract::cookie::{Cookie, CookieJar};
use time::Duration;

/// Fixed key under which the client holds the session flag.
pub const SESSION_FLAG_KEY: &str = "isAuthenticated";

/// Read/write access to client-held session state.
///
/// The flag is advisory only: a bare string, no token, no expiry, no
/// server-side validation. Taking the store as a trait keeps the guard
/// testable against an in-memory fake instead of a real cookie jar.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// Session store backed by the request's cookie jar.
pub struct CookieSessionStore {
    jar: CookieJar,
}

impl CookieSessionStore {
    pub fn new(jar: CookieJar) -> Self {
        Self { jar }
    }
}

impl SessionStore for CookieSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.jar.get(key).map(|cookie| cookie.value().to_string())
    }

    fn set(&mut self, key: &str, value: &str) {
        let cookie = Cookie::new(key.to_string(), value.to_string());
        self.jar = std::mem::take(&mut self.jar).add(cookie);
    }
}

/// Cookie marking the client as authenticated, set on login submission.
pub fn create_flag_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_FLAG_KEY, "true"))
        .path("/")
        .http_only(true)
        .max_age(Duration::days(7))
        .build()
}

/// Expired cookie that removes the flag on logout.
pub fn clear_flag_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_FLAG_KEY, ""))
        .path("/")
        .http_only(true)
        .max_age(Duration::ZERO)
        .build()
}

/// In-memory session store for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    values: std::collections::HashMap<String, String>,
}

#[cfg(test)]
impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}
