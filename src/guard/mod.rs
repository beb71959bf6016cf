use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use tracing::debug;

use crate::config;
use crate::session::{CookieSessionStore, SessionStore, SESSION_FLAG_KEY};

/// Outcome of the pre-render check for one navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// The flag does not say "authenticated"; render the nested route.
    Allow,
    /// The client already appears authenticated; navigate to `location`
    /// instead of rendering.
    Redirect { location: String },
}

/// Decide whether a navigation into the unauthenticated area may render.
///
/// Only the exact string `"true"` closes the gate. Absent, `"false"`, or
/// malformed values all mean "not authenticated" — never an error. The
/// original href rides along as the `redirectPath` query parameter so the
/// landing page knows where the client was headed.
pub fn evaluate(flag: Option<&str>, current_href: &str, landing_path: &str) -> GuardDecision {
    match flag {
        Some("true") => GuardDecision::Redirect {
            location: redirect_location(landing_path, current_href),
        },
        _ => GuardDecision::Allow,
    }
}

/// Run the guard against a session store. Read-only: the store is never
/// written, whatever the decision.
pub fn check(store: &dyn SessionStore, current_href: &str, landing_path: &str) -> GuardDecision {
    let flag = store.get(SESSION_FLAG_KEY);
    evaluate(flag.as_deref(), current_href, landing_path)
}

fn redirect_location(landing_path: &str, current_href: &str) -> String {
    format!(
        "{}?redirectPath={}",
        landing_path,
        urlencoding::encode(current_href)
    )
}

/// Middleware for the unauthenticated subtree (login, password reset).
///
/// Runs before the nested handler; an already-authenticated client is
/// redirected to the landing page without the nested content ever
/// rendering.
pub async fn require_unauthenticated(req: Request, next: Next) -> Response {
    let store = CookieSessionStore::new(CookieJar::from_headers(req.headers()));

    let href = req
        .uri()
        .path_and_query()
        .map_or_else(|| req.uri().path().to_string(), |pq| pq.as_str().to_string());

    let landing_path = config::get_settings().landing_path.as_str();

    match check(&store, &href, landing_path) {
        GuardDecision::Allow => next.run(req).await,
        GuardDecision::Redirect { location } => {
            debug!("authenticated client sent from {} to {}", href, location);
            Redirect::to(&location).into_response()
        }
    }
}
