//! Cookie-backed session store.
//!
//! "Signed in" means both the token cookie and a parseable user-record
//! cookie are present. Both are written with a 7-day expiry, `SameSite=Strict`
//! and `Secure`. A user record that no longer parses is purged and treated as
//! signed out.

use crate::config::SESSION_TTL_DAYS;
use chrono::{Duration, Utc};
use leptos::logging::{error, log};
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

pub const AUTH_TOKEN_COOKIE: &str = "authToken";
pub const USER_DATA_COOKIE: &str = "userData";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredUser {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: String,
}

fn html_document() -> Option<HtmlDocument> {
    leptos::document().dyn_into::<HtmlDocument>().ok()
}

/// `Set-Cookie`-style attribute string for `document.cookie`. Name and value
/// must already be percent-encoded.
fn build_cookie(name: &str, value: &str, expires: &str) -> String {
    format!("{name}={value}; expires={expires}; path=/; secure; samesite=strict")
}

fn expiry(days: i64) -> String {
    (Utc::now() + Duration::days(days))
        .format("%a, %d %b %Y %H:%M:%S GMT")
        .to_string()
}

fn set_cookie(name: &str, value: &str, days: i64) {
    let Some(doc) = html_document() else {
        return;
    };
    let encoded = String::from(js_sys::encode_uri_component(value));
    if let Err(err) = doc.set_cookie(&build_cookie(name, &encoded, &expiry(days))) {
        error!("failed to set cookie {name}: {err:?}");
    }
}

/// Finds `name` in a `document.cookie` header. Values come back still
/// percent-encoded.
fn find_cookie(header: &str, name: &str) -> Option<String> {
    header.split(';').find_map(|pair| {
        let pair = pair.trim();
        pair.strip_prefix(name)
            .and_then(|rest| rest.strip_prefix('='))
            .map(str::to_owned)
    })
}

fn get_cookie(name: &str) -> Option<String> {
    let header = html_document()?.cookie().ok()?;
    let raw = find_cookie(&header, name)?;
    js_sys::decode_uri_component(&raw).ok().map(String::from)
}

fn remove_cookie(name: &str) {
    if let Some(doc) = html_document() {
        // Expiry in the past deletes the cookie.
        let _ = doc.set_cookie(&build_cookie(name, "", "Thu, 01 Jan 1970 00:00:00 GMT"));
    }
}

/// Persist a fresh session after a successful sign-in.
pub fn store_session(token: &str, user: &StoredUser) {
    set_cookie(AUTH_TOKEN_COOKIE, token, SESSION_TTL_DAYS);
    match serde_json::to_string(user) {
        Ok(json) => set_cookie(USER_DATA_COOKIE, &json, SESSION_TTL_DAYS),
        Err(err) => error!("failed to serialize user record: {err}"),
    }
    log!("session stored for {}", user.username);
}

pub fn auth_token() -> Option<String> {
    get_cookie(AUTH_TOKEN_COOKIE)
}

pub fn parse_user_record(raw: &str) -> Option<StoredUser> {
    serde_json::from_str(raw).ok()
}

/// The stored user record, or `None` if absent or corrupt. A corrupt record
/// is removed as a side effect so the next read is clean.
pub fn stored_user() -> Option<StoredUser> {
    let raw = get_cookie(USER_DATA_COOKIE)?;
    match parse_user_record(&raw) {
        Some(user) => Some(user),
        None => {
            error!("stored user record did not parse; clearing it");
            remove_cookie(USER_DATA_COOKIE);
            None
        }
    }
}

/// Clears both session cookies unconditionally. Works offline; sign-out never
/// depends on network reachability.
pub fn clear_session() {
    remove_cookie(AUTH_TOKEN_COOKIE);
    remove_cookie(USER_DATA_COOKIE);
    log!("session cookies cleared");
}

pub fn is_authenticated() -> bool {
    auth_token().is_some() && stored_user().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cookie_string_carries_policy_attributes() {
        let cookie = build_cookie("authToken", "abc123", "Thu, 01 Jan 2026 00:00:00 GMT");
        assert_eq!(
            cookie,
            "authToken=abc123; expires=Thu, 01 Jan 2026 00:00:00 GMT; path=/; secure; samesite=strict"
        );
    }

    #[test]
    fn find_cookie_handles_spacing_and_prefix_names() {
        let header = "authToken=tok-1; userDataOld=zzz; userData=%7B%22id%22%3A%221%22%7D";
        assert_eq!(find_cookie(header, "authToken").as_deref(), Some("tok-1"));
        assert_eq!(
            find_cookie(header, "userData").as_deref(),
            Some("%7B%22id%22%3A%221%22%7D")
        );
        assert_eq!(find_cookie(header, "missing"), None);
    }

    #[test]
    fn user_record_round_trips() {
        let user = StoredUser {
            id: "42".into(),
            username: "nadia".into(),
            email: "nadia@example.com".into(),
            role: "client".into(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert_eq!(parse_user_record(&json), Some(user));
    }

    #[test]
    fn corrupt_user_record_parses_to_none() {
        assert_eq!(parse_user_record("{not json"), None);
        assert_eq!(parse_user_record(""), None);
        // Valid JSON, wrong shape.
        assert_eq!(parse_user_record("[1,2,3]"), None);
    }
}
