//! Signed name-cookie session. The identity is just the login name sealed
//! with a SHA-256 signature over the process secret; there is no server-side
//! session store. Handlers receive it as an explicit `SessionUser` value.

use crate::web::AppState;
use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::{HeaderMap, header};
use axum::response::Redirect;
use sha2::{Digest, Sha256};

pub const SESSION_COOKIE: &str = "sesion";

fn signature(secret: &str, name: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    hasher.update(b":");
    hasher.update(name.as_bytes());
    hex::encode(hasher.finalize())
}

/// Cookie value: `hex(name).hex(sha256(secret ":" name))`. Hex keeps
/// arbitrary names cookie-safe.
pub fn seal(secret: &str, name: &str) -> String {
    format!(
        "{}.{}",
        hex::encode(name.as_bytes()),
        signature(secret, name)
    )
}

/// Recover the name from a sealed value. Tampered, truncated or otherwise
/// malformed values yield None.
pub fn unseal(secret: &str, value: &str) -> Option<String> {
    let (encoded, sig) = value.split_once('.')?;
    let name = String::from_utf8(hex::decode(encoded).ok()?).ok()?;
    if signature(secret, &name) == sig {
        Some(name)
    } else {
        None
    }
}

pub fn session_cookie(secret: &str, name: &str) -> String {
    format!("{}={}; Path=/; HttpOnly", SESSION_COOKIE, seal(secret, name))
}

pub fn clear_cookie() -> String {
    format!("{}=; Path=/; HttpOnly; Max-Age=0", SESSION_COOKIE)
}

pub fn user_from_headers(headers: &HeaderMap, secret: &str) -> Option<String> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;
    for pair in raw.split(';') {
        if let Some((key, value)) = pair.trim().split_once('=')
            && key == SESSION_COOKIE
        {
            return unseal(secret, value);
        }
    }
    None
}

/// Authenticated identity, threaded through handlers explicitly.
/// Missing or invalid session redirects to the login page.
pub struct SessionUser(pub String);

#[async_trait]
impl FromRequestParts<AppState> for SessionUser {
    type Rejection = Redirect;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match user_from_headers(&parts.headers, &state.secret) {
            Some(name) => Ok(SessionUser(name)),
            None => Err(Redirect::to("/")),
        }
    }
}
