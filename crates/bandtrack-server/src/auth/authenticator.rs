//! Caller identity and the admin gate.
//!
//! Requests carry no session or token: the caller asserts who they are on every
//! privileged call. Extracting that assertion sits behind [`Authenticator`] so a
//! token scheme can replace it without touching the handlers.

use axum::http::request::Parts;
use bandtrack_db::{entities::User, Id, Store};
use serde_json::Value;

use crate::error::ApiError;

pub trait Authenticator: Send + Sync {
    /// The user id the request claims to act as, if any.
    fn claimed_user(&self, parts: &Parts, body: &[u8]) -> Option<Id>;
}

/// Reads the claim from the `userId` field of a JSON body.
///
/// Accepts a JSON number or a numeric string.
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyUserId;

impl Authenticator for BodyUserId {
    fn claimed_user(&self, _parts: &Parts, body: &[u8]) -> Option<Id> {
        let value: Value = serde_json::from_slice(body).ok()?;
        match value.get("userId")? {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

/// Resolve `claimed` to an admin user or fail with access denied.
pub fn authorize_admin(store: &Store, claimed: Option<Id>) -> Result<&User, ApiError> {
    claimed
        .and_then(|id| store.find_user(id))
        .filter(|user| user.is_admin())
        .ok_or(ApiError::AccessDenied)
}
