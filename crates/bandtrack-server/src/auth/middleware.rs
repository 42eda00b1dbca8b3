use axum::{
    body::{self, Body},
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use bandtrack_db::{entities::User, Id, Store};
use std::sync::Arc;

use super::authenticator::authorize_admin;
use crate::error::ApiError;
use crate::state::AppState;

/// Admin bodies are small JSON objects.
const MAX_ADMIN_BODY_BYTES: usize = 64 * 1024;

/// The user id an admin request claims to act as.
///
/// Handlers must call [`AdminClaim::authorize`] under the same store guard
/// they read or mutate with; the role can change between this middleware
/// and the handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdminClaim(pub Id);

impl AdminClaim {
    pub fn authorize<'s>(&self, store: &'s Store) -> Result<&'s User, ApiError> {
        authorize_admin(store, Some(self.0))
    }
}

/// Middleware: turn away callers that are not admins.
///
/// The body is buffered so the claim can be read from it, then handed on
/// unchanged to the handler together with an [`AdminClaim`]. Rejecting here
/// keeps a 403 ahead of any body validation in the handler.
pub async fn require_admin(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    let (parts, body) = request.into_parts();
    let bytes = match body::to_bytes(body, MAX_ADMIN_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(_) => {
            return ApiError::validation("Request body is too large or unreadable")
                .into_response()
        }
    };

    let claimed = state.authenticator.claimed_user(&parts, &bytes);
    let verdict = {
        let store = state.store.read().await;
        authorize_admin(&store, claimed).map(|admin| admin.id)
    };

    match verdict {
        Ok(admin_id) => {
            let mut request = Request::from_parts(parts, Body::from(bytes));
            request.extensions_mut().insert(AdminClaim(admin_id));
            next.run(request).await
        }
        Err(err) => {
            tracing::warn!(path = %parts.uri.path(), ?claimed, "admin access denied");
            err.into_response()
        }
    }
}
