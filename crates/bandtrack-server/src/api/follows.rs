use axum::{extract::State, Json};
use bandtrack_db::Id;
use serde::Serialize;
use std::sync::Arc;

use crate::error::{ApiError, ApiPath};
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowResponse {
    pub message: String,
    pub followed_artists: Vec<Id>,
}

fn user_or_artist_not_found() -> ApiError {
    ApiError::not_found("User or artist not found")
}

/// POST /users/:user_id/follow/:artist_id
///
/// Following an artist already in the set changes nothing.
pub async fn follow_artist(
    State(state): State<Arc<AppState>>,
    ApiPath((user_id, artist_id)): ApiPath<(Id, Id)>,
) -> Result<Json<FollowResponse>, ApiError> {
    let mut store = state.store.write().await;
    let artist_name = store
        .find_artist(artist_id)
        .map(|a| a.name.clone())
        .ok_or_else(user_or_artist_not_found)?;
    let user = store
        .find_user_mut(user_id)
        .ok_or_else(user_or_artist_not_found)?;

    if user.follow(artist_id) {
        tracing::info!(user_id, artist_id, "artist followed");
    }

    Ok(Json(FollowResponse {
        message: format!("User {} now follows {artist_name}", user.username),
        followed_artists: user.followed_artists.clone(),
    }))
}

/// DELETE /users/:user_id/follow/:artist_id
///
/// Unfollowing an artist that is not followed changes nothing.
pub async fn unfollow_artist(
    State(state): State<Arc<AppState>>,
    ApiPath((user_id, artist_id)): ApiPath<(Id, Id)>,
) -> Result<Json<FollowResponse>, ApiError> {
    let mut store = state.store.write().await;
    let artist_name = store
        .find_artist(artist_id)
        .map(|a| a.name.clone())
        .ok_or_else(user_or_artist_not_found)?;
    let user = store
        .find_user_mut(user_id)
        .ok_or_else(user_or_artist_not_found)?;

    if user.unfollow(artist_id) {
        tracing::info!(user_id, artist_id, "artist unfollowed");
    }

    Ok(Json(FollowResponse {
        message: format!("User {} unfollowed {artist_name}", user.username),
        followed_artists: user.followed_artists.clone(),
    }))
}
