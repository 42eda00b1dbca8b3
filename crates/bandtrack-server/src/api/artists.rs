use axum::{extract::State, Json};
use bandtrack_db::entities::{Artist, Review};
use bandtrack_db::Id;
use serde::Serialize;
use std::sync::Arc;

use crate::error::{ApiError, ApiPath};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ArtistDetailResponse {
    pub artist: Artist,
    pub reviews: Vec<Review>,
}

/// GET /artists
pub async fn list_artists(State(state): State<Arc<AppState>>) -> Json<Vec<Artist>> {
    Json(state.store.read().await.artists().all())
}

/// GET /artists/:id
pub async fn get_artist(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<Id>,
) -> Result<Json<ArtistDetailResponse>, ApiError> {
    let store = state.store.read().await;
    let artist = store
        .find_artist(id)
        .cloned()
        .ok_or_else(|| ApiError::not_found("Artist not found"))?;

    Ok(Json(ArtistDetailResponse {
        artist,
        reviews: store.reviews_for_artist(id),
    }))
}
