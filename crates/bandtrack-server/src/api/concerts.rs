use axum::{extract::State, Json};
use bandtrack_db::entities::Concert;
use bandtrack_db::Id;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::{ApiError, ApiPath, ApiQuery};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConcertFilter {
    /// Kept as text so an empty `?artistId=` means "no filter".
    pub artist_id: Option<String>,
}

impl ConcertFilter {
    pub fn artist_id(&self) -> Result<Option<Id>, ApiError> {
        match self.artist_id.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => raw
                .parse()
                .map(Some)
                .map_err(|_| ApiError::validation("artistId must be a positive integer")),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConcertDetailResponse {
    #[serde(flatten)]
    pub concert: Concert,
    /// `None` once the artist has been deleted.
    pub artist_name: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketResponse {
    pub message: &'static str,
    pub ticket_url: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareResponse {
    pub message: &'static str,
    pub share_link: String,
}

fn concert_not_found() -> ApiError {
    ApiError::not_found("Concert not found")
}

/// GET /concerts?artistId=
pub async fn list_concerts(
    State(state): State<Arc<AppState>>,
    ApiQuery(filter): ApiQuery<ConcertFilter>,
) -> Result<Json<Vec<Concert>>, ApiError> {
    let artist_id = filter.artist_id()?;
    let store = state.store.read().await;
    let concerts = match artist_id {
        Some(artist_id) => store.concerts_for_artist(artist_id),
        None => store.concerts().all(),
    };
    Ok(Json(concerts))
}

/// GET /concerts/:id
pub async fn get_concert(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<Id>,
) -> Result<Json<ConcertDetailResponse>, ApiError> {
    let store = state.store.read().await;
    let concert = store.find_concert(id).cloned().ok_or_else(concert_not_found)?;
    let artist_name = store.find_artist(concert.artist_id).map(|a| a.name.clone());

    Ok(Json(ConcertDetailResponse {
        concert,
        artist_name,
    }))
}

/// POST /concerts/:id/purchase
///
/// Hands back the stored ticket link; no payment happens here.
pub async fn purchase_ticket(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<Id>,
) -> Result<Json<TicketResponse>, ApiError> {
    let store = state.store.read().await;
    let concert = store.find_concert(id).ok_or_else(concert_not_found)?;

    Ok(Json(TicketResponse {
        message: "Ticket purchase link",
        ticket_url: concert.ticket_url.clone(),
    }))
}

/// GET /concerts/:id/share
pub async fn share_concert(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<Id>,
) -> Result<Json<ShareResponse>, ApiError> {
    let store = state.store.read().await;
    let concert = store.find_concert(id).ok_or_else(concert_not_found)?;

    Ok(Json(ShareResponse {
        message: "Share this link with your friends",
        share_link: state.share_link(concert.id),
    }))
}
