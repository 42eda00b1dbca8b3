//! Admin API: user, artist, concert and review management.
//!
//! Every route here sits behind `require_admin`. Each handler checks the
//! [`AdminClaim`] again under the store guard it works with, so a caller who
//! lost the admin role in between is refused. Removing an id that does not
//! exist still succeeds.

use axum::{extract::State, Extension, Json};
use bandtrack_db::entities::{Artist, Concert, Review, UserView};
use bandtrack_db::Id;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::auth::middleware::AdminClaim;
use crate::error::{ApiError, ApiJson};
use crate::state::AppState;

// ─── DTOs ───────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteUserRequest {
    pub delete_id: Id,
}

#[derive(Debug, Deserialize)]
pub struct AddArtistRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteArtistRequest {
    pub artist_id: Id,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddConcertRequest {
    pub title: String,
    pub date: String,
    pub artist_id: Id,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteConcertRequest {
    pub concert_id: Id,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteReviewRequest {
    pub review_id: Id,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct UsersDeletedResponse {
    pub message: &'static str,
    pub users: Vec<UserView>,
}

#[derive(Debug, Serialize)]
pub struct ArtistAddedResponse {
    pub message: &'static str,
    pub artist: Artist,
}

#[derive(Debug, Serialize)]
pub struct ConcertAddedResponse {
    pub message: &'static str,
    pub concert: Concert,
}

// ─── Users ──────────────────────────────────────────────────────────

/// POST /admin/users
pub async fn list_users(
    State(state): State<Arc<AppState>>,
    Extension(claim): Extension<AdminClaim>,
) -> Result<Json<Vec<UserView>>, ApiError> {
    let store = state.store.read().await;
    claim.authorize(&store)?;
    Ok(Json(store.users().iter().map(UserView::from).collect()))
}

/// POST /admin/user/delete
///
/// Reviews and follow sets that reference the user are left in place.
pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    Extension(claim): Extension<AdminClaim>,
    ApiJson(body): ApiJson<DeleteUserRequest>,
) -> Result<Json<UsersDeletedResponse>, ApiError> {
    let mut store = state.store.write().await;
    let admin_id = claim.authorize(&store)?.id;
    if store.remove_user(body.delete_id).is_some() {
        tracing::info!(admin_id, user_id = body.delete_id, "user deleted");
    }

    Ok(Json(UsersDeletedResponse {
        message: "User deleted",
        users: store.users().iter().map(UserView::from).collect(),
    }))
}

// ─── Artists ────────────────────────────────────────────────────────

/// POST /admin/artist/add
pub async fn add_artist(
    State(state): State<Arc<AppState>>,
    Extension(claim): Extension<AdminClaim>,
    ApiJson(body): ApiJson<AddArtistRequest>,
) -> Result<Json<ArtistAddedResponse>, ApiError> {
    let mut store = state.store.write().await;
    let admin_id = claim.authorize(&store)?.id;

    let name = body.name.trim();
    if name.is_empty() {
        return Err(ApiError::validation("Artist name is required"));
    }

    let artist = store.add_artist(name).clone();
    tracing::info!(admin_id, artist_id = artist.id, "artist added");

    Ok(Json(ArtistAddedResponse {
        message: "Artist added",
        artist,
    }))
}

/// POST /admin/artist/delete
///
/// Takes the artist's concerts and reviews with it. Follow sets keep the id.
pub async fn delete_artist(
    State(state): State<Arc<AppState>>,
    Extension(claim): Extension<AdminClaim>,
    ApiJson(body): ApiJson<DeleteArtistRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let mut store = state.store.write().await;
    let admin_id = claim.authorize(&store)?.id;
    let report = store.remove_artist(body.artist_id);
    tracing::info!(
        admin_id,
        artist_id = body.artist_id,
        removed = report.removed,
        concerts = report.concerts,
        reviews = report.reviews,
        "artist deleted"
    );

    Ok(Json(MessageResponse {
        message: "Artist deleted",
    }))
}

// ─── Concerts ───────────────────────────────────────────────────────

/// POST /admin/concert/add
pub async fn add_concert(
    State(state): State<Arc<AppState>>,
    Extension(claim): Extension<AdminClaim>,
    ApiJson(body): ApiJson<AddConcertRequest>,
) -> Result<Json<ConcertAddedResponse>, ApiError> {
    let mut store = state.store.write().await;
    let admin_id = claim.authorize(&store)?.id;

    let title = body.title.trim();
    if title.is_empty() {
        return Err(ApiError::validation("Concert title is required"));
    }

    let concert = store
        .add_concert(title, &body.date, body.artist_id, &state.ticket_base_url)
        .clone();
    tracing::info!(
        admin_id,
        concert_id = concert.id,
        artist_id = concert.artist_id,
        "concert added"
    );

    Ok(Json(ConcertAddedResponse {
        message: "Concert added",
        concert,
    }))
}

/// POST /admin/concert/delete
///
/// Reviews tagged with the concert go too; artist-level reviews stay.
pub async fn delete_concert(
    State(state): State<Arc<AppState>>,
    Extension(claim): Extension<AdminClaim>,
    ApiJson(body): ApiJson<DeleteConcertRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let mut store = state.store.write().await;
    let admin_id = claim.authorize(&store)?.id;
    let report = store.remove_concert(body.concert_id);
    tracing::info!(
        admin_id,
        concert_id = body.concert_id,
        removed = report.removed,
        reviews = report.reviews,
        "concert deleted"
    );

    Ok(Json(MessageResponse {
        message: "Concert deleted",
    }))
}

// ─── Reviews ────────────────────────────────────────────────────────

/// POST /admin/review/delete
pub async fn delete_review(
    State(state): State<Arc<AppState>>,
    Extension(claim): Extension<AdminClaim>,
    ApiJson(body): ApiJson<DeleteReviewRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let mut store = state.store.write().await;
    let admin_id = claim.authorize(&store)?.id;
    if store.remove_review(body.review_id).is_some() {
        tracing::info!(admin_id, review_id = body.review_id, "review deleted");
    }

    Ok(Json(MessageResponse {
        message: "Review deleted",
    }))
}

/// POST /admin/all-reviews
pub async fn list_all_reviews(
    State(state): State<Arc<AppState>>,
    Extension(claim): Extension<AdminClaim>,
) -> Result<Json<Vec<Review>>, ApiError> {
    let store = state.store.read().await;
    claim.authorize(&store)?;
    Ok(Json(store.reviews().all()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_requests_ignore_user_id() {
        let req: DeleteUserRequest =
            serde_json::from_str(r#"{"userId":999,"deleteId":1}"#).unwrap();
        assert_eq!(req.delete_id, 1);

        let req: AddConcertRequest = serde_json::from_str(
            r#"{"userId":999,"title":"Tour","date":"2026-01-10","artistId":4}"#,
        )
        .unwrap();
        assert_eq!(req.artist_id, 4);
        assert_eq!(req.date, "2026-01-10");
    }

    #[test]
    fn test_delete_requests_require_target() {
        assert!(serde_json::from_str::<DeleteArtistRequest>(r#"{"userId":999}"#).is_err());
        assert!(serde_json::from_str::<DeleteConcertRequest>(r#"{"userId":999}"#).is_err());
        assert!(serde_json::from_str::<DeleteReviewRequest>(r#"{"userId":999}"#).is_err());
    }

    #[test]
    fn test_users_deleted_response_has_no_passwords() {
        let resp = UsersDeletedResponse {
            message: "User deleted",
            users: vec![UserView {
                id: 999,
                username: "admin".into(),
                role: bandtrack_db::entities::UserRole::Admin,
                followed_artists: vec![],
            }],
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["users"][0]["role"], "admin");
        assert!(json["users"][0].get("password").is_none());
    }

    fn state() -> Arc<AppState> {
        Arc::new(AppState::from_config(&crate::Config::default()))
    }

    #[tokio::test]
    async fn test_delete_refused_once_admin_is_gone() {
        let state = state();
        state.store.write().await.remove_user(999);

        let err = delete_user(
            State(state.clone()),
            Extension(AdminClaim(999)),
            ApiJson(DeleteUserRequest { delete_id: 1 }),
        )
        .await
        .unwrap_err();
        assert_eq!(err, ApiError::AccessDenied);
        assert!(state.store.read().await.find_user(1).is_some());
    }

    #[tokio::test]
    async fn test_add_artist_refused_once_admin_is_demoted() {
        let state = state();
        state
            .store
            .write()
            .await
            .find_user_mut(999)
            .unwrap()
            .role = bandtrack_db::entities::UserRole::User;

        let err = add_artist(
            State(state.clone()),
            Extension(AdminClaim(999)),
            ApiJson(AddArtistRequest {
                name: "Midnight Echo".into(),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err, ApiError::AccessDenied);
        assert_eq!(state.store.read().await.artists().len(), 4);
    }

    #[tokio::test]
    async fn test_self_delete_then_second_call_is_refused() {
        let state = state();
        let claim = AdminClaim(999);

        delete_user(
            State(state.clone()),
            Extension(claim),
            ApiJson(DeleteUserRequest { delete_id: 999 }),
        )
        .await
        .unwrap();

        let err = delete_artist(
            State(state.clone()),
            Extension(claim),
            ApiJson(DeleteArtistRequest { artist_id: 1 }),
        )
        .await
        .unwrap_err();
        assert_eq!(err, ApiError::AccessDenied);
        assert!(state.store.read().await.find_artist(1).is_some());
    }
}
