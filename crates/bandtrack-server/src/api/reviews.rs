use axum::{extract::State, http::StatusCode, Json};
use bandtrack_db::entities::review::{Review, MAX_RATING, MIN_RATING};
use bandtrack_db::{Id, NewReview};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::{ApiError, ApiJson, ApiPath};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    pub rating: i64,
    pub comment: String,
    pub user_id: Id,
    pub artist_id: Id,
    #[serde(default)]
    pub concert_id: Option<Id>,
}

impl CreateReviewRequest {
    /// Rating within 1–5 and a non-blank comment.
    pub fn validate(&self) -> Result<(), ApiError> {
        if !(MIN_RATING..=MAX_RATING).contains(&self.rating) {
            return Err(ApiError::validation(format!(
                "Rating must be between {MIN_RATING} and {MAX_RATING}"
            )));
        }
        if self.comment.trim().is_empty() {
            return Err(ApiError::validation("Comment is required"));
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub message: &'static str,
    pub review: Review,
}

/// POST /reviews
pub async fn create_review(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<CreateReviewRequest>,
) -> Result<(StatusCode, Json<ReviewResponse>), ApiError> {
    let mut store = state.store.write().await;
    if store.find_user(body.user_id).is_none() || store.find_artist(body.artist_id).is_none() {
        return Err(ApiError::not_found("User or artist not found"));
    }
    body.validate()?;

    let review = store
        .add_review(NewReview {
            rating: body.rating,
            comment: body.comment,
            user_id: body.user_id,
            artist_id: body.artist_id,
            concert_id: body.concert_id,
        })?
        .clone();

    tracing::info!(
        review_id = review.id,
        user_id = review.user_id,
        artist_id = review.artist_id,
        "review added"
    );

    Ok((
        StatusCode::CREATED,
        Json(ReviewResponse {
            message: "Review added",
            review,
        }),
    ))
}

/// GET /artists/:id/reviews
pub async fn list_artist_reviews(
    State(state): State<Arc<AppState>>,
    ApiPath(artist_id): ApiPath<Id>,
) -> Result<Json<Vec<Review>>, ApiError> {
    let store = state.store.read().await;
    if store.find_artist(artist_id).is_none() {
        return Err(ApiError::not_found("Artist not found"));
    }
    Ok(Json(store.reviews_for_artist(artist_id)))
}
