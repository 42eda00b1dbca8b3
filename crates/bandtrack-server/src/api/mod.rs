pub mod admin;
pub mod artists;
pub mod concerts;
pub mod follows;
pub mod reviews;

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct ApiStatus {
    pub status: &'static str,
    pub version: &'static str,
}

/// GET /
pub async fn index() -> &'static str {
    "BandTrack backend is running!"
}

/// GET /healthz
pub async fn healthz() -> Json<ApiStatus> {
    Json(ApiStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
