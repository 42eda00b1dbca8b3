//! BandTrack HTTP API: accounts, artists, concerts, follows, reviews and the
//! admin console, served from an in-memory store.

pub mod api;
pub mod app;
pub mod auth;
pub mod config;
pub mod error;
pub mod state;

pub use app::router;
pub use config::Config;
pub use error::ApiError;
pub use state::AppState;
