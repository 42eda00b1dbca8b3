//! In-memory record store for BandTrack: users, artists, concerts and reviews.

pub mod entities;
pub mod error;
pub mod seed;
pub mod store;
pub mod table;

pub use error::StoreError;
pub use store::{CascadeReport, NewReview, Store};

/// Identifier type shared by every collection.
pub type Id = u64;
