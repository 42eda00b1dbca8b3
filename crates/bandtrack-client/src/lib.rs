//! Typed HTTP client for the BandTrack API.
//!
//! Transport failures surface as [`ClientError::Connect`]; answers with an
//! error status surface as [`ClientError::Rejected`] carrying the server's
//! `message` verbatim.

mod client;
mod error;

pub use client::{AdminClient, ArtistDetail, Client, ConcertDetail, ReviewDraft};
pub use error::ClientError;
