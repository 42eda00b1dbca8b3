//! Demo data loaded at startup when seeding is enabled.

use crate::entities::{concert, Artist, Concert, Review, User, UserRole};
use crate::store::Store;

const DEMO_ARTISTS: &[(u64, &str)] = &[
    (1, "The Weekend Vibes"),
    (2, "City Lights Band"),
    (3, "Acoustic Souls"),
    (4, "Neon Skyline"),
];

const DEMO_CONCERTS: &[(u64, &str, &str, u64)] = &[
    (1, "Weekend Vibes Live in NYC", "2025-12-01", 1),
    (2, "City Lights at LA Arena", "2025-12-15", 2),
    (3, "Acoustic Night with Acoustic Souls", "2025-11-30", 3),
    (4, "Neon Skyline World Tour", "2026-01-10", 4),
];

/// Populate `store` with the demo users, artists, concerts and review.
pub fn load_demo(store: &mut Store, ticket_base_url: &str) {
    store.insert_user(User {
        id: 1,
        username: "demo".into(),
        password: "password".into(),
        role: UserRole::User,
        followed_artists: vec![1],
    });
    store.insert_user(User {
        id: 999,
        username: "admin".into(),
        password: "admin123".into(),
        role: UserRole::Admin,
        followed_artists: vec![],
    });

    for &(id, name) in DEMO_ARTISTS {
        store.insert_artist(Artist {
            id,
            name: name.into(),
        });
    }

    for &(id, title, date, artist_id) in DEMO_CONCERTS {
        store.insert_concert(Concert {
            id,
            title: title.into(),
            date: date.into(),
            artist_id,
            ticket_url: concert::ticket_url(ticket_base_url, id),
        });
    }

    store.insert_review(Review {
        id: 1,
        rating: 5,
        comment: "Amazing performance!".into(),
        user_id: 1,
        artist_id: 1,
        concert_id: None,
    });

    tracing::info!(
        users = store.users().len(),
        artists = store.artists().len(),
        concerts = store.concerts().len(),
        reviews = store.reviews().len(),
        "demo data loaded"
    );
}
