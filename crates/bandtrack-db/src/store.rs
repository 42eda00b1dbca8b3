//! The four BandTrack collections and the operations that span them.

use crate::entities::{concert, Artist, Concert, Review, User, UserRole};
use crate::error::StoreError;
use crate::table::{Record, Table};
use crate::Id;

/// Input for a review; the id is assigned by the store.
#[derive(Debug, Clone)]
pub struct NewReview {
    pub rating: i64,
    pub comment: String,
    pub user_id: Id,
    pub artist_id: Id,
    pub concert_id: Option<Id>,
}

/// What a cascading delete removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CascadeReport {
    pub removed: bool,
    pub concerts: usize,
    pub reviews: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Store {
    users: Table<User>,
    artists: Table<Artist>,
    concerts: Table<Concert>,
    reviews: Table<Review>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(&self) -> &Table<User> {
        &self.users
    }

    pub fn artists(&self) -> &Table<Artist> {
        &self.artists
    }

    pub fn concerts(&self) -> &Table<Concert> {
        &self.concerts
    }

    pub fn reviews(&self) -> &Table<Review> {
        &self.reviews
    }

    // ─── Lookups ────────────────────────────────────────────────────

    pub fn find_user(&self, id: Id) -> Option<&User> {
        self.users.get(id)
    }

    pub fn find_user_mut(&mut self, id: Id) -> Option<&mut User> {
        self.users.get_mut(id)
    }

    pub fn find_user_by_username(&self, username: &str) -> Option<&User> {
        self.users.find(|u| u.username == username)
    }

    pub fn find_artist(&self, id: Id) -> Option<&Artist> {
        self.artists.get(id)
    }

    pub fn find_concert(&self, id: Id) -> Option<&Concert> {
        self.concerts.get(id)
    }

    pub fn concerts_for_artist(&self, artist_id: Id) -> Vec<Concert> {
        self.concerts.filter(|c| c.artist_id == artist_id)
    }

    pub fn reviews_for_artist(&self, artist_id: Id) -> Vec<Review> {
        self.reviews.filter(|r| r.artist_id == artist_id)
    }

    // ─── Users ──────────────────────────────────────────────────────

    /// Create a `user`-role account. Usernames compare case-sensitively.
    pub fn register_user(&mut self, username: &str, password: &str) -> Result<&User, StoreError> {
        if self.find_user_by_username(username).is_some() {
            return Err(StoreError::DuplicateUsername(username.to_string()));
        }
        Ok(self.users.insert_with(|id| User {
            id,
            username: username.to_string(),
            password: password.to_string(),
            role: UserRole::User,
            followed_artists: Vec::new(),
        }))
    }

    /// Plaintext username + password match.
    pub fn authenticate(&self, username: &str, password: &str) -> Option<&User> {
        self.find_user_by_username(username)
            .filter(|u| u.password == password)
    }

    /// Follow sets and reviews that point at the user are left untouched.
    pub fn remove_user(&mut self, id: Id) -> Option<User> {
        self.users.remove(id)
    }

    // ─── Artists ────────────────────────────────────────────────────

    pub fn add_artist(&mut self, name: &str) -> &Artist {
        self.artists.insert_with(|id| Artist {
            id,
            name: name.to_string(),
        })
    }

    /// Remove an artist with its concerts and reviews. Users keep the id in
    /// their follow sets.
    pub fn remove_artist(&mut self, id: Id) -> CascadeReport {
        let removed = self.artists.remove(id).is_some();
        let concerts = self.concerts.remove_where(|c| c.artist_id == id);
        let reviews = self.reviews.remove_where(|r| r.artist_id == id);
        CascadeReport {
            removed,
            concerts,
            reviews,
        }
    }

    // ─── Concerts ───────────────────────────────────────────────────

    /// `artist_id` is stored as given, without checking that the artist exists.
    pub fn add_concert(
        &mut self,
        title: &str,
        date: &str,
        artist_id: Id,
        ticket_base_url: &str,
    ) -> &Concert {
        self.concerts.insert_with(|id| Concert {
            id,
            title: title.to_string(),
            date: date.to_string(),
            artist_id,
            ticket_url: concert::ticket_url(ticket_base_url, id),
        })
    }

    /// Remove a concert and the reviews tagged with it.
    pub fn remove_concert(&mut self, id: Id) -> CascadeReport {
        let removed = self.concerts.remove(id).is_some();
        let reviews = self.reviews.remove_where(|r| r.concert_id == Some(id));
        CascadeReport {
            removed,
            concerts: usize::from(removed),
            reviews,
        }
    }

    // ─── Reviews ────────────────────────────────────────────────────

    /// Store a review after checking its references. Rating and comment are
    /// stored verbatim; range checks belong to the caller.
    pub fn add_review(&mut self, new: NewReview) -> Result<&Review, StoreError> {
        if !self.users.contains(new.user_id) {
            return Err(StoreError::not_found(User::KIND, new.user_id));
        }
        if !self.artists.contains(new.artist_id) {
            return Err(StoreError::not_found(Artist::KIND, new.artist_id));
        }
        if let Some(concert_id) = new.concert_id {
            let concert = self
                .find_concert(concert_id)
                .ok_or(StoreError::not_found(Concert::KIND, concert_id))?;
            if concert.artist_id != new.artist_id {
                return Err(StoreError::Invalid {
                    field: "concertId",
                    reason: "belongs to a different artist",
                });
            }
        }
        Ok(self.reviews.insert_with(|id| Review {
            id,
            rating: new.rating,
            comment: new.comment,
            user_id: new.user_id,
            artist_id: new.artist_id,
            concert_id: new.concert_id,
        }))
    }

    pub fn remove_review(&mut self, id: Id) -> Option<Review> {
        self.reviews.remove(id)
    }

    // ─── Seeding ────────────────────────────────────────────────────

    pub fn insert_user(&mut self, user: User) {
        self.users.insert(user);
    }

    pub fn insert_artist(&mut self, artist: Artist) {
        self.artists.insert(artist);
    }

    pub fn insert_concert(&mut self, concert: Concert) {
        self.concerts.insert(concert);
    }

    pub fn insert_review(&mut self, review: Review) {
        self.reviews.insert(review);
    }
}
