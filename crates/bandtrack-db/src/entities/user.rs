use serde::{Deserialize, Serialize};

use crate::table::Record;
use crate::Id;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    #[default]
    User,
}

impl UserRole {
    pub fn as_str(&self) -> &str {
        match self {
            UserRole::Admin => "admin",
            UserRole::User => "user",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Id,
    pub username: String,
    /// Stored in plaintext; never leaves the process.
    #[serde(skip_serializing)]
    pub password: String,
    pub role: UserRole,
    pub followed_artists: Vec<Id>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Add `artist_id` to the follow set unless it is already there.
    /// Returns `true` when the set changed.
    pub fn follow(&mut self, artist_id: Id) -> bool {
        if self.followed_artists.contains(&artist_id) {
            return false;
        }
        self.followed_artists.push(artist_id);
        true
    }

    /// Remove `artist_id` from the follow set. Returns `true` when the set changed.
    pub fn unfollow(&mut self, artist_id: Id) -> bool {
        let before = self.followed_artists.len();
        self.followed_artists.retain(|id| *id != artist_id);
        before != self.followed_artists.len()
    }

    pub fn view(&self) -> UserView {
        UserView::from(self)
    }
}

impl Record for User {
    const KIND: &'static str = "user";

    fn id(&self) -> Id {
        self.id
    }
}

/// User payload without credentials.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub id: Id,
    pub username: String,
    pub role: UserRole,
    pub followed_artists: Vec<Id>,
}

impl From<&User> for UserView {
    fn from(u: &User) -> Self {
        Self {
            id: u.id,
            username: u.username.clone(),
            role: u.role,
            followed_artists: u.followed_artists.clone(),
        }
    }
}
