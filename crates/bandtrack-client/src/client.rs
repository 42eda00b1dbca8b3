use std::time::Duration;

use bandtrack_db::entities::{Artist, Concert, Review, UserView};
use bandtrack_db::Id;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::ClientError;

const USER_AGENT: &str = concat!("bandtrack-client/", env!("CARGO_PKG_VERSION"));

// ── Response shapes ─────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ArtistDetail {
    pub artist: Artist,
    pub reviews: Vec<Review>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConcertDetail {
    #[serde(flatten)]
    pub concert: Concert,
    pub artist_name: Option<String>,
}

/// A review to submit; `user_id` is the caller's own id.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDraft {
    pub rating: i64,
    pub comment: String,
    pub user_id: Id,
    pub artist_id: Id,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concert_id: Option<Id>,
}

#[derive(Deserialize)]
struct UserEnvelope {
    user: UserView,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct FollowEnvelope {
    followed_artists: Vec<Id>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TicketEnvelope {
    ticket_url: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ShareEnvelope {
    share_link: String,
}

#[derive(Deserialize)]
struct ReviewEnvelope {
    review: Review,
}

#[derive(Deserialize)]
struct ArtistEnvelope {
    artist: Artist,
}

#[derive(Deserialize)]
struct ConcertEnvelope {
    concert: Concert,
}

#[derive(Deserialize)]
struct UsersEnvelope {
    users: Vec<UserView>,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// BandTrack API client.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(ClientError::Build)?;
        Ok(Self::with_http_client(http, base_url))
    }

    pub fn with_http_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, format!("{}{path}", self.base_url))
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ClientError> {
        let resp = builder.send().await.map_err(|e| {
            tracing::debug!("request failed before a response: {e}");
            ClientError::Connect(e)
        })?;
        decode(resp).await
    }

    // ── Accounts ────────────────────────────────────────────────

    pub async fn login(&self, username: &str, password: &str) -> Result<UserView, ClientError> {
        let body = json!({ "username": username, "password": password });
        let env: UserEnvelope = self
            .send(self.request(Method::POST, "/login").json(&body))
            .await?;
        Ok(env.user)
    }

    pub async fn register(&self, username: &str, password: &str) -> Result<UserView, ClientError> {
        let body = json!({ "username": username, "password": password });
        let env: UserEnvelope = self
            .send(self.request(Method::POST, "/register").json(&body))
            .await?;
        Ok(env.user)
    }

    // ── Catalogue ───────────────────────────────────────────────

    pub async fn artists(&self) -> Result<Vec<Artist>, ClientError> {
        self.send(self.request(Method::GET, "/artists")).await
    }

    pub async fn artist(&self, id: Id) -> Result<ArtistDetail, ClientError> {
        self.send(self.request(Method::GET, &format!("/artists/{id}")))
            .await
    }

    pub async fn concerts(&self, artist_id: Option<Id>) -> Result<Vec<Concert>, ClientError> {
        let mut builder = self.request(Method::GET, "/concerts");
        if let Some(artist_id) = artist_id {
            builder = builder.query(&[("artistId", artist_id)]);
        }
        self.send(builder).await
    }

    pub async fn concert(&self, id: Id) -> Result<ConcertDetail, ClientError> {
        self.send(self.request(Method::GET, &format!("/concerts/{id}")))
            .await
    }

    /// Ticket link for a concert.
    pub async fn purchase_link(&self, concert_id: Id) -> Result<String, ClientError> {
        let env: TicketEnvelope = self
            .send(self.request(Method::POST, &format!("/concerts/{concert_id}/purchase")))
            .await?;
        Ok(env.ticket_url)
    }

    pub async fn share_link(&self, concert_id: Id) -> Result<String, ClientError> {
        let env: ShareEnvelope = self
            .send(self.request(Method::GET, &format!("/concerts/{concert_id}/share")))
            .await?;
        Ok(env.share_link)
    }

    // ── Follows & reviews ───────────────────────────────────────

    /// Returns the user's follow set after the change.
    pub async fn follow(&self, user_id: Id, artist_id: Id) -> Result<Vec<Id>, ClientError> {
        let path = format!("/users/{user_id}/follow/{artist_id}");
        let env: FollowEnvelope = self.send(self.request(Method::POST, &path)).await?;
        Ok(env.followed_artists)
    }

    /// Returns the user's follow set after the change.
    pub async fn unfollow(&self, user_id: Id, artist_id: Id) -> Result<Vec<Id>, ClientError> {
        let path = format!("/users/{user_id}/follow/{artist_id}");
        let env: FollowEnvelope = self.send(self.request(Method::DELETE, &path)).await?;
        Ok(env.followed_artists)
    }

    pub async fn create_review(&self, draft: &ReviewDraft) -> Result<Review, ClientError> {
        let env: ReviewEnvelope = self
            .send(self.request(Method::POST, "/reviews").json(draft))
            .await?;
        Ok(env.review)
    }

    pub async fn artist_reviews(&self, artist_id: Id) -> Result<Vec<Review>, ClientError> {
        self.send(self.request(Method::GET, &format!("/artists/{artist_id}/reviews")))
            .await
    }

    /// Admin calls made on behalf of `admin_id`.
    pub fn as_admin(&self, admin_id: Id) -> AdminClient<'_> {
        AdminClient {
            client: self,
            admin_id,
        }
    }
}

/// Admin endpoints; every call carries the admin's `userId`.
#[derive(Debug, Clone, Copy)]
pub struct AdminClient<'a> {
    client: &'a Client,
    admin_id: Id,
}

impl AdminClient<'_> {
    async fn call<T: DeserializeOwned>(
        &self,
        path: &str,
        mut body: serde_json::Value,
    ) -> Result<T, ClientError> {
        body["userId"] = json!(self.admin_id);
        self.client
            .send(self.client.request(Method::POST, path).json(&body))
            .await
    }

    pub async fn users(&self) -> Result<Vec<UserView>, ClientError> {
        self.call("/admin/users", json!({})).await
    }

    /// Returns the remaining users.
    pub async fn delete_user(&self, user_id: Id) -> Result<Vec<UserView>, ClientError> {
        let env: UsersEnvelope = self
            .call("/admin/user/delete", json!({ "deleteId": user_id }))
            .await?;
        Ok(env.users)
    }

    pub async fn add_artist(&self, name: &str) -> Result<Artist, ClientError> {
        let env: ArtistEnvelope = self
            .call("/admin/artist/add", json!({ "name": name }))
            .await?;
        Ok(env.artist)
    }

    pub async fn delete_artist(&self, artist_id: Id) -> Result<(), ClientError> {
        self.call::<serde_json::Value>("/admin/artist/delete", json!({ "artistId": artist_id }))
            .await
            .map(drop)
    }

    pub async fn add_concert(
        &self,
        title: &str,
        date: &str,
        artist_id: Id,
    ) -> Result<Concert, ClientError> {
        let env: ConcertEnvelope = self
            .call(
                "/admin/concert/add",
                json!({ "title": title, "date": date, "artistId": artist_id }),
            )
            .await?;
        Ok(env.concert)
    }

    pub async fn delete_concert(&self, concert_id: Id) -> Result<(), ClientError> {
        self.call::<serde_json::Value>("/admin/concert/delete", json!({ "concertId": concert_id }))
            .await
            .map(drop)
    }

    pub async fn delete_review(&self, review_id: Id) -> Result<(), ClientError> {
        self.call::<serde_json::Value>("/admin/review/delete", json!({ "reviewId": review_id }))
            .await
            .map(drop)
    }

    pub async fn all_reviews(&self) -> Result<Vec<Review>, ClientError> {
        self.call("/admin/all-reviews", json!({})).await
    }
}

/// Turn a response into `T`, or into a rejection carrying the server message.
async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return resp.json::<T>().await.map_err(ClientError::Decode);
    }

    let fallback = status.canonical_reason().unwrap_or("Request failed").to_string();
    let message = match resp.json::<ErrorBody>().await {
        Ok(body) => body.message,
        Err(_) => fallback,
    };
    Err(ClientError::Rejected {
        status: status.as_u16(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = Client::new("http://localhost:3000/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:3000");
    }

    #[test]
    fn test_review_draft_serialization() {
        let draft = ReviewDraft {
            rating: 5,
            comment: "Great".into(),
            user_id: 1,
            artist_id: 2,
            concert_id: None,
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["userId"], 1);
        assert_eq!(json["artistId"], 2);
        assert!(json.get("concertId").is_none());
    }

    #[test]
    fn test_concert_detail_deserializes_flattened() {
        let json = r#"{"id":1,"title":"Live","date":"2025-12-01","artistId":1,
            "ticketUrl":"https://tickets.example.com/concert/1","artistName":null}"#;
        let detail: ConcertDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.concert.id, 1);
        assert!(detail.artist_name.is_none());
    }
}
