use bandtrack_client::{Client, ClientError, ReviewDraft};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> Client {
    Client::new(server.uri()).unwrap()
}

#[tokio::test]
async fn login_returns_user_view() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_json(json!({"username": "demo", "password": "password"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Login successful",
            "user": {"id": 1, "username": "demo", "role": "user", "followedArtists": [1]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let user = client_for(&server).await.login("demo", "password").await.unwrap();
    assert_eq!(user.id, 1);
    assert_eq!(user.followed_artists, vec![1]);
}

#[tokio::test]
async fn rejection_carries_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"message": "Invalid username or password"})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .await
        .login("demo", "nope")
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.to_string(), "Invalid username or password");
}

#[tokio::test]
async fn rejection_without_json_uses_status_reason() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/artists"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = client_for(&server).await.artists().await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.to_string(), "Internal Server Error");
}

#[tokio::test]
async fn connection_failure_is_distinct() {
    // Bind then drop a listener so nothing answers on the port.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = Client::new(format!("http://127.0.0.1:{port}")).unwrap();

    let err = client.artists().await.unwrap_err();
    assert!(err.is_connect(), "got {err:?}");
    assert_eq!(err.to_string(), "Error connecting to server");
}

#[tokio::test]
async fn success_with_unexpected_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/artists"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"not": "a list"})))
        .mount(&server)
        .await;

    let err = client_for(&server).await.artists().await.unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)));
}

#[tokio::test]
async fn concerts_filter_sends_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/concerts"))
        .and(query_param("artistId", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 2, "title": "City Lights at LA Arena", "date": "2025-12-15",
            "artistId": 2, "ticketUrl": "https://tickets.example.com/concert/2"
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let concerts = client_for(&server).await.concerts(Some(2)).await.unwrap();
    assert_eq!(concerts.len(), 1);
    assert_eq!(concerts[0].artist_id, 2);
}

#[tokio::test]
async fn follow_and_unfollow_return_follow_set() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users/1/follow/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "User demo now follows Acoustic Souls",
            "followedArtists": [1, 3]
        })))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/users/1/follow/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "User demo unfollowed Acoustic Souls",
            "followedArtists": [1]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    assert_eq!(client.follow(1, 3).await.unwrap(), vec![1, 3]);
    assert_eq!(client.unfollow(1, 3).await.unwrap(), vec![1]);
}

#[tokio::test]
async fn create_review_posts_draft() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/reviews"))
        .and(body_json(json!({"rating": 4, "comment": "Loud", "userId": 1, "artistId": 2})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "message": "Review added",
            "review": {"id": 2, "rating": 4, "comment": "Loud", "userId": 1, "artistId": 2}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let review = client_for(&server)
        .await
        .create_review(&ReviewDraft {
            rating: 4,
            comment: "Loud".into(),
            user_id: 1,
            artist_id: 2,
            concert_id: None,
        })
        .await
        .unwrap();
    assert_eq!(review.id, 2);
}

#[tokio::test]
async fn admin_calls_carry_user_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/admin/artist/add"))
        .and(body_json(json!({"userId": 999, "name": "Midnight Echo"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Artist added",
            "artist": {"id": 5, "name": "Midnight Echo"}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/admin/artist/delete"))
        .and(body_json(json!({"userId": 1, "artistId": 5})))
        .respond_with(
            ResponseTemplate::new(403).set_body_json(json!({"message": "Access denied: admin only"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let artist = client.as_admin(999).add_artist("Midnight Echo").await.unwrap();
    assert_eq!(artist.id, 5);

    let err = client.as_admin(1).delete_artist(5).await.unwrap_err();
    assert_eq!(err.status(), Some(403));
}
