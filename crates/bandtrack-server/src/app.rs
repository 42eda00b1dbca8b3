use axum::{
    http::{HeaderValue, Method},
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::config::Config;
use crate::state::AppState;
use crate::{api, auth};

/// Every BandTrack route, with request tracing and security headers.
pub fn router(state: Arc<AppState>) -> Router {
    // Account routes
    let auth_routes = Router::new()
        .route("/register", post(auth::routes::register))
        .route("/login", post(auth::routes::login));

    // Public catalogue and per-user routes
    let public_api = Router::new()
        .route("/artists", get(api::artists::list_artists))
        .route("/artists/{id}", get(api::artists::get_artist))
        .route(
            "/artists/{id}/reviews",
            get(api::reviews::list_artist_reviews),
        )
        .route(
            "/users/{user_id}/follow/{artist_id}",
            post(api::follows::follow_artist).delete(api::follows::unfollow_artist),
        )
        .route("/concerts", get(api::concerts::list_concerts))
        .route("/concerts/{id}", get(api::concerts::get_concert))
        .route(
            "/concerts/{id}/purchase",
            post(api::concerts::purchase_ticket),
        )
        .route("/concerts/{id}/share", get(api::concerts::share_concert))
        .route("/reviews", post(api::reviews::create_review));

    let admin_api = Router::new()
        .route("/users", post(api::admin::list_users))
        .route("/user/delete", post(api::admin::delete_user))
        .route("/artist/add", post(api::admin::add_artist))
        .route("/artist/delete", post(api::admin::delete_artist))
        .route("/concert/add", post(api::admin::add_concert))
        .route("/concert/delete", post(api::admin::delete_concert))
        .route("/review/delete", post(api::admin::delete_review))
        .route("/all-reviews", post(api::admin::list_all_reviews))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            auth::middleware::require_admin,
        ));

    Router::new()
        .route("/", get(api::index))
        .route("/healthz", get(api::healthz))
        .merge(auth_routes)
        .merge(public_api)
        .nest("/admin", admin_api)
        .layer(TraceLayer::new_for_http())
        // Security headers
        .layer(SetResponseHeaderLayer::overriding(
            axum::http::header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            axum::http::header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            axum::http::header::HeaderName::from_static("referrer-policy"),
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
        .with_state(state)
}

/// CORS for the browser front end. Without `CORS_ORIGINS` any origin is allowed.
pub fn cors_layer(config: &Config) -> CorsLayer {
    let methods = [
        Method::GET,
        Method::POST,
        Method::DELETE,
        Method::OPTIONS,
    ];

    if config.cors_origins.is_empty() {
        tracing::warn!("CORS_ORIGINS not set, allowing any origin");
        return CorsLayer::new()
            .allow_origin(tower_http::cors::Any)
            .allow_methods(methods)
            .allow_headers(tower_http::cors::Any);
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|s| HeaderValue::from_str(s).ok())
        .collect();
    tracing::info!("CORS allowed origins: {:?}", origins);
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(methods)
        .allow_headers(tower_http::cors::Any)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{self, Body},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    fn app() -> Router {
        router(Arc::new(AppState::from_config(&Config::default())))
    }

    #[tokio::test]
    async fn test_index() {
        let resp = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let bytes = body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"BandTrack backend is running!");
    }

    #[tokio::test]
    async fn test_healthz_and_security_headers() {
        let resp = app()
            .oneshot(
                Request::builder()
                    .uri("/healthz")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()["x-content-type-options"], "nosniff");
        assert_eq!(resp.headers()["x-frame-options"], "DENY");
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let resp = app()
            .oneshot(
                Request::builder()
                    .uri("/nope")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_cors_preflight_any_origin() {
        let app = app().layer(cors_layer(&Config::default()));
        let resp = app
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/login")
                    .header("origin", "http://localhost:5500")
                    .header("access-control-request-method", "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.headers()["access-control-allow-origin"], "*");
    }
}
