//! Page Server
//!
//! Serves the rendered page over HTTP, built with Axum. Links and form
//! posts on the page map onto planner operations.
//!
//! # Endpoints
//!
//! ## Page
//! - `GET /` - The page
//! - `GET /parties/:id` - Select a party
//! - `POST /parties` - Create a party
//! - `POST /parties/:id/delete` - Remove a party
//! - `POST /error/dismiss` - Hide the error banner
//! - `POST /refresh` - Reload everything from the remote service
//!
//! ## Health
//! - `GET /health/live` - Liveness check
//! - `GET /health/ready` - Readiness check
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use party_planner::config::Config;
//! use party_planner::gateway::HttpGateway;
//! use party_planner::planner::Planner;
//! use party_planner::server::{serve, ServerState};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load_default();
//!     let gateway = Arc::new(HttpGateway::new(&config.gateway)?);
//!     let planner = Arc::new(Planner::new(gateway));
//!     let _ = planner.bootstrap().await;
//!
//!     serve(ServerState::new(planner), &config.server).await?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod routes;
pub mod state;

pub use error::ServerError;
pub use state::ServerState;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Build the router with all routes and middleware
pub fn build_router(state: ServerState) -> Router {
    let page_routes = Router::new()
        .route("/", get(routes::pages::index))
        .route("/parties", post(routes::pages::create_party))
        .route("/parties/:id", get(routes::pages::select_party))
        .route("/parties/:id/delete", post(routes::pages::remove_party))
        .route("/error/dismiss", post(routes::pages::dismiss_error))
        .route("/refresh", post(routes::pages::refresh));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    Router::new()
        .merge(page_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Start the page server and run until Ctrl+C or SIGTERM
pub async fn serve(state: ServerState, config: &ServerConfig) -> Result<(), ServerError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Party Planner listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Party Planner shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::fake::{FakeGateway, Op};
    use crate::gateway::PartyGateway;
    use crate::model::{Guest, Party, Rsvp};
    use crate::planner::Planner;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        response::Response,
    };
    use tower::util::ServiceExt;

    fn party(id: i64, name: &str) -> Party {
        Party {
            id,
            name: name.to_string(),
            description: format!("{} description", name),
            date: "2025-10-19T18:30:00.000Z".to_string(),
            location: "Town hall".to_string(),
        }
    }

    async fn create_test_app() -> (Router, Arc<Planner>, Arc<FakeGateway>) {
        let gateway = Arc::new(
            FakeGateway::new()
                .with_parties(vec![party(1, "Launch"), party(2, "Retro")])
                .with_guests(vec![Guest { id: 10, name: "Ada".to_string() }])
                .with_rsvps(vec![Rsvp { id: 1, guest_id: 10, event_id: 2 }]),
        );
        let planner = Arc::new(Planner::new(Arc::clone(&gateway) as Arc<dyn PartyGateway>));
        planner.bootstrap().await.unwrap();

        let router = build_router(ServerState::new(Arc::clone(&planner)));
        (router, planner, gateway)
    }

    async fn get(app: &Router, uri: &str) -> Response {
        app.clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn post(app: &Router, uri: &str, form: &str) -> Response {
        app.clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(form.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn location(response: &Response) -> &str {
        response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .unwrap()
    }

    #[tokio::test]
    async fn test_index_renders_page() {
        let (app, _, _) = create_test_app().await;

        let response = get(&app, "/").await;
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_text(response).await;
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("href=\"/parties/1#selected\""));
        assert!(html.contains(">Launch</a>"));
        assert!(html.contains("Please select a party to learn more."));
        assert!(html.contains("action=\"/refresh\""));
    }

    #[tokio::test]
    async fn test_select_party_redirects_to_details() {
        let (app, planner, _) = create_test_app().await;

        let response = get(&app, "/parties/2").await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/#selected");

        let state = planner.state().await;
        assert_eq!(state.selected.map(|p| p.id), Some(2));

        let html = body_text(get(&app, "/").await).await;
        assert!(html.contains("Retro #2"));
        assert!(html.contains(">Ada</li>"));
        assert!(html.contains("action=\"/parties/2/delete\""));
    }

    #[tokio::test]
    async fn test_select_unknown_party_shows_banner() {
        let (app, planner, _) = create_test_app().await;

        let response = get(&app, "/parties/99").await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let state = planner.state().await;
        assert!(state.selected.is_none());
        assert!(state.error.unwrap().contains("Event 99 not found"));
    }

    #[tokio::test]
    async fn test_create_party_from_form() {
        let (app, planner, gateway) = create_test_app().await;

        let response = post(
            &app,
            "/parties",
            "name=Summer+Bash&description=Outdoors&date=2025-07-04&time=18%3A30&location=Park",
        )
        .await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/");

        let created = gateway.created();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].name, "Summer Bash");
        assert!(created[0].date.ends_with('Z'));

        let state = planner.state().await;
        assert_eq!(state.parties.len(), 3);
        assert!(state.error.is_none());
    }

    #[tokio::test]
    async fn test_invalid_form_shows_banner() {
        let (app, planner, gateway) = create_test_app().await;

        let response = post(&app, "/parties", "name=&date=2025-07-04&time=18%3A30&location=Park").await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        assert!(gateway.created().is_empty());
        let state = planner.state().await;
        assert!(state.error.unwrap().starts_with("Could not create party"));
    }

    #[tokio::test]
    async fn test_remove_party() {
        let (app, planner, _) = create_test_app().await;
        get(&app, "/parties/1").await;

        let response = post(&app, "/parties/1/delete", "").await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let state = planner.state().await;
        assert!(state.selected.is_none());
        assert_eq!(state.parties.iter().map(|p| p.id).collect::<Vec<_>>(), vec![2]);
    }

    #[tokio::test]
    async fn test_dismiss_error() {
        let (app, planner, _) = create_test_app().await;
        get(&app, "/parties/99").await;
        assert!(planner.state().await.error.is_some());

        post(&app, "/error/dismiss", "").await;
        assert!(planner.state().await.error.is_none());
    }

    #[tokio::test]
    async fn test_refresh_reloads_collections() {
        let (app, _, gateway) = create_test_app().await;

        let response = post(&app, "/refresh", "").await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let loads = gateway
            .calls()
            .into_iter()
            .filter(|op| *op == Op::ListParties)
            .count();
        assert_eq!(loads, 2);
    }

    #[tokio::test]
    async fn test_health_live() {
        let (app, _, _) = create_test_app().await;
        assert_eq!(get(&app, "/health/live").await.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready_before_and_after_load() {
        let planner = Arc::new(Planner::new(Arc::new(FakeGateway::new()) as Arc<dyn PartyGateway>));
        let app = build_router(ServerState::new(Arc::clone(&planner)));

        assert_eq!(get(&app, "/health/ready").await.status(), StatusCode::SERVICE_UNAVAILABLE);

        planner.bootstrap().await.unwrap();
        assert_eq!(get(&app, "/health/ready").await.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_not_ready_when_every_fetch_fails() {
        let gateway = Arc::new(FakeGateway::new().with_parties(vec![party(1, "Launch")]));
        for op in [Op::ListParties, Op::ListRsvps, Op::ListGuests] {
            gateway.fail(op);
        }

        let planner = Arc::new(Planner::new(Arc::clone(&gateway) as Arc<dyn PartyGateway>));
        assert!(planner.bootstrap().await.is_err());

        let app = build_router(ServerState::new(Arc::clone(&planner)));
        assert_eq!(get(&app, "/health/ready").await.status(), StatusCode::SERVICE_UNAVAILABLE);

        gateway.recover(Op::ListParties);
        post(&app, "/refresh", "").await;
        assert_eq!(get(&app, "/health/ready").await.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let (app, _, gateway) = create_test_app().await;

        let response = get(&app, "/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["parties"], 2);
        assert_eq!(body["guests"], 1);

        gateway.fail(Op::ListParties);
        post(&app, "/refresh", "").await;

        let body: serde_json::Value =
            serde_json::from_str(&body_text(get(&app, "/health").await).await).unwrap();
        assert_eq!(body["status"], "degraded");
        assert_eq!(body["parties"], 2);
    }
}
