use axum::{
    body::Body,
    extract::Request,
    http::{HeaderValue, Method, header},
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{health, auth, user, club, event, task, finance, analytics, recommendation};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tracing::{info_span, Span, error, info, warn};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    Router::new()
        .route("/health", get(health::health_check))

        // Auth
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/me", get(auth::me))

        // Users
        .route("/api/users/profile", put(user::update_profile))
        .route("/api/users/interests", put(user::update_interests))

        // Clubs
        .route("/api/clubs", get(club::list_clubs).post(club::create_club))
        .route("/api/clubs/{club_id}", get(club::get_club))

        // Events
        .route("/api/events", get(event::list_events).post(event::create_event))
        .route("/api/events/{event_id}", get(event::get_event))
        .route("/api/events/{event_id}/rsvp", post(event::rsvp).delete(event::cancel_rsvp))
        .route("/api/events/{event_id}/checkin", post(event::check_in))

        // Tasks
        .route("/api/tasks", get(task::list_tasks).post(task::create_task))
        .route("/api/tasks/{task_id}", put(task::update_task))

        // Finances
        .route("/api/finances", get(finance::get_ledger).post(finance::create_transaction))

        // Analytics
        .route("/api/analytics/student/{user_id}", get(analytics::student_analytics))
        .route("/api/analytics/club/{club_id}", get(analytics::club_analytics))

        // Recommendations
        .route("/api/recommendations", get(recommendation::get_recommendations))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        user_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .layer(cors)
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        return base.allow_origin(Any);
    }

    let parsed: Vec<HeaderValue> = origins.iter()
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(v) => Some(v),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", o);
                None
            }
        })
        .collect();

    base.allow_origin(parsed)
}
