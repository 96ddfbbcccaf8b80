use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        calendars::{list_calendar_events, list_calendars},
        events::{create_event, create_test_event, delete_event},
        health::{healthz, livez},
        pages::{add_test_event, index, remove_event},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // CORS configuration for API endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    // API routes with CORS
    let api_routes = Router::new()
        .route("/calendars", get(list_calendars))
        .route(
            "/calendars/{id}/events",
            get(list_calendar_events).post(create_event),
        )
        .route("/calendars/{id}/test-event", post(create_test_event))
        .route("/events/{id}", delete(delete_event))
        .layer(cors);

    // Main application router
    Router::new()
        .route("/", get(index))
        .route("/calendars/{id}/test-event", post(add_test_event))
        .route("/events/{id}/delete", post(remove_event))
        .route("/livez", get(livez))
        .route("/healthz", get(healthz))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use calbrowse_core::calendar::NewCalendar;
    use calbrowse_core::storage::CalendarProvider;

    async fn seeded_state() -> (AppState, i64) {
        let state = AppState::default();
        let calendar_id = state
            .provider
            .insert_calendar(&NewCalendar::new(
                "Personal",
                "alice@example.com",
                "alice@example.com",
            ))
            .await
            .unwrap();
        (state, calendar_id)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_index_page() {
        let (state, _) = seeded_state().await;
        let app = create_app(state);

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let html = String::from_utf8(body.to_vec()).unwrap();

        assert!(html.contains("Personal [alice@example.com]"));
        assert!(html.contains("Add test event"));
    }

    #[tokio::test]
    async fn test_list_calendars_empty() {
        let state = AppState::default();
        let app = create_app(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/calendars")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_list_calendars_returns_records() {
        let (state, calendar_id) = seeded_state().await;
        let app = create_app(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/calendars")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let calendars = body_json(response).await;
        assert_eq!(calendars[0]["id"], calendar_id);
        assert_eq!(calendars[0]["display_name"], "Personal");
        assert_eq!(calendars[0]["owner_account"], "alice@example.com");
    }

    #[tokio::test]
    async fn test_create_test_event_and_list() {
        let (state, calendar_id) = seeded_state().await;
        let app = create_app(state);

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(format!("/api/calendars/{calendar_id}/test-event"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let created = body_json(response).await;
        let event_id = created["id"].as_i64().unwrap();

        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/api/calendars/{calendar_id}/events"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let events = body_json(response).await;
        assert_eq!(events.as_array().unwrap().len(), 1);
        assert_eq!(events[0]["id"], event_id);
        assert_eq!(events[0]["title"], "TestEvent");
        assert_eq!(events[0]["organizer"], "alice@example.com");
        assert_eq!(events[0]["description"], "TestDescription");
    }

    #[tokio::test]
    async fn test_create_event_from_form() {
        let (state, calendar_id) = seeded_state().await;
        let app = create_app(state);

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(format!("/api/calendars/{calendar_id}/events"))
                    .header("Content-Type", "application/x-www-form-urlencoded")
                    .body(Body::from(
                        "title=Standup&description=Daily&organizer=&\
                         start=2026-08-06T09:00:00Z&end=2026-08-06T09:30:00Z",
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert!(body_json(response).await["id"].is_i64());
    }

    #[tokio::test]
    async fn test_create_event_rejects_reversed_range() {
        let (state, calendar_id) = seeded_state().await;
        let app = create_app(state);

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(format!("/api/calendars/{calendar_id}/events"))
                    .header("Content-Type", "application/x-www-form-urlencoded")
                    .body(Body::from(
                        "title=Backwards&start=2026-08-06T10:00:00Z&end=2026-08-06T09:00:00Z",
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_events_for_unknown_calendar() {
        let state = AppState::default();
        let app = create_app(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/calendars/999/events")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_event() {
        let (state, calendar_id) = seeded_state().await;
        let app = create_app(state);

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(format!("/api/calendars/{calendar_id}/test-event"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let event_id = body_json(response).await["id"].as_i64().unwrap();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/api/events/{event_id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "deleted": true })
        );

        // Deleting the same row again reports false rather than erroring
        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/api/events/{event_id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "deleted": false })
        );
    }

    #[tokio::test]
    async fn test_screen_add_and_delete_flow() {
        let (state, calendar_id) = seeded_state().await;
        let app = create_app(state);

        // Add button: redirects back to the page with the new event id
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(format!("/calendars/{calendar_id}/test-event"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let location = response
            .headers()
            .get("location")
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(location.contains(&format!("calendar={calendar_id}")));
        assert!(location.contains("created="));

        // The page shows the notice and the event
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri(location.as_str())
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("Created event for now"));
        assert!(html.contains("TestEvent"));

        // Delete action: redirects back with the outcome
        let event_id = location.split("created=").nth(1).unwrap().to_string();
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(format!("/events/{event_id}/delete"))
                    .header("Content-Type", "application/x-www-form-urlencoded")
                    .body(Body::from(format!("calendar_id={calendar_id}")))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let location = response
            .headers()
            .get("location")
            .unwrap()
            .to_str()
            .unwrap();
        assert!(location.contains("deleted=true"));
    }

    #[tokio::test]
    async fn test_screen_add_for_unknown_calendar() {
        let state = AppState::default();
        let app = create_app(state);

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/calendars/999/test-event")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_livez() {
        let state = AppState::default();
        let app = create_app(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/livez")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_healthz_reports_calendar_count() {
        let (state, _) = seeded_state().await;
        let app = create_app(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/healthz")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "healthy": true, "calendars": 1 })
        );
    }
}
