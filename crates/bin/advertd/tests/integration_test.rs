//! End-to-end smoke tests for the full advertd stack.
//!
//! Each test spins up the complete application (in-memory `SQLite`, real
//! repository, real service, real axum router) with a recording publisher in
//! place of the MQTT notifier, and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot` — no TCP port is bound and no broker is
//! needed.

use std::future::Future;
use std::sync::{Arc, Mutex};

use advert_adapter_http_axum::router;
use advert_adapter_http_axum::state::AppState;
use advert_adapter_storage_sqlite_sqlx::{Config, SqliteAdvertRepository};
use advert_app::ports::ConfirmationPublisher;
use advert_app::services::advert_service::AdvertService;
use advert_domain::error::AdvertError;
use advert_domain::event::AdvertConfirmed;
use advert_domain::id::AdvertId;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Records every published event instead of talking to a broker.
#[derive(Default)]
struct RecordingPublisher {
    published: Mutex<Vec<AdvertConfirmed>>,
}

impl ConfirmationPublisher for RecordingPublisher {
    fn publish(
        &self,
        event: AdvertConfirmed,
    ) -> impl Future<Output = Result<(), AdvertError>> + Send {
        self.published.lock().unwrap().push(event);
        async { Ok(()) }
    }
}

/// Build a fully-wired router backed by an in-memory `SQLite` database.
async fn app() -> (axum::Router, Arc<RecordingPublisher>) {
    let db = Config {
        database_url: "sqlite::memory:".to_string(),
    }
    .build()
    .await
    .expect("in-memory database should initialise");

    let repo = SqliteAdvertRepository::new(db.pool().clone());
    let publisher = Arc::new(RecordingPublisher::default());

    let state = AppState::new(AdvertService::new(repo, Arc::clone(&publisher)));

    (router::build(state), publisher)
}

fn json_request(method: &str, uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn create_advert(app: &axum::Router, title: &str) -> String {
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/v1/Adverts/Create",
            format!(r#"{{"Title":"{title}"}}"#),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    body["Id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let (app, _) = app().await;

    let resp = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn should_create_advert_and_return_assigned_id() {
    let (app, publisher) = app().await;

    let id = create_advert(&app, "Vintage bicycle").await;

    // The identifier is a storage-assigned UUID, and no event is published
    // on create.
    assert!(id.parse::<AdvertId>().is_ok());
    assert!(publisher.published.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_reject_create_with_empty_title() {
    let (app, publisher) = app().await;

    let resp = app
        .oneshot(json_request(
            "POST",
            "/api/v1/Adverts/Create",
            r#"{"Title":""}"#.to_string(),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(publisher.published.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_confirm_advert_and_publish_event() {
    let (app, publisher) = app().await;
    let id = create_advert(&app, "Kitchen table").await;

    let resp = app
        .oneshot(json_request(
            "PUT",
            "/api/v1/Adverts/Confirm",
            format!(r#"{{"Id":"{id}"}}"#),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    assert!(bytes.is_empty());

    let published = publisher.published.lock().unwrap();
    assert_eq!(published.len(), 1);
    assert_eq!(published[0].id.to_string(), id);
    assert_eq!(published[0].title, "Kitchen table");
}

#[tokio::test]
async fn should_return_not_found_when_confirming_unknown_advert() {
    let (app, publisher) = app().await;

    let resp = app
        .oneshot(json_request(
            "PUT",
            "/api/v1/Adverts/Confirm",
            format!(r#"{{"Id":"{}"}}"#, AdvertId::new()),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(publisher.published.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_reject_confirm_with_malformed_id() {
    let (app, publisher) = app().await;

    let resp = app
        .oneshot(json_request(
            "PUT",
            "/api/v1/Adverts/Confirm",
            r#"{"Id":"not-a-uuid"}"#.to_string(),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(publisher.published.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_publish_one_event_per_confirmation() {
    let (app, publisher) = app().await;
    let first = create_advert(&app, "Sofa").await;
    let second = create_advert(&app, "Armchair").await;

    for id in [&first, &second] {
        let resp = app
            .clone()
            .oneshot(json_request(
                "PUT",
                "/api/v1/Adverts/Confirm",
                format!(r#"{{"Id":"{id}"}}"#),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let published = publisher.published.lock().unwrap();
    assert_eq!(published.len(), 2);
    let titles: Vec<&str> = published.iter().map(|ev| ev.title.as_str()).collect();
    assert_eq!(titles, vec!["Sofa", "Armchair"]);
}
