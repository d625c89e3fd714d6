use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

use server::routes::{self, ServerState};
use service::store::{MemoryStore, MongoStore, RecordStore};

fn cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

struct TestApp {
    base_url: String,
}

async fn start_server_with(store: Arc<dyn RecordStore>) -> anyhow::Result<TestApp> {
    let state = ServerState { store };
    let app: Router = routes::build_router(state, cors());

    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url })
}

async fn start_server() -> anyhow::Result<TestApp> {
    start_server_with(Arc::new(MemoryStore::new())).await
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

fn booking_payload(email: &str) -> serde_json::Value {
    json!({
        "full_name": "Erika Mustermann",
        "email": email,
        "phone": "+49 170 1234567",
        "service": "Hydrafacial",
        "category": "Gesichtsbehandlung",
        "preferred_date": "2026-09-15",
        "notes": "first visit",
        "agree_policy": true
    })
}

#[tokio::test]
async fn e2e_root_identity_verbatim() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(format!("{}/", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body, json!({ "brand": "Monter Medical Skin Care", "status": "ok" }));
    Ok(())
}

#[tokio::test]
async fn e2e_booking_create_then_list() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c
        .post(format!("{}/api/bookings", app.base_url))
        .json(&booking_payload("erika@example.com"))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let created = res.json::<serde_json::Value>().await?;
    let id = created["id"].as_str().expect("id string").to_string();
    assert!(!id.is_empty());
    assert_eq!(created["message"], "Booking created");

    let res = c.get(format!("{}/api/bookings", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let listed = res.json::<Vec<serde_json::Value>>().await?;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["id"], json!(id));
    assert_eq!(listed[0]["full_name"], "Erika Mustermann");
    assert_eq!(listed[0]["preferred_date"], "2026-09-15");
    assert!(listed[0].get("_id").is_none());
    Ok(())
}

#[tokio::test]
async fn e2e_booking_validation_lists_every_field_and_writes_nothing() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let mut payload = booking_payload("not-an-email");
    payload["full_name"] = json!("E");
    let res = c
        .post(format!("{}/api/bookings", app.base_url))
        .json(&payload)
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::UNPROCESSABLE_ENTITY);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["error"], "validation failed");
    assert!(body["fields"].get("full_name").is_some());
    assert!(body["fields"].get("email").is_some());

    let listed = c
        .get(format!("{}/api/bookings", app.base_url))
        .send()
        .await?
        .json::<Vec<serde_json::Value>>()
        .await?;
    assert!(listed.is_empty());
    Ok(())
}

#[tokio::test]
async fn e2e_booking_missing_agree_policy_is_422() -> anyhow::Result<()> {
    let app = start_server().await?;
    let mut payload = booking_payload("erika@example.com");
    payload.as_object_mut().unwrap().remove("agree_policy");
    let res = client()
        .post(format!("{}/api/bookings", app.base_url))
        .json(&payload)
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::UNPROCESSABLE_ENTITY);
    Ok(())
}

#[tokio::test]
async fn e2e_booking_list_limit_window() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    for _ in 0..3 {
        let email = format!("user_{}@example.com", Uuid::new_v4());
        let res = c
            .post(format!("{}/api/bookings", app.base_url))
            .json(&booking_payload(&email))
            .send()
            .await?;
        assert_eq!(res.status(), HttpStatusCode::CREATED);
    }

    let listed = c
        .get(format!("{}/api/bookings?limit=2", app.base_url))
        .send()
        .await?
        .json::<Vec<serde_json::Value>>()
        .await?;
    assert_eq!(listed.len(), 2);

    let listed = c
        .get(format!("{}/api/bookings", app.base_url))
        .send()
        .await?
        .json::<Vec<serde_json::Value>>()
        .await?;
    assert_eq!(listed.len(), 3);
    Ok(())
}

#[tokio::test]
async fn e2e_contact_message_flow() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c
        .post(format!("{}/api/messages", app.base_url))
        .json(&json!({
            "full_name": "Max Mustermann",
            "email": "max@example.com",
            "subject": "Termin",
            "message": "Ich habe eine Frage zu Ihren Behandlungen."
        }))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["message"], "Message received");
    assert!(!body["id"].as_str().unwrap_or_default().is_empty());

    // Subject below minimum length.
    let res = c
        .post(format!("{}/api/messages", app.base_url))
        .json(&json!({
            "full_name": "Max Mustermann",
            "email": "max@example.com",
            "subject": "ab",
            "message": "Ich habe eine Frage zu Ihren Behandlungen."
        }))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::UNPROCESSABLE_ENTITY);
    Ok(())
}

#[tokio::test]
async fn e2e_newsletter_flow() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c
        .post(format!("{}/api/newsletter", app.base_url))
        .json(&json!({ "email": "a@b.com", "consent": true }))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["message"], "Subscribed");
    assert!(!body["id"].as_str().unwrap_or_default().is_empty());

    let res = c
        .post(format!("{}/api/newsletter", app.base_url))
        .json(&json!({ "email": "not-an-email", "consent": true }))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::UNPROCESSABLE_ENTITY);

    // Presence-only consent: false is still accepted.
    let res = c
        .post(format!("{}/api/newsletter", app.base_url))
        .json(&json!({ "email": "c@d.com", "consent": false }))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    Ok(())
}

#[tokio::test]
async fn e2e_diagnostics_reports_healthy_store() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(format!("{}/test", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["backend"], "running");
    assert_eq!(body["database"], "connected and working");
    assert_eq!(body["connection_status"], "connected");
    assert!(body.get("database_url").is_some());
    assert!(body.get("database_name").is_some());
    Ok(())
}

#[tokio::test]
async fn e2e_degraded_backend_never_breaks_diagnostics() -> anyhow::Result<()> {
    let app = start_server_with(Arc::new(MongoStore::degraded())).await?;
    let c = client();

    let res = c.get(format!("{}/test", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["database"], "available but not initialized");
    assert_eq!(body["connection_status"], "not connected");

    // Writes fail explicitly with the error text, not silently.
    let res = c
        .post(format!("{}/api/bookings", app.base_url))
        .json(&booking_payload("erika@example.com"))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::INTERNAL_SERVER_ERROR);
    let body = res.json::<serde_json::Value>().await?;
    assert!(body["error"].as_str().unwrap_or_default().contains("not initialized"));

    let res = c.get(format!("{}/api/bookings", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::INTERNAL_SERVER_ERROR);
    Ok(())
}
