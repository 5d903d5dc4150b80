use std::net::SocketAddr;

use axum::Router;
use configs::{AppConfig, StorageBackend};
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use server::{routes, startup};

fn cors() -> CorsLayer { CorsLayer::very_permissive() }

struct TestApp {
    base_url: String,
}

async fn start_server(cfg: AppConfig) -> anyhow::Result<TestApp> {
    let state = startup::build_state(&cfg).await?;
    let app: Router = routes::build_router(state, cors());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

fn memory_config() -> AppConfig {
    let mut cfg = AppConfig::default();
    cfg.storage.backend = StorageBackend::Memory;
    cfg
}

fn sqlite_config() -> AppConfig {
    let mut cfg = AppConfig::default();
    cfg.database.url = "sqlite::memory:".into();
    cfg
}

async fn ship_lifecycle(app: &TestApp) -> anyhow::Result<()> {
    let client = reqwest::Client::new();

    let res = client.get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let res = client
        .post(format!("{}/ships", app.base_url))
        .json(&json!({
            "name": "Levan",
            "planet": "Earth",
            "shipType": "MILITARY",
            "prodDate": 26192246400000i64,
            "speed": 0.5,
            "crewSize": 100
        }))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let created: Value = res.json().await?;
    assert_eq!(created["rating"], 0.18);
    let id = created["id"].as_i64().expect("id");

    let res = client
        .post(format!("{}/ships/{}", app.base_url, id))
        .json(&json!({"crewSize": 5}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let updated: Value = res.json().await?;
    assert_eq!(updated["crewSize"], 5);
    assert_eq!(updated["rating"], created["rating"]);

    let list: Value = client
        .get(format!("{}/ships?name=LEV", app.base_url))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(list.as_array().map(Vec::len), Some(1));

    let count: Value = client.get(format!("{}/ships/count", app.base_url)).send().await?.json().await?;
    assert_eq!(count, 1);

    let res = client.delete(format!("{}/ships/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let res = client.get(format!("{}/ships/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    let res = client.get(format!("{}/ships/0", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn e2e_memory_backend() -> anyhow::Result<()> {
    let app = start_server(memory_config()).await?;
    ship_lifecycle(&app).await
}

#[tokio::test]
async fn e2e_sqlite_backend() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
    let app = start_server(sqlite_config()).await?;
    ship_lifecycle(&app).await
}
