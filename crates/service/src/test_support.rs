#![cfg(test)]
use chrono::{TimeZone, Utc};
use tokio::sync::OnceCell;
use sea_orm::DatabaseConnection;
use migration::MigratorTrait;
use models::db::{connect_with_config, DatabaseConfig};
use models::ship::{NewShip, ShipType};

// Ensure migrations run only once per shared database
static MIGRATED: OnceCell<()> = OnceCell::const_new();

fn test_config() -> DatabaseConfig {
    let mut cfg = DatabaseConfig::from(&configs::DatabaseConfig::default());
    cfg.url = std::env::var("TEST_DATABASE_URL").unwrap_or_else(|_| "sqlite::memory:".to_string());
    cfg.acquire_timeout = std::time::Duration::from_secs(10);
    cfg
}

/// Connection to a migrated test database. Defaults to a private in-memory
/// SQLite database; `TEST_DATABASE_URL` points the tests at a shared server.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let cfg = test_config();
    if cfg.url.contains(":memory:") {
        let db = connect_with_config(&cfg).await?;
        migration::Migrator::up(&db, None).await?;
        return Ok(db);
    }

    MIGRATED
        .get_or_init(|| async {
            let db = connect_with_config(&cfg).await.expect("connect db for migration");
            migration::Migrator::up(&db, None).await.expect("migrate up");
            drop(db);
        })
        .await;

    let db = connect_with_config(&cfg).await?;
    Ok(db)
}

/// A valid, not yet stored ship.
pub fn sample(name: &str) -> NewShip {
    NewShip {
        name: name.to_string(),
        planet: "Earth".into(),
        ship_type: ShipType::Transport,
        prod_date: Utc.with_ymd_and_hms(2950, 5, 17, 0, 0, 0).unwrap(),
        is_used: false,
        speed: 0.42,
        crew_size: 12,
        rating: 0.48,
    }
}
