use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use crate::errors::ServiceError;
use models::ship::{self, Entity as ShipEntity};

/// Persistence operations the ship service relies on.
#[async_trait]
pub trait ShipRepository: Send + Sync {
    /// Every stored ship, ordered by id.
    async fn find_all(&self) -> Result<Vec<ship::Model>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<ship::Model>, ServiceError>;
    /// Store a new ship and return it with its assigned id.
    async fn insert(&self, ship: ship::NewShip) -> Result<ship::Model, ServiceError>;
    /// Overwrite all non-key columns of an existing ship.
    async fn update(&self, ship: ship::Model) -> Result<ship::Model, ServiceError>;
    /// Returns true if a row was removed.
    async fn delete(&self, id: i64) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmShipRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmShipRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl ShipRepository for SeaOrmShipRepository {
    async fn find_all(&self) -> Result<Vec<ship::Model>, ServiceError> {
        let rows = ShipEntity::find().order_by_asc(ship::Column::Id).all(&self.db).await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ship::Model>, ServiceError> {
        Ok(ShipEntity::find_by_id(id).one(&self.db).await?)
    }

    async fn insert(&self, ship: ship::NewShip) -> Result<ship::Model, ServiceError> {
        Ok(ship::insert(&self.db, ship).await?)
    }

    async fn update(&self, ship: ship::Model) -> Result<ship::Model, ServiceError> {
        Ok(ship::overwrite(&self.db, ship).await?)
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        let res = ShipEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{get_db, sample};

    #[tokio::test]
    async fn seaorm_repository_crud() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let repo = SeaOrmShipRepository::new(get_db().await?);

        let a = repo.insert(sample("Alpha")).await?;
        let b = repo.insert(sample("Beta")).await?;
        assert_ne!(a.id, b.id);

        let found = repo.find_by_id(a.id).await?.unwrap();
        assert_eq!(found, a);

        let mut changed = b.clone();
        changed.crew_size = 77;
        let updated = repo.update(changed).await?;
        assert_eq!(updated.crew_size, 77);

        let all = repo.find_all().await?;
        let ids: Vec<i64> = all.iter().map(|s| s.id).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
        assert!(ids.contains(&a.id) && ids.contains(&b.id));

        assert!(repo.delete(a.id).await?);
        assert!(!repo.delete(a.id).await?);
        assert!(repo.find_by_id(a.id).await?.is_none());

        let err = repo.update(a).await.unwrap_err();
        assert!(err.is_not_found());

        repo.delete(b.id).await?;
        Ok(())
    }
}
