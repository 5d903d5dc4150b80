use std::{collections::BTreeMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::errors::ServiceError;
use crate::ship::{NewShip, Ship, ShipRepository};

#[derive(Default)]
struct Inner {
    rows: BTreeMap<i64, Ship>,
    last_id: i64,
}

/// Process-local ship store.
///
/// Ids start at 1 and are never reused, even after deletes. Contents are lost
/// when the process exits.
#[derive(Clone, Default)]
pub struct InMemoryShipRepository {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryShipRepository {
    pub fn new() -> Self { Self::default() }

    pub async fn len(&self) -> usize {
        self.inner.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl ShipRepository for InMemoryShipRepository {
    async fn find_all(&self) -> Result<Vec<Ship>, ServiceError> {
        let inner = self.inner.read().await;
        Ok(inner.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Ship>, ServiceError> {
        let inner = self.inner.read().await;
        Ok(inner.rows.get(&id).cloned())
    }

    async fn insert(&self, ship: NewShip) -> Result<Ship, ServiceError> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let stored = ship.into_model(inner.last_id);
        inner.rows.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, ship: Ship) -> Result<Ship, ServiceError> {
        let mut inner = self.inner.write().await;
        match inner.rows.get_mut(&ship.id) {
            Some(slot) => {
                *slot = ship.clone();
                Ok(ship)
            }
            None => Err(ServiceError::not_found(&format!("ship {}", ship.id))),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        let mut inner = self.inner.write().await;
        Ok(inner.rows.remove(&id).is_some())
    }
}
