use std::sync::Arc;
use tracing::{debug, info, instrument};

use super::query::{self, ShipFilter, ShipOrder};
use super::rating::{compute_rating, round2};
use super::repository::ShipRepository;
use super::validation::{validate_draft, validate_patch, ShipDraft};
use super::{NewShip, Ship, ShipPatch};
use crate::errors::ServiceError;
use crate::pagination::PageRequest;

/// Application service encapsulating the ship catalog rules.
/// Validation and rating happen here; the repository only stores rows.
pub struct ShipService<R: ShipRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: ShipRepository + ?Sized> ShipService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Validate a complete ship, compute its rating and store it.
    #[instrument(skip(self, patch))]
    pub async fn create(&self, patch: ShipPatch) -> Result<Ship, ServiceError> {
        let draft = ShipDraft::from_patch(patch)?;
        validate_draft(&draft)?;

        let speed = round2(draft.speed);
        let new = NewShip {
            rating: compute_rating(speed, draft.is_used, draft.prod_date),
            name: draft.name,
            planet: draft.planet,
            ship_type: draft.ship_type,
            prod_date: draft.prod_date,
            is_used: draft.is_used,
            speed,
            crew_size: draft.crew_size,
        };
        let ship = self.repo.insert(new).await?;
        info!(ship_id = ship.id, rating = ship.rating, "ship_created");
        Ok(ship)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> Result<Ship, ServiceError> {
        check_id(id)?;
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(&format!("ship {}", id)))
    }

    /// Apply the fields present in `patch`. Nothing is written unless every
    /// present field passes its rule.
    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: i64, patch: ShipPatch) -> Result<Ship, ServiceError> {
        let mut ship = self.get(id).await?;
        validate_patch(&patch)?;

        let recompute = patch.touches_rating();
        let ShipPatch { name, planet, ship_type, prod_date, is_used, speed, crew_size } = patch;
        if let Some(name) = name { ship.name = name; }
        if let Some(planet) = planet { ship.planet = planet; }
        if let Some(ship_type) = ship_type { ship.ship_type = ship_type; }
        if let Some(prod_date) = prod_date { ship.prod_date = prod_date; }
        if let Some(is_used) = is_used { ship.is_used = is_used; }
        if let Some(speed) = speed { ship.speed = round2(speed); }
        if let Some(crew_size) = crew_size { ship.crew_size = crew_size; }
        if recompute {
            ship.rating = compute_rating(ship.speed, ship.is_used, ship.prod_date);
        }

        let ship = self.repo.update(ship).await?;
        info!(ship_id = ship.id, rating_recomputed = recompute, "ship_updated");
        Ok(ship)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        check_id(id)?;
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found(&format!("ship {}", id)));
        }
        info!(ship_id = id, "ship_deleted");
        Ok(())
    }

    /// Filter, sort and page over every stored ship.
    #[instrument(skip(self, filter))]
    pub async fn list(
        &self,
        filter: &ShipFilter,
        order: Option<ShipOrder>,
        page: PageRequest,
    ) -> Result<Vec<Ship>, ServiceError> {
        let all = self.repo.find_all().await?;
        let total = all.len();
        let ships = query::run(all, filter, order, page);
        debug!(total, returned = ships.len(), "ships_listed");
        Ok(ships)
    }

    #[instrument(skip(self, filter))]
    pub async fn count(&self, filter: &ShipFilter) -> Result<usize, ServiceError> {
        let all = self.repo.find_all().await?;
        Ok(query::count(&all, filter))
    }
}

fn check_id(id: i64) -> Result<(), ServiceError> {
    if id <= 0 { Err(ServiceError::BadIdentifier(id)) } else { Ok(()) }
}
