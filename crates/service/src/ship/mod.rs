//! Ship catalog: validation, rating, querying and the record service.

pub mod query;
pub mod rating;
pub mod repository;
pub mod service;
pub mod validation;

use chrono::{DateTime, Utc};
use serde::Deserialize;

pub use models::ship::{Model as Ship, NewShip, ShipType};
pub use query::{ShipFilter, ShipOrder};
pub use repository::{SeaOrmShipRepository, ShipRepository};
pub use service::ShipService;

/// Client-supplied ship fields. Every field is optional: create requires all
/// but `is_used`, update applies only the ones present. `id` and `rating` are
/// not accepted from clients and are ignored if sent.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipPatch {
    pub name: Option<String>,
    pub planet: Option<String>,
    pub ship_type: Option<ShipType>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub prod_date: Option<DateTime<Utc>>,
    pub is_used: Option<bool>,
    pub speed: Option<f64>,
    pub crew_size: Option<i32>,
}

impl ShipPatch {
    /// Whether applying this patch requires the rating to be recomputed.
    pub fn touches_rating(&self) -> bool {
        self.prod_date.is_some() || self.is_used.is_some() || self.speed.is_some()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
