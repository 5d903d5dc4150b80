//! In-memory search over a full load of the ship table: filter, then sort,
//! then paginate.

use std::cmp::Ordering;

use serde::Deserialize;

use super::{Ship, ShipType};
use crate::pagination::{paginate, PageRequest};

/// Search criteria; every criterion is optional and they combine with AND.
///
/// `after`/`before` are epoch milliseconds and exclusive, the numeric
/// `min_*`/`max_*` bounds are inclusive.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShipFilter {
    pub name: Option<String>,
    pub planet: Option<String>,
    pub ship_type: Option<ShipType>,
    pub after: Option<i64>,
    pub before: Option<i64>,
    pub is_used: Option<bool>,
    pub min_speed: Option<f64>,
    pub max_speed: Option<f64>,
    pub min_crew_size: Option<i32>,
    pub max_crew_size: Option<i32>,
    pub min_rating: Option<f64>,
    pub max_rating: Option<f64>,
}

impl ShipFilter {
    pub fn matches(&self, ship: &Ship) -> bool {
        self.prepare().matches(ship)
    }

    fn prepare(&self) -> PreparedFilter<'_> {
        PreparedFilter {
            name: self.name.as_deref().map(str::to_lowercase),
            planet: self.planet.as_deref().map(str::to_lowercase),
            criteria: self,
        }
    }
}

/// A filter whose text needles are already lower-cased, built once per
/// search rather than once per ship.
struct PreparedFilter<'a> {
    name: Option<String>,
    planet: Option<String>,
    criteria: &'a ShipFilter,
}

impl PreparedFilter<'_> {
    fn matches(&self, ship: &Ship) -> bool {
        let c = self.criteria;
        let prod_millis = ship.prod_date.timestamp_millis();
        contains_ignore_case(&ship.name, self.name.as_deref())
            && contains_ignore_case(&ship.planet, self.planet.as_deref())
            && c.ship_type.map_or(true, |t| ship.ship_type == t)
            && c.after.map_or(true, |after| prod_millis > after)
            && c.before.map_or(true, |before| prod_millis < before)
            && c.is_used.map_or(true, |used| ship.is_used == used)
            && within(ship.speed, c.min_speed, c.max_speed)
            && within(ship.crew_size, c.min_crew_size, c.max_crew_size)
            && within(ship.rating, c.min_rating, c.max_rating)
    }
}

/// `needle` must already be lower-case.
fn contains_ignore_case(value: &str, needle: Option<&str>) -> bool {
    needle.map_or(true, |n| value.to_lowercase().contains(n))
}

fn within<T: PartialOrd>(value: T, min: Option<T>, max: Option<T>) -> bool {
    min.map_or(true, |m| value >= m) && max.map_or(true, |m| value <= m)
}

/// Keep the ships matching `filter`, preserving their order.
pub fn filter(ships: Vec<Ship>, filter: &ShipFilter) -> Vec<Ship> {
    let prepared = filter.prepare();
    ships.into_iter().filter(|s| prepared.matches(s)).collect()
}

/// Ascending sort keys accepted by the list endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShipOrder {
    Id,
    Speed,
    Date,
    Rating,
}

impl ShipOrder {
    pub fn compare(self, a: &Ship, b: &Ship) -> Ordering {
        match self {
            ShipOrder::Id => a.id.cmp(&b.id),
            ShipOrder::Speed => a.speed.total_cmp(&b.speed),
            ShipOrder::Date => a.prod_date.cmp(&b.prod_date),
            ShipOrder::Rating => a.rating.total_cmp(&b.rating),
        }
    }
}

/// Stable ascending sort; without an order the input order is kept.
pub fn sort(mut ships: Vec<Ship>, order: Option<ShipOrder>) -> Vec<Ship> {
    if let Some(order) = order {
        ships.sort_by(|a, b| order.compare(a, b));
    }
    ships
}

/// filter -> sort -> paginate.
pub fn run(ships: Vec<Ship>, criteria: &ShipFilter, order: Option<ShipOrder>, page: PageRequest) -> Vec<Ship> {
    paginate(sort(filter(ships, criteria), order), page)
}

/// Number of matches before pagination.
pub fn count(ships: &[Ship], criteria: &ShipFilter) -> usize {
    let prepared = criteria.prepare();
    ships.iter().filter(|s| prepared.matches(s)).count()
}
