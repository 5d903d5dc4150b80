//! Field rules for ships.
//!
//! Each `is_*_valid` predicate checks one rule in isolation; `validate_*`
//! helpers turn a failing rule into a [`ServiceError::Validation`] naming the
//! offending field.

use chrono::{DateTime, Datelike, Utc};

use super::rating::{round2, CURRENT_YEAR};
use super::{ShipPatch, ShipType};
use crate::errors::ServiceError;

pub const MAX_TEXT_LEN: usize = 50;
pub const MIN_SPEED: f64 = 0.01;
pub const MAX_SPEED: f64 = 0.99;
pub const MIN_PROD_YEAR: i32 = 2800;
pub const MAX_PROD_YEAR: i32 = CURRENT_YEAR;
pub const MIN_CREW_SIZE: i32 = 1;
pub const MAX_CREW_SIZE: i32 = 9999;

fn is_text_valid(value: &str) -> bool {
    (1..=MAX_TEXT_LEN).contains(&value.chars().count())
}

pub fn is_name_valid(name: &str) -> bool {
    is_text_valid(name)
}

pub fn is_planet_valid(planet: &str) -> bool {
    is_text_valid(planet)
}

/// Speed is judged after rounding to two decimals.
pub fn is_speed_valid(speed: f64) -> bool {
    speed.is_finite() && (MIN_SPEED..=MAX_SPEED).contains(&round2(speed))
}

/// The production year is read in UTC.
pub fn is_prod_date_valid(prod_date: DateTime<Utc>) -> bool {
    (MIN_PROD_YEAR..=MAX_PROD_YEAR).contains(&prod_date.year())
}

pub fn is_crew_size_valid(crew_size: i32) -> bool {
    (MIN_CREW_SIZE..=MAX_CREW_SIZE).contains(&crew_size)
}

/// A ship with every required field present, not yet checked against the
/// field rules.
#[derive(Clone, Debug, PartialEq)]
pub struct ShipDraft {
    pub name: String,
    pub planet: String,
    pub ship_type: ShipType,
    pub prod_date: DateTime<Utc>,
    pub is_used: bool,
    pub speed: f64,
    pub crew_size: i32,
}

impl ShipDraft {
    /// Require every field but `is_used`, which defaults to `false`.
    pub fn from_patch(patch: ShipPatch) -> Result<Self, ServiceError> {
        Ok(Self {
            name: patch.name.ok_or_else(|| ServiceError::missing("name"))?,
            planet: patch.planet.ok_or_else(|| ServiceError::missing("planet"))?,
            ship_type: patch.ship_type.ok_or_else(|| ServiceError::missing("shipType"))?,
            prod_date: patch.prod_date.ok_or_else(|| ServiceError::missing("prodDate"))?,
            speed: patch.speed.ok_or_else(|| ServiceError::missing("speed"))?,
            crew_size: patch.crew_size.ok_or_else(|| ServiceError::missing("crewSize"))?,
            is_used: patch.is_used.unwrap_or(false),
        })
    }
}

pub fn is_ship_valid(draft: &ShipDraft) -> bool {
    validate_draft(draft).is_ok()
}

pub fn validate_draft(draft: &ShipDraft) -> Result<(), ServiceError> {
    check("name", is_name_valid(&draft.name))?;
    check("planet", is_planet_valid(&draft.planet))?;
    check("speed", is_speed_valid(draft.speed))?;
    check("prodDate", is_prod_date_valid(draft.prod_date))?;
    check("crewSize", is_crew_size_valid(draft.crew_size))
}

/// Check every field present in `patch`; absent fields are not judged.
pub fn validate_patch(patch: &ShipPatch) -> Result<(), ServiceError> {
    if let Some(name) = &patch.name { check("name", is_name_valid(name))?; }
    if let Some(planet) = &patch.planet { check("planet", is_planet_valid(planet))?; }
    if let Some(prod_date) = patch.prod_date { check("prodDate", is_prod_date_valid(prod_date))?; }
    if let Some(speed) = patch.speed { check("speed", is_speed_valid(speed))?; }
    if let Some(crew_size) = patch.crew_size { check("crewSize", is_crew_size_valid(crew_size))?; }
    Ok(())
}

fn check(field: &str, ok: bool) -> Result<(), ServiceError> {
    if ok { Ok(()) } else { Err(ServiceError::invalid(field)) }
}
