use chrono::{DateTime, Datelike, Utc};

/// The catalog's notion of "now" when ageing ships.
pub const CURRENT_YEAR: i32 = 3019;

const RATING_SCALE: f64 = 80.0;
const USED_FACTOR: f64 = 0.5;
const NEW_FACTOR: f64 = 1.0;

/// Round to two decimals, halves away from zero for the non-negative values
/// the catalog deals in (`0.125 -> 0.13`).
pub fn round2(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}

/// `round2(80 * speed * k / (CURRENT_YEAR - year + 1))` with `k` 0.5 for used
/// ships and 1.0 otherwise.
///
/// Callers validate `prod_date` first; a year after `CURRENT_YEAR` would make
/// the divisor non-positive.
pub fn compute_rating(speed: f64, is_used: bool, prod_date: DateTime<Utc>) -> f64 {
    let k = if is_used { USED_FACTOR } else { NEW_FACTOR };
    let age = f64::from(CURRENT_YEAR - prod_date.year() + 1);
    round2(RATING_SCALE * speed * k / age)
}
