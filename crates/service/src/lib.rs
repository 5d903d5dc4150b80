//! Service layer for the ship catalog.
//! - Keeps the field rules, rating and search logic out of the HTTP layer.
//! - Talks to storage only through [`ship::ShipRepository`].
//! - Reports failures as [`errors::ServiceError`].

pub mod errors;
pub mod pagination;
pub mod ship;
pub mod storage;
#[cfg(test)]
pub mod test_support;
