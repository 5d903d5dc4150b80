//! Ship repositories that do not need a database.

pub mod memory;

pub use memory::InMemoryShipRepository;
