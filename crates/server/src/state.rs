use std::sync::Arc;

use service::ship::{ShipRepository, ShipService};

/// Shared handler state. The storage backend is chosen at startup and hidden
/// behind the repository trait object.
#[derive(Clone)]
pub struct ServerState {
    pub ships: Arc<ShipService<dyn ShipRepository>>,
}

impl ServerState {
    pub fn new(repo: Arc<dyn ShipRepository>) -> Self {
        Self { ships: Arc::new(ShipService::new(repo)) }
    }
}
