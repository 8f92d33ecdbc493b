use std::sync::Arc;
use paxlist_core::{ManifestService, PassengerRepository};

#[derive(Clone)]
pub struct AppState {
    pub manifest: ManifestService,
}

impl AppState {
    pub fn new(repo: Arc<dyn PassengerRepository>) -> Self {
        Self {
            manifest: ManifestService::new(repo),
        }
    }
}
