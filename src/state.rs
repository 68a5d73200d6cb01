//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::DashboardService;
use crate::domain::repositories::VoterRepository;

#[derive(Clone)]
pub struct AppState {
    pub dashboard_service: Arc<DashboardService<dyn VoterRepository>>,
}

impl AppState {
    pub fn new(repository: Arc<dyn VoterRepository>) -> Self {
        Self {
            dashboard_service: Arc::new(DashboardService::new(repository)),
        }
    }
}
