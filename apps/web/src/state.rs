use std::sync::Arc;

use crate::api_client::AssistantApi;
use crate::config::Config;
use crate::dashboard::controller::DashboardController;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn AssistantApi>,
    /// Single dashboard controller; holds the drag slot and the last rendered view.
    pub dashboard: Arc<DashboardController>,
    pub config: Config,
}

impl AppState {
    pub fn new(api: Arc<dyn AssistantApi>, config: Config) -> Self {
        Self {
            dashboard: Arc::new(DashboardController::new(api.clone())),
            api,
            config,
        }
    }
}
