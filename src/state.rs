use crate::config::AppConfig;
use crate::github::RepositorySearch;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub github: Option<Arc<dyn RepositorySearch>>,
}

impl AppState {
    pub fn new(config: AppConfig, github: Arc<dyn RepositorySearch>) -> Self {
        Self {
            config: Arc::new(config),
            github: Some(github),
        }
    }

    /// State with no upstream client attached. Every search fails with a 500.
    pub fn without_client(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
            github: None,
        }
    }
}
