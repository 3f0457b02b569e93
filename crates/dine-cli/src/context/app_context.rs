use std::sync::Arc;

use anyhow::Context;
use dine_app::{RestaurantsUsecases, SearchUsecases, VisitsUsecases};
use dine_config::DineConfig;
use dine_db::DineService;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub restaurants: RestaurantsUsecases,
    pub visits: VisitsUsecases,
    pub search: SearchUsecases,
    pub config: DineConfig,
}

impl AppContext {
    /// Open the snapshot store and wire the usecases around one service.
    ///
    /// `store_override` replaces `store.path` from the config.
    pub fn init(mut config: DineConfig, store_override: Option<&str>) -> anyhow::Result<Self> {
        if let Some(path) = store_override {
            config.store.path = path.to_string();
        }

        let service = if config.store.is_in_memory() {
            tracing::debug!("using in-memory store");
            DineService::in_memory()
        } else {
            let cwd = std::env::current_dir().context("failed to read current directory")?;
            let path = config.store.resolve(&cwd);
            tracing::debug!(path = %path.display(), "using snapshot file");
            DineService::open_file(path)
        };

        Ok(Self::from_service(service, config))
    }

    fn from_service(service: DineService, config: DineConfig) -> Self {
        let service = Arc::new(service);
        let thresholds = config.rating.thresholds();
        Self {
            restaurants: RestaurantsUsecases::new(Arc::clone(&service), thresholds),
            visits: VisitsUsecases::new(Arc::clone(&service)),
            search: SearchUsecases::new(service, thresholds),
            config,
        }
    }
}
