use std::sync::Arc;

use tracing::info;
use wayfare_core::{loader::sample_catalog, Catalog};

use super::config::Config;

pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub config: Config,
}

impl AppState {
    /// Load the configured catalog. A missing or malformed file serves an
    /// empty catalog.
    pub fn new(config: Config) -> Arc<Self> {
        let catalog = match &config.catalog {
            Some(path) => Catalog::load_or_empty(path),
            None => {
                info!("No catalog configured, serving the bundled sample");
                sample_catalog()
            }
        };

        Self::with_catalog(catalog, config)
    }

    pub fn with_catalog(catalog: Catalog, config: Config) -> Arc<Self> {
        let stats = catalog.stats();
        info!(
            destinations = stats.destinations,
            hotels = stats.hotels,
            activities = stats.activities,
            "Catalog ready"
        );

        Arc::new(Self {
            catalog: Arc::new(catalog),
            config,
        })
    }
}
