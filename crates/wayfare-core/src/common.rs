// crates/wayfare-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for a catalog.
///
/// Returned by [`Catalog::stats`](crate::Catalog::stats); the counts reflect
/// whatever the loader produced, including collections that degraded to empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub destinations: usize,
    pub hotels: usize,
    pub activities: usize,
}

impl CatalogStats {
    pub fn total(&self) -> usize {
        self.destinations + self.hotels + self.activities
    }
}
