// crates/wayfare-core/src/lib.rs

pub mod budget;
pub mod common;
pub mod context;
pub mod error;
pub mod itinerary;
pub mod loader; // files, gzip, snapshots, HTTP
pub mod model;
pub mod prelude;
pub mod recent;
pub mod screen; // stateful search controller
pub mod search; // matcher, aggregator, filter, presentation
pub mod text;
pub mod traits;

// Re-exports
pub use crate::error::{Result, WayfareError};
pub use model::{Activity, Catalog, Destination, Hotel, Kind, Listing};
pub use crate::common::CatalogStats;
pub use crate::search::{
    filter_by_kind, project, search, search_filtered, Icon, KindFilter, ResultDetails,
    SearchResult,
};
pub use crate::recent::RecentSearches;
pub use crate::screen::{SearchRequest, SearchResponse, SearchScreen};
pub use crate::traits::PlaceMatch;
