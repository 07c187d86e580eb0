// crates/wayfare-core/src/prelude.rs

//! `use wayfare_core::prelude::*;` for demos and binaries.

pub use crate::budget::{Expense, ExpenseCategory, TripBudget};
pub use crate::context::{TravelContext, TravelInfo, TravelInfoPatch, TravelPreferences, View};
pub use crate::error::{Result, WayfareError};
pub use crate::itinerary::{DayPlan, Itinerary, ItineraryItem};
pub use crate::loader::{sample_catalog, shared_sample};
pub use crate::model::{Activity, Catalog, Destination, Hotel, Kind, Listing};
pub use crate::recent::RecentSearches;
pub use crate::screen::SearchScreen;
pub use crate::search::{search, search_filtered, Icon, KindFilter, SearchResult};
pub use crate::traits::PlaceMatch;
