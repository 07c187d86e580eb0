// crates/wayfare-core/src/model/mod.rs
pub mod catalog;
pub mod record;

pub use catalog::Catalog;
pub use record::{Activity, Destination, Hotel, Kind, Listing};
