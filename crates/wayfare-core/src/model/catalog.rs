// crates/wayfare-core/src/model/catalog.rs
use super::record::{Activity, Destination, Hotel, Kind, Listing};
use crate::common::CatalogStats;
use serde::{Deserialize, Serialize};

/// The three read-only collections the search screen works over.
///
/// Loaded once (see [`crate::loader`]) and never mutated afterwards; share it
/// behind an `Arc` when several owners need it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub destinations: Vec<Destination>,
    #[serde(default)]
    pub hotels: Vec<Hotel>,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

impl Catalog {
    pub fn new(
        destinations: Vec<Destination>,
        hotels: Vec<Hotel>,
        activities: Vec<Activity>,
    ) -> Self {
        Self {
            destinations,
            hotels,
            activities,
        }
    }

    /// A catalog with no records. Searching it yields nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    pub fn hotels(&self) -> &[Hotel] {
        &self.hotels
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn len(&self) -> usize {
        self.destinations.len() + self.hotels.len() + self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            destinations: self.destinations.len(),
            hotels: self.hotels.len(),
            activities: self.activities.len(),
        }
    }

    /// Every record of one kind, in catalog order.
    pub fn listings_of(&self, kind: Kind) -> Box<dyn Iterator<Item = Listing<'_>> + '_> {
        match kind {
            Kind::Destination => Box::new(self.destinations.iter().map(Listing::Destination)),
            Kind::Hotel => Box::new(self.hotels.iter().map(Listing::Hotel)),
            Kind::Activity => Box::new(self.activities.iter().map(Listing::Activity)),
        }
    }

    /// Every record: destinations, then hotels, then activities.
    pub fn listings(&self) -> impl Iterator<Item = Listing<'_>> {
        Kind::ALL.into_iter().flat_map(move |k| self.listings_of(k))
    }

    pub fn find_destination(&self, id: &str) -> Option<&Destination> {
        self.destinations.iter().find(|d| d.id == id)
    }

    pub fn find_hotel(&self, id: &str) -> Option<&Hotel> {
        self.hotels.iter().find(|h| h.id == id)
    }

    pub fn find_activity(&self, id: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.id == id)
    }

    /// Look up a record by kind and id (ids are only unique per kind).
    pub fn find(&self, kind: Kind, id: &str) -> Option<Listing<'_>> {
        match kind {
            Kind::Destination => self.find_destination(id).map(Listing::Destination),
            Kind::Hotel => self.find_hotel(id).map(Listing::Hotel),
            Kind::Activity => self.find_activity(id).map(Listing::Activity),
        }
    }
}
