// crates/wayfare-core/src/search.rs

//! # Catalog Search
//!
//! Linear scan over the three catalogs, projection into a uniform result
//! shape, and narrowing by kind.
//!
//! Ordering is purely positional: destinations first, then hotels, then
//! activities, each in its catalog's own order. There is no relevance score
//! and no de-duplication across kinds, so a name shared by a destination and
//! a hotel yields two results.

use crate::model::{Catalog, Kind, Listing};
use crate::text::normalize_query;
use crate::traits::PlaceMatch;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Iconography key for a result row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    /// Destinations.
    Map,
    /// Hotels.
    MapPin,
    /// Activities.
    Clock,
    /// Anything without a known kind.
    Pin,
}

impl Icon {
    #[inline]
    pub fn for_kind(kind: Kind) -> Self {
        match kind {
            Kind::Destination => Icon::Map,
            Kind::Hotel => Icon::MapPin,
            Kind::Activity => Icon::Clock,
        }
    }

    /// Icon for a raw kind tag; unrecognized tags get the generic pin.
    pub fn for_tag(tag: &str) -> Self {
        tag.parse::<Kind>().map(Icon::for_kind).unwrap_or(Icon::Pin)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Icon::Map => "map",
            Icon::MapPin => "map-pin",
            Icon::Clock => "clock",
            Icon::Pin => "pin",
        }
    }
}

/// Kind-specific fields shown under a result.
///
/// Only the fields relevant to the result's kind are populated; the rest are
/// left out of the serialized form entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    /// Price per night, whole dollars.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// A record projected for display. Recomputed on every query, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub id: String,
    pub name: String,
    pub kind: Kind,
    pub location: String,
    pub image_url: String,
    pub icon: Icon,
    pub details: ResultDetails,
}

impl SearchResult {
    /// Key that is unique across kinds (`"hotel:aman-tokyo"`).
    pub fn key(&self) -> String {
        format!("{}:{}", self.kind, self.id)
    }
}

/// Project a record into its display form.
///
/// Pure and total: the same record always yields the same result.
pub fn project(listing: Listing<'_>) -> SearchResult {
    let details = match listing {
        Listing::Destination(d) => ResultDetails {
            date: Some(d.date_range.clone()),
            ..ResultDetails::default()
        },
        Listing::Hotel(h) => ResultDetails {
            rating: Some(h.rating),
            price: Some(h.price_per_night),
            ..ResultDetails::default()
        },
        Listing::Activity(a) => ResultDetails {
            duration: Some(a.duration.clone()),
            ..ResultDetails::default()
        },
    };

    SearchResult {
        id: listing.id().to_owned(),
        name: listing.name().to_owned(),
        kind: listing.kind(),
        location: listing.place().to_owned(),
        image_url: listing.image_url().to_owned(),
        icon: Icon::for_kind(listing.kind()),
        details,
    }
}

/// Run the matcher over every catalog and concatenate the projected hits.
///
/// Blank queries (see [`normalize_query`]) return no results.
///
/// # Examples
///
/// ```rust
/// use wayfare_core::loader::sample_catalog;
/// use wayfare_core::search::search;
/// use wayfare_core::Kind;
///
/// let catalog = sample_catalog();
/// let hits = search(&catalog, "tokyo");
/// assert_eq!(hits[0].name, "Tokyo");
/// assert_eq!(hits[0].kind, Kind::Destination);
/// assert!(hits.iter().any(|h| h.name == "Tokyo Sky Tree"));
///
/// assert!(search(&catalog, "   ").is_empty());
/// ```
pub fn search(catalog: &Catalog, query: &str) -> Vec<SearchResult> {
    let Some(needle) = normalize_query(query) else {
        return Vec::new();
    };

    let mut out = Vec::new();
    for kind in Kind::ALL {
        out.extend(
            catalog
                .listings_of(kind)
                .filter(|listing| listing.matches_needle(&needle))
                .map(project),
        );
    }
    out
}

/// The category tab currently selected on the search screen.
///
/// It only narrows an already aggregated result list; matching is unaffected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum KindFilter {
    #[default]
    All,
    Only(Kind),
    /// A tag that names no catalog. It keeps nothing.
    Unknown(String),
}

impl KindFilter {
    /// Parse a tab tag (`"all"`, `"destination"`, `"hotel"`, `"activity"`).
    ///
    /// Blank input means `All`; anything unrecognized becomes [`KindFilter::Unknown`].
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.trim();
        if tag.is_empty() || tag.eq_ignore_ascii_case("all") {
            return KindFilter::All;
        }
        match tag.parse::<Kind>() {
            Ok(kind) => KindFilter::Only(kind),
            Err(_) => KindFilter::Unknown(tag.to_owned()),
        }
    }

    #[inline]
    pub fn admits(&self, kind: Kind) -> bool {
        match self {
            KindFilter::All => true,
            KindFilter::Only(k) => *k == kind,
            KindFilter::Unknown(_) => false,
        }
    }
}

impl fmt::Display for KindFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KindFilter::All => f.write_str("all"),
            KindFilter::Only(kind) => write!(f, "{kind}"),
            KindFilter::Unknown(tag) => f.write_str(tag),
        }
    }
}

impl From<Kind> for KindFilter {
    fn from(kind: Kind) -> Self {
        KindFilter::Only(kind)
    }
}

/// Narrow results to one kind, keeping aggregation order.
pub fn filter_by_kind(results: Vec<SearchResult>, filter: &KindFilter) -> Vec<SearchResult> {
    if *filter == KindFilter::All {
        return results;
    }
    results.into_iter().filter(|r| filter.admits(r.kind)).collect()
}

/// [`search`] followed by [`filter_by_kind`].
pub fn search_filtered(catalog: &Catalog, query: &str, filter: &KindFilter) -> Vec<SearchResult> {
    filter_by_kind(search(catalog, query), filter)
}
