// crates/wayfare-core/src/model/record.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The catalog a record belongs to.
///
/// Used as the discriminant tag on projected search results and as the
/// narrowing key of [`KindFilter`](crate::search::KindFilter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Destination,
    Hotel,
    Activity,
}

impl Kind {
    /// All kinds in aggregation order.
    pub const ALL: [Kind; 3] = [Kind::Destination, Kind::Hotel, Kind::Activity];

    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Destination => "destination",
            Kind::Hotel => "hotel",
            Kind::Activity => "activity",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = String;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        Kind::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(tag))
            .ok_or_else(|| format!("unknown kind: {tag}"))
    }
}

/// A destination as served by `GET /api/destinations`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub id: String,
    pub name: String,
    pub country: String,
    pub image_url: String,
    pub date_range: String,
    /// Trip length in days.
    pub duration: u32,
}

/// A hotel as served by `GET /api/hotels`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: String,
    pub name: String,
    pub location: String,
    pub image_url: String,
    pub rating: f32,
    /// Whole US dollars.
    pub price_per_night: u32,
    pub nights: u32,
    #[serde(default)]
    pub amenities: Vec<String>,
}

impl Hotel {
    /// Price of the whole stay.
    pub fn stay_cost(&self) -> u32 {
        self.price_per_night.saturating_mul(self.nights)
    }
}

/// An activity as served by `GET /api/activities`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub name: String,
    pub location: String,
    pub image_url: String,
    /// Free-form, e.g. "1.5 hours".
    pub duration: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub directions: String,
    #[serde(default)]
    pub best_time: String,
    #[serde(default)]
    pub entrance_fee: String,
}

/// Borrowed view over one record of any catalog.
///
/// This is the uniform `CatalogRecord` shape the matcher and the presentation
/// mapper work on; `place()` is the country for destinations and the location
/// for hotels and activities.
#[derive(Debug, Clone, Copy)]
pub enum Listing<'a> {
    Destination(&'a Destination),
    Hotel(&'a Hotel),
    Activity(&'a Activity),
}

impl<'a> Listing<'a> {
    #[inline]
    pub fn kind(&self) -> Kind {
        match self {
            Listing::Destination(_) => Kind::Destination,
            Listing::Hotel(_) => Kind::Hotel,
            Listing::Activity(_) => Kind::Activity,
        }
    }

    /// Unique within its own kind only.
    pub fn id(&self) -> &'a str {
        match self {
            Listing::Destination(d) => &d.id,
            Listing::Hotel(h) => &h.id,
            Listing::Activity(a) => &a.id,
        }
    }

    pub fn name(&self) -> &'a str {
        match self {
            Listing::Destination(d) => &d.name,
            Listing::Hotel(h) => &h.name,
            Listing::Activity(a) => &a.name,
        }
    }

    pub fn place(&self) -> &'a str {
        match self {
            Listing::Destination(d) => &d.country,
            Listing::Hotel(h) => &h.location,
            Listing::Activity(a) => &a.location,
        }
    }

    pub fn image_url(&self) -> &'a str {
        match self {
            Listing::Destination(d) => &d.image_url,
            Listing::Hotel(h) => &h.image_url,
            Listing::Activity(a) => &a.image_url,
        }
    }
}

impl<'a> From<&'a Destination> for Listing<'a> {
    fn from(d: &'a Destination) -> Self {
        Listing::Destination(d)
    }
}

impl<'a> From<&'a Hotel> for Listing<'a> {
    fn from(h: &'a Hotel) -> Self {
        Listing::Hotel(h)
    }
}

impl<'a> From<&'a Activity> for Listing<'a> {
    fn from(a: &'a Activity) -> Self {
        Listing::Activity(a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_parses_case_insensitively() {
        assert_eq!("Hotel".parse::<Kind>(), Ok(Kind::Hotel));
        assert_eq!(" activity ".parse::<Kind>(), Ok(Kind::Activity));
        assert!("flight".parse::<Kind>().is_err());
    }

    #[test]
    fn hotel_deserializes_camel_case() {
        let hotel: Hotel = serde_json::from_str(
            r#"{"id":"h","name":"H","location":"Shibuya","imageUrl":"u",
                "rating":4.5,"pricePerNight":100,"nights":3}"#,
        )
        .unwrap();
        assert_eq!(hotel.price_per_night, 100);
        assert!(hotel.amenities.is_empty());
        assert_eq!(hotel.stay_cost(), 300);
    }

    #[test]
    fn listing_place_is_country_for_destinations() {
        let d = Destination {
            id: "rome".into(),
            name: "Rome".into(),
            country: "Italy".into(),
            image_url: String::new(),
            date_range: String::new(),
            duration: 7,
        };
        let listing = Listing::from(&d);
        assert_eq!(listing.place(), "Italy");
        assert_eq!(listing.kind(), Kind::Destination);
    }
}
