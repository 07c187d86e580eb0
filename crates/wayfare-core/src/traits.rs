// crates/wayfare-core/src/traits.rs
use crate::model::{Activity, Destination, Hotel, Listing};
use crate::text::{contains_folded, normalize_query};

/// Query matching for records that expose a display name and a place.
///
/// Implementors provide `&str` views of their name and their place (the
/// country for destinations, the location otherwise) and get
/// case-insensitive substring matching on both:
/// - [`PlaceMatch::matches`] normalizes a raw query first
/// - [`PlaceMatch::matches_needle`] takes a needle already produced by
///   [`normalize_query`], so callers scanning a whole catalog fold the query once
///
/// # Examples
/// ```rust
/// use wayfare_core::traits::PlaceMatch;
///
/// struct Spot(&'static str, &'static str);
/// impl PlaceMatch for Spot {
///     fn name_str(&self) -> &str { self.0 }
///     fn place_str(&self) -> &str { self.1 }
/// }
///
/// let skytree = Spot("Tokyo Sky Tree", "Sumida, Tokyo");
/// assert!(skytree.matches("SUMIDA"));
/// assert!(skytree.matches("sky"));
/// assert!(!skytree.matches("   "));
/// ```
pub trait PlaceMatch {
    /// Canonical display name.
    fn name_str(&self) -> &str;

    /// Country or location label.
    fn place_str(&self) -> &str;

    /// Match against a folded needle.
    #[inline]
    fn matches_needle(&self, needle: &str) -> bool {
        contains_folded(self.name_str(), needle) || contains_folded(self.place_str(), needle)
    }

    /// Match against a raw query. Blank queries never match.
    #[inline]
    fn matches(&self, query: &str) -> bool {
        normalize_query(query).is_some_and(|needle| self.matches_needle(&needle))
    }
}

impl PlaceMatch for Destination {
    #[inline]
    fn name_str(&self) -> &str {
        &self.name
    }

    #[inline]
    fn place_str(&self) -> &str {
        &self.country
    }
}

impl PlaceMatch for Hotel {
    #[inline]
    fn name_str(&self) -> &str {
        &self.name
    }

    #[inline]
    fn place_str(&self) -> &str {
        &self.location
    }
}

impl PlaceMatch for Activity {
    #[inline]
    fn name_str(&self) -> &str {
        &self.name
    }

    #[inline]
    fn place_str(&self) -> &str {
        &self.location
    }
}

impl PlaceMatch for Listing<'_> {
    #[inline]
    fn name_str(&self) -> &str {
        self.name()
    }

    #[inline]
    fn place_str(&self) -> &str {
        self.place()
    }
}
