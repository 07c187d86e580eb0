// crates/wayfare-core/src/recent.rs
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// How many past queries the search screen remembers.
pub const RECENT_CAPACITY: usize = 3;

/// Bounded, most-recent-first list of committed search terms.
///
/// Terms are compared case-sensitively, as typed (after trimming). Committing
/// a term that is already present moves it to the front instead of adding a
/// second copy; the list never grows past [`RECENT_CAPACITY`].
///
/// Serialized as a plain JSON array, newest first. Deserializing goes through
/// [`RecentSearches::seeded`], so a stored list is re-capped and de-duplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct RecentSearches {
    terms: VecDeque<String>,
}

impl RecentSearches {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the list, e.g. with terms from a previous session.
    ///
    /// Seeds go through [`RecentSearches::commit`] in reverse, so the first
    /// seed ends up at the front and the usual trimming, de-duplication and
    /// cap apply.
    pub fn seeded<I, S>(seeds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        I::IntoIter: DoubleEndedIterator,
        S: AsRef<str>,
    {
        let mut recent = Self::new();
        for term in seeds.into_iter().rev() {
            recent.commit(term.as_ref());
        }
        recent
    }

    /// Record `term` as the most recent search.
    ///
    /// Returns `false` (and leaves the list alone) for blank terms.
    pub fn commit(&mut self, term: &str) -> bool {
        let term = term.trim();
        if term.is_empty() {
            return false;
        }

        if let Some(pos) = self.terms.iter().position(|t| t == term) {
            if let Some(existing) = self.terms.remove(pos) {
                self.terms.push_front(existing);
            }
        } else {
            self.terms.push_front(term.to_owned());
            self.terms.truncate(RECENT_CAPACITY);
        }
        true
    }

    /// "Clear All".
    pub fn clear(&mut self) {
        self.terms.clear();
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.terms.iter().cloned().collect()
    }
}

impl From<Vec<String>> for RecentSearches {
    fn from(terms: Vec<String>) -> Self {
        Self::seeded(terms)
    }
}

impl From<RecentSearches> for Vec<String> {
    fn from(recent: RecentSearches) -> Self {
        recent.terms.into()
    }
}
