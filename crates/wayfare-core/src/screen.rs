// crates/wayfare-core/src/screen.rs

//! # Search Screen
//!
//! State owner for the discover screen: query, active tab, current results
//! and the recent-search list.
//!
//! ## Request ordering
//!
//! Every query or tab change issues a [`SearchRequest`] stamped with the next
//! value of a monotonically increasing sequence counter. Requests are plain
//! owned values, so they can be run on a task, after a simulated latency, or
//! synchronously. When a [`SearchResponse`] comes back the screen accepts it
//! only if its sequence is still the latest one issued; anything older is
//! dropped. Completions may therefore arrive in any order without an older
//! result ever overwriting a newer one.
//!
//! The screen is mutated only through `&mut self`, so it needs no locks.

use crate::model::{Catalog, Destination};
use crate::recent::RecentSearches;
use crate::search::{search_filtered, KindFilter, SearchResult};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Simulated network latency before results are computed.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(600);

/// Number of destinations shown as "Trending" on the idle screen.
pub const TRENDING_COUNT: usize = 4;

/// Suggestions shown on the idle screen.
pub const POPULAR_SEARCHES: [&str; 4] = [
    "Japan",
    "Beach resorts",
    "Hiking tours",
    "Family-friendly hotels",
];

/// Recent searches a fresh screen starts with.
pub const SEED_RECENT_SEARCHES: [&str; 3] = ["Tokyo", "Hotels in Paris", "Beach activities"];

/// A search waiting to be executed.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    seq: u64,
    query: String,
    filter: KindFilter,
    catalog: Arc<Catalog>,
}

impl SearchRequest {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn filter(&self) -> &KindFilter {
        &self.filter
    }

    /// Compute the results now.
    pub fn execute(self) -> SearchResponse {
        let results = search_filtered(&self.catalog, &self.query, &self.filter);
        SearchResponse {
            seq: self.seq,
            query: self.query,
            results,
        }
    }

    /// Wait out `latency`, then compute the results.
    pub async fn run(self, latency: Duration) -> SearchResponse {
        tokio::time::sleep(latency).await;
        self.execute()
    }
}

/// The outcome of a [`SearchRequest`].
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResponse {
    seq: u64,
    query: String,
    results: Vec<SearchResult>,
}

impl SearchResponse {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }
}

/// The discover screen.
#[derive(Debug, Clone)]
pub struct SearchScreen {
    catalog: Arc<Catalog>,
    query: String,
    filter: KindFilter,
    results: Vec<SearchResult>,
    recent: RecentSearches,
    latency: Duration,
    issued: u64,
    pending: Option<u64>,
}

impl SearchScreen {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            query: String::new(),
            filter: KindFilter::All,
            results: Vec::new(),
            recent: RecentSearches::seeded(SEED_RECENT_SEARCHES),
            latency: DEFAULT_LATENCY,
            issued: 0,
            pending: None,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn with_recent(mut self, recent: RecentSearches) -> Self {
        self.recent = recent;
        self
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn filter(&self) -> &KindFilter {
        &self.filter
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn recent(&self) -> &RecentSearches {
        &self.recent
    }

    /// True while the latest issued request has not been applied.
    pub fn is_searching(&self) -> bool {
        self.pending.is_some()
    }

    /// Update the query. Returns the request to run, or `None` when the
    /// query is blank (results are cleared and in-flight requests orphaned).
    pub fn set_query(&mut self, query: impl Into<String>) -> Option<SearchRequest> {
        self.query = query.into();
        self.reissue()
    }

    /// Switch tabs. Re-runs the current query, if any.
    pub fn set_filter(&mut self, filter: KindFilter) -> Option<SearchRequest> {
        self.filter = filter;
        self.reissue()
    }

    /// The "x" button.
    pub fn clear_query(&mut self) {
        self.query.clear();
        self.invalidate();
    }

    /// "Clear All" on the recent list.
    pub fn clear_recent(&mut self) {
        self.recent.clear();
    }

    /// Apply a finished request. Returns `false` if it was superseded.
    pub fn apply(&mut self, response: SearchResponse) -> bool {
        if self.pending != Some(response.seq) {
            debug!(
                seq = response.seq,
                latest = self.issued,
                "discarding stale search response"
            );
            return false;
        }

        self.pending = None;
        self.results = response.results;
        self.recent.commit(&response.query);
        true
    }

    /// Issue a request for the current query and wait for it.
    ///
    /// Convenience for callers that don't interleave requests.
    pub async fn search(&mut self, query: impl Into<String>) -> &[SearchResult] {
        if let Some(request) = self.set_query(query) {
            let response = request.run(self.latency).await;
            self.apply(response);
        }
        &self.results
    }

    /// Idle-screen suggestions.
    pub fn popular_searches(&self) -> &'static [&'static str] {
        &POPULAR_SEARCHES
    }

    /// Idle-screen destination cards.
    pub fn trending(&self) -> &[Destination] {
        let n = self.catalog.destinations.len().min(TRENDING_COUNT);
        &self.catalog.destinations[..n]
    }

    fn reissue(&mut self) -> Option<SearchRequest> {
        if crate::text::normalize_query(&self.query).is_none() {
            self.invalidate();
            return None;
        }

        self.issued += 1;
        self.pending = Some(self.issued);
        Some(SearchRequest {
            seq: self.issued,
            query: self.query.clone(),
            filter: self.filter.clone(),
            catalog: Arc::clone(&self.catalog),
        })
    }

    fn invalidate(&mut self) {
        self.issued += 1;
        self.pending = None;
        self.results.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::sample_catalog;
    use crate::model::Kind;

    fn screen() -> SearchScreen {
        SearchScreen::new(Arc::new(sample_catalog())).with_recent(RecentSearches::new())
    }

    #[test]
    fn fresh_screen_has_seeded_recents() {
        let screen = SearchScreen::new(Arc::new(sample_catalog()));
        assert_eq!(
            screen.recent().to_vec(),
            ["Tokyo", "Hotels in Paris", "Beach activities"]
        );
        assert_eq!(screen.trending().len(), TRENDING_COUNT);
        assert_eq!(screen.trending()[0].name, "Tokyo");
    }

    #[test]
    fn latest_request_wins_out_of_order() {
        let mut screen = screen();
        let older = screen.set_query("tokyo").unwrap();
        let newer = screen.set_query("paris").unwrap();

        let newer = newer.execute();
        let older = older.execute();

        assert!(screen.apply(newer));
        assert!(!screen.apply(older));
        assert_eq!(screen.results().len(), 1);
        assert_eq!(screen.results()[0].name, "Paris");
        assert_eq!(screen.recent().to_vec(), ["paris"]);
    }

    #[test]
    fn stale_response_before_latest_is_dropped() {
        let mut screen = screen();
        let older = screen.set_query("tokyo").unwrap();
        let _newer = screen.set_query("rome").unwrap();

        assert!(!screen.apply(older.execute()));
        assert!(screen.results().is_empty());
        assert!(screen.is_searching());
        assert!(screen.recent().is_empty());
    }

    #[test]
    fn blank_query_clears_and_orphans_pending() {
        let mut screen = screen();
        let pending = screen.set_query("tokyo").unwrap();
        assert!(screen.set_query("   ").is_none());
        assert!(!screen.is_searching());
        assert!(!screen.apply(pending.execute()));
        assert!(screen.results().is_empty());
    }

    #[test]
    fn tab_change_reruns_current_query() {
        let mut screen = screen();
        let first = screen.set_query("tokyo").unwrap();
        assert!(screen.apply(first.execute()));
        let all = screen.results().len();

        let narrowed = screen.set_filter(KindFilter::Only(Kind::Hotel)).unwrap();
        assert_eq!(narrowed.query(), "tokyo");
        assert!(screen.apply(narrowed.execute()));
        assert!(screen.results().iter().all(|r| r.kind == Kind::Hotel));
        assert!(screen.results().len() < all);
    }

    #[test]
    fn filter_change_without_query_issues_nothing() {
        let mut screen = screen();
        assert!(screen.set_filter(KindFilter::Only(Kind::Activity)).is_none());
    }

    #[test]
    fn repeat_commit_is_recorded_once() {
        let mut screen = screen();
        for _ in 0..2 {
            let req = screen.set_query(" Kyoto ").unwrap();
            screen.apply(req.execute());
        }
        assert_eq!(screen.recent().to_vec(), ["Kyoto"]);
    }

    #[tokio::test(start_paused = true)]
    async fn delayed_requests_complete_out_of_order() {
        let mut screen = screen();
        let slow = screen.set_query("japan").unwrap();
        let fast = screen.set_query("bali").unwrap();

        let slow = tokio::spawn(slow.run(Duration::from_millis(900)));
        let fast = tokio::spawn(fast.run(Duration::from_millis(100)));

        assert!(screen.apply(fast.await.unwrap()));
        assert!(!screen.apply(slow.await.unwrap()));
        assert_eq!(screen.results()[0].name, "Bali");
    }

    #[tokio::test(start_paused = true)]
    async fn search_waits_for_latency() {
        let mut screen = screen();
        let start = tokio::time::Instant::now();
        let names: Vec<String> = screen
            .search("rome")
            .await
            .iter()
            .map(|r| r.name.clone())
            .collect();
        assert_eq!(names, ["Rome"]);
        assert!(start.elapsed() >= DEFAULT_LATENCY);
        assert!(!screen.is_searching());
    }
}
