//! End-to-end checks of the search pipeline against the bundled catalog.

use std::sync::Arc;
use std::time::Duration;

use wayfare_core::loader::{sample_catalog, shared_sample};
use wayfare_core::recent::RECENT_CAPACITY;
use wayfare_core::{search, search_filtered, Catalog, Icon, Kind, KindFilter, SearchScreen};

fn names(results: &[wayfare_core::SearchResult]) -> Vec<&str> {
    results.iter().map(|r| r.name.as_str()).collect()
}

#[test]
fn tokyo_spans_all_three_kinds_in_order() {
    let results = search(shared_sample(), "tokyo");

    assert_eq!(
        names(&results),
        [
            "Tokyo",
            "Hilton Tokyo Hotel",
            "Imperial Hotel Tokyo",
            "Park Hyatt Tokyo",
            "Aman Tokyo",
            "Sensō-ji Temple & Shopping Street",
            "Tokyo Sky Tree",
            "Shibuya Crossing",
        ]
    );

    let kinds: Vec<Kind> = results.iter().map(|r| r.kind).collect();
    let mut sorted = kinds.clone();
    sorted.sort_by_key(|k| Kind::ALL.iter().position(|x| x == k));
    assert_eq!(kinds, sorted);
}

#[test]
fn country_match_finds_destinations_only() {
    let results = search(shared_sample(), "japan");
    assert_eq!(names(&results), ["Tokyo", "Kyoto"]);
    assert!(results.iter().all(|r| r.icon == Icon::Map));
}

#[test]
fn results_serialize_without_null_details() {
    let results = search(shared_sample(), "sky tree");
    let json = serde_json::to_value(&results).unwrap();
    assert_eq!(
        json[0]["details"],
        serde_json::json!({ "duration": results[0].details.duration.clone().unwrap() })
    );
    assert_eq!(json[0]["icon"], "clock");
    assert_eq!(json[0]["kind"], "activity");
    assert_eq!(json[0]["imageUrl"], results[0].image_url.as_str());
}

#[test]
fn filters_narrow_without_reordering() {
    let catalog = shared_sample();
    let all = search(catalog, "shinjuku");
    let hotels = search_filtered(catalog, "shinjuku", &KindFilter::Only(Kind::Hotel));
    assert_eq!(all, hotels);
    assert_eq!(hotels.len(), 3);

    let unknown = search_filtered(catalog, "shinjuku", &KindFilter::from_tag("spa"));
    assert!(unknown.is_empty());
}

#[test]
fn empty_catalog_yields_nothing() {
    assert!(search(&Catalog::empty(), "tokyo").is_empty());
}

#[test]
fn diacritics_are_not_folded() {
    assert!(search(shared_sample(), "senso").is_empty());
    assert_eq!(search(shared_sample(), "SENSŌ").len(), 1);
}

#[tokio::test(start_paused = true)]
async fn screen_keeps_recents_bounded() {
    let mut screen = SearchScreen::new(Arc::new(sample_catalog()))
        .with_latency(Duration::from_millis(50));

    for q in ["Tokyo", "Paris", "Tokyo", "Rome"] {
        screen.search(q).await;
    }

    assert_eq!(screen.recent().to_vec(), ["Rome", "Tokyo", "Paris"]);
    assert_eq!(screen.recent().len(), RECENT_CAPACITY);
    assert_eq!(names(screen.results()), ["Rome"]);
}

#[test]
fn padded_queries_only_return_true_containments() {
    for q in ["tokyo ", " kyoto", " Tokyo", "shibuya "] {
        let needle = q.to_lowercase();
        for hit in search(shared_sample(), q) {
            assert!(
                hit.name.to_lowercase().contains(&needle)
                    || hit.location.to_lowercase().contains(&needle),
                "{q:?} -> {}",
                hit.name
            );
        }
    }
    assert!(search(shared_sample(), " kyoto").is_empty());
}
