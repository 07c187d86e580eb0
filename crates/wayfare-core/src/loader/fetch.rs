// crates/wayfare-core/src/loader/fetch.rs

// ---------------------------------------------------------------------------
// FILE GUARD: compiled only with the 'fetch' feature.
// ---------------------------------------------------------------------------

use super::parse_collection;
use crate::error::Result;
use crate::model::Catalog;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{info, warn};

pub const DESTINATIONS_PATH: &str = "/api/destinations";
pub const HOTELS_PATH: &str = "/api/hotels";
pub const ACTIVITIES_PATH: &str = "/api/activities";

/// One-shot fetch of the three read-only collections from `base_url`.
///
/// Only building the HTTP client can fail. Each collection is fetched
/// independently; a request error, a non-success status or a malformed body
/// leaves that collection empty.
pub fn fetch_catalog(base_url: &str) -> Result<Catalog> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()?;
    let base = base_url.trim_end_matches('/');

    let catalog = Catalog {
        destinations: fetch_collection(&client, base, DESTINATIONS_PATH),
        hotels: fetch_collection(&client, base, HOTELS_PATH),
        activities: fetch_collection(&client, base, ACTIVITIES_PATH),
    };
    info!(base, records = catalog.len(), "catalog fetched");
    Ok(catalog)
}

fn fetch_collection<T: DeserializeOwned>(
    client: &reqwest::blocking::Client,
    base: &str,
    path: &str,
) -> Vec<T> {
    let url = format!("{base}{path}");
    let body = client
        .get(&url)
        .send()
        .and_then(|resp| resp.error_for_status())
        .and_then(|resp| resp.text());

    match body {
        Ok(text) => match serde_json::from_str(&text) {
            Ok(value) => parse_collection(path, value),
            Err(e) => {
                warn!(%url, error = %e, "response is not JSON, treating as empty");
                Vec::new()
            }
        },
        Err(e) => {
            warn!(%url, error = %e, "fetch failed, treating as empty");
            Vec::new()
        }
    }
}
