// crates/wayfare-core/src/loader/mod.rs

//! # Catalog Loader
//!
//! Handles the physical layer (files, gzip, HTTP) and delegates to the
//! payload parsers (JSON or binary snapshot).
//!
//! A catalog that cannot be read is never fatal to searching: the lenient
//! entry points ([`Catalog::load_or_empty`], [`Catalog::from_json_lenient`],
//! and the `fetch` feature's loader) degrade each broken collection to an
//! empty one and log a warning.

use crate::error::{Result, WayfareError};
use crate::model::Catalog;
use once_cell::sync::OnceCell;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{info, warn};

#[cfg(feature = "fetch")]
mod fetch;
mod snapshot;

#[cfg(feature = "fetch")]
pub use fetch::{fetch_catalog, ACTIVITIES_PATH, DESTINATIONS_PATH, HOTELS_PATH};
pub use snapshot::SNAPSHOT_SUFFIX;

static SAMPLE_JSON: &str = include_str!("../../data/catalog.json");
static SAMPLE_CATALOG: OnceCell<Catalog> = OnceCell::new();

/// The bundled sample catalog (6 destinations, 6 hotels, 3 activities).
pub fn shared_sample() -> &'static Catalog {
    SAMPLE_CATALOG.get_or_init(|| Catalog::from_json_lenient(SAMPLE_JSON))
}

/// Owned copy of [`shared_sample`].
pub fn sample_catalog() -> Catalog {
    shared_sample().clone()
}

/// Payload formats understood by [`Catalog::load_from_path`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Snapshot,
}

impl Format {
    /// Pick the format from the file name; `.gz` is looked through.
    pub fn detect(path: &Path) -> Format {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        let name = name.strip_suffix(".gz").unwrap_or(&name);
        if name.ends_with(SNAPSHOT_SUFFIX) {
            Format::Snapshot
        } else {
            Format::Json
        }
    }
}

impl Catalog {
    /// **Strict loader.** Reads a JSON document (`{destinations, hotels,
    /// activities}`) or a binary snapshot, optionally gzip-compressed.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut reader = open_stream(path)?;

        let catalog = match Format::detect(path) {
            Format::Snapshot => {
                let mut data = Vec::new();
                reader.read_to_end(&mut data)?;
                Catalog::from_bytes(&data)?
            }
            Format::Json => load_json(reader)?,
        };

        info!(
            path = %path.display(),
            records = catalog.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// **Lenient loader.** Like [`Catalog::load_from_path`], but any failure
    /// yields an empty catalog.
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        Self::load_from_path(path).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "catalog unavailable, using empty catalog");
            Catalog::empty()
        })
    }

    /// Parse a JSON document collection by collection.
    ///
    /// A collection that is missing or malformed becomes empty; the others
    /// are kept.
    pub fn from_json_lenient(text: &str) -> Self {
        let mut doc: serde_json::Value = match serde_json::from_str(text) {
            Ok(v) => v,
            Err(e) => {
                warn!(error = %e, "catalog document is not JSON, using empty catalog");
                return Catalog::empty();
            }
        };

        Catalog {
            destinations: take_collection(&mut doc, "destinations"),
            hotels: take_collection(&mut doc, "hotels"),
            activities: take_collection(&mut doc, "activities"),
        }
    }
}

#[cfg(feature = "json")]
fn load_json(reader: Box<dyn Read>) -> Result<Catalog> {
    Ok(serde_json::from_reader(reader)?)
}

#[cfg(not(feature = "json"))]
fn load_json(_reader: Box<dyn Read>) -> Result<Catalog> {
    Err(WayfareError::NotFound(
        "JSON catalogs require the `json` feature".into(),
    ))
}

fn take_collection<T: DeserializeOwned>(doc: &mut serde_json::Value, key: &str) -> Vec<T> {
    match doc.get_mut(key).map(serde_json::Value::take) {
        Some(value) => parse_collection(key, value),
        None => {
            warn!(collection = key, "collection missing, treating as empty");
            Vec::new()
        }
    }
}

/// Decode one collection, degrading to empty on a shape mismatch.
pub(crate) fn parse_collection<T: DeserializeOwned>(label: &str, value: serde_json::Value) -> Vec<T> {
    serde_json::from_value(value).unwrap_or_else(|e| {
        warn!(collection = label, error = %e, "malformed collection, treating as empty");
        Vec::new()
    })
}

/// Opens a file, buffers it, and wraps it in a gzip decoder when the name
/// ends in `.gz`.
fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        WayfareError::NotFound(format!("Catalog not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);
    let gzipped = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"));

    if !gzipped {
        return Ok(Box::new(reader));
    }

    #[cfg(feature = "compact")]
    {
        use flate2::read::GzDecoder;
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(WayfareError::NotFound(format!(
            "{} is gzip-compressed; enable the `compact` feature",
            path.display()
        )))
    }
}
