// crates/wayfare-core/src/loader/snapshot.rs
use crate::error::Result;
use crate::model::Catalog;
use bincode::Options;

/// File suffix for binary catalog snapshots.
pub const SNAPSHOT_SUFFIX: &str = ".bin";

/// Refuse snapshots that would decode into more than this many bytes.
const SNAPSHOT_LIMIT: u64 = 64 * 1024 * 1024;

fn options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_limit(SNAPSHOT_LIMIT)
        .allow_trailing_bytes()
}

impl Catalog {
    /// Serialize into the binary snapshot format read back by
    /// [`Catalog::from_bytes`] and by `load_from_path` for `*.bin` files.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(options().serialize(self)?)
    }

    /// Reconstruct a catalog from a snapshot produced by [`Catalog::to_bytes`].
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Ok(options().deserialize(data)?)
    }
}
