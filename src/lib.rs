//! Workspace facade: re-exports `wayfare-core` so the demos can
//! `use wayfare_rs::prelude::*`.

pub use wayfare_core::*;
