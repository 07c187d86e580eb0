//! wayfare-cli
//! ===========
//!
//! Command-line interface for the `wayfare-core` travel catalog.
//!
//! This crate primarily provides a binary (`wayfare`). The library target
//! exists so the overview renders as a documentation page.
//!
//! ```text
//! wayfare --help
//! wayfare stats
//! wayfare search tokyo --kind hotel
//! wayfare --catalog catalog.json.gz snapshot catalog.bin
//! ```
//!
//! For programmatic access use [`wayfare-core`] directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
