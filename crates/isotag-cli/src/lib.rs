//! isotag-cli
//! ==========
//!
//! Command-line interface for the `isotag-core` GeoJSON enricher.
//!
//! This crate primarily provides a binary (`isotag`). We include a small
//! library target so that docs.rs renders a documentation page and shows
//! this overview.
//!
//! Basic usage:
//!
//! ```text
//! isotag --help
//! isotag regions boundaries.geojson iso_codes.json enriched.geojson
//! isotag countries world.geojson iso_codes.json enriched.geojson
//! ```
//!
//! For programmatic access to the pipelines, use the `isotag-core` crate
//! directly.

// This library target intentionally exposes no API; the binary is the
// primary deliverable.
