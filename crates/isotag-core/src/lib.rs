// crates/isotag-core/src/lib.rs

pub mod enrich;
pub mod error;
pub mod loader;
pub mod model;
pub mod writer;

// Re-exports
pub use crate::enrich::{enrich_countries, enrich_regions};
pub use crate::error::{IsoTagError, Result};
pub use crate::loader::read_feature_collection;
pub use crate::model::{CountryRecordRaw, CountryRef, IsoTable};
pub use crate::writer::write_feature_collection;
// The collection type flows through the whole pipeline; save callers the
// extra geojson import.
pub use geojson::FeatureCollection;
