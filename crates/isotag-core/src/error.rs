// crates/isotag-core/src/error.rs

use thiserror::Error;

/// Errors raised while loading reference data or enriching a collection.
///
/// Every variant is fatal: the first one encountered aborts the run and
/// no output file is written.
#[derive(Debug, Error)]
pub enum IsoTagError {
    /// A feature in a region-aware run carries no usable `id` property.
    #[error("feature {feature} is missing a usable 'id' property")]
    MissingIdentifier { feature: String },

    /// A region identifier's two-letter country prefix has no table entry.
    #[error("region prefix '{prefix}' not found in country mapping for feature ID '{feature_id}'")]
    UnknownRegionPrefix { prefix: String, feature_id: String },

    /// A country identifier has no table entry.
    #[error("country code '{code}' not found in country mapping for feature ID '{feature_id}'")]
    UnknownCountryCode { code: String, feature_id: String },

    /// A feature in a country-only run carries no usable `iso_a2` property.
    #[error("feature missing iso_a2 field: {properties}")]
    MissingCountryCode { properties: String },

    /// An input path could not be opened.
    #[error("{0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("GeoJSON error: {0}")]
    Geo(#[from] geojson::Error),
}

pub type Result<T> = std::result::Result<T, IsoTagError>;
