// crates/isotag-core/src/loader.rs

//! # Data Loader
//!
//! Handles the physical layer (open, buffer, parse) for both inputs.
//! Each input is fully read and closed before any output file is created.

use crate::error::{IsoTagError, Result};
use crate::model::{IsoTable, IsoTableRaw};
use geojson::{FeatureCollection, GeoJson};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

fn open_stream(path: &Path, what: &str) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        IsoTagError::NotFound(format!("{what} not found at {}: {e}", path.display()))
    })?;
    Ok(Box::new(BufReader::new(file)))
}

impl IsoTable {
    /// Load and build the table from an ISO mapping JSON file.
    ///
    /// Reloaded fresh on every invocation; nothing is cached between runs.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let reader = open_stream(path.as_ref(), "ISO mapping")?;
        let raw: IsoTableRaw = serde_json::from_reader(reader)?;
        Ok(Self::from_records(raw.records))
    }
}

/// Parse a GeoJSON file into a feature collection.
pub fn read_feature_collection(path: impl AsRef<Path>) -> Result<FeatureCollection> {
    let reader = open_stream(path.as_ref(), "GeoJSON input")?;
    let geojson = GeoJson::from_reader(reader)?;
    Ok(FeatureCollection::try_from(geojson)?)
}
