//! Country-only enrichment for world-country datasets.
//!
//! Features carry a two-letter `iso_a2` property. Unlike the region-aware
//! pipeline, the properties object is rebuilt from scratch, and a code
//! without a table entry (sentinel values such as `"-99"`) falls back to
//! an "Unknown" record instead of failing the run.

use super::{is_truthy, render_properties, sequential_id};
use crate::error::{IsoTagError, Result};
use crate::model::{CountryRef, IsoTable};
use geojson::FeatureCollection;
use serde_json::{Map, Value};

/// Resolve every feature's `iso_a2` code and replace its properties with
/// the six enrichment fields. A missing code is fatal; an unmapped code
/// is not.
pub fn enrich_countries(
    mut collection: FeatureCollection,
    table: &IsoTable,
) -> Result<FeatureCollection> {
    for (n, feature) in collection.features.iter_mut().enumerate() {
        let props = feature.properties.take().unwrap_or_default();

        let code = match props.get("iso_a2") {
            Some(Value::String(s)) if !s.is_empty() => s.to_uppercase(),
            _ => {
                return Err(IsoTagError::MissingCountryCode {
                    properties: render_properties(&props),
                })
            }
        };

        feature.id = Some(sequential_id(n + 1));
        feature.properties = Some(match table.get(&code) {
            Some(entry) => mapped_properties(&code, entry),
            None => fallback_properties(&props),
        });
    }
    Ok(collection)
}

fn mapped_properties(code: &str, entry: &CountryRef) -> Map<String, Value> {
    let mut props = Map::new();
    props.insert("id".to_owned(), Value::String(code.to_owned()));
    props.insert("name".to_owned(), Value::String(entry.name.clone()));
    props.insert("iso_2_char".to_owned(), Value::String(code.to_owned()));
    props.insert("iso_3_char".to_owned(), Value::String(entry.alpha3.clone()));
    props.insert("iso_region".to_owned(), Value::Null);
    props.insert("is_region".to_owned(), Value::Bool(false));
    props
}

/// Replacement record for a code the table does not know. The original
/// `name` survives when it is truthy; everything else is dropped.
fn fallback_properties(original: &Map<String, Value>) -> Map<String, Value> {
    let name = original
        .get("name")
        .filter(|v| is_truthy(v))
        .cloned()
        .unwrap_or_else(|| Value::String("Unknown".to_owned()));

    let mut props = Map::new();
    props.insert("id".to_owned(), Value::Null);
    props.insert("name".to_owned(), name);
    props.insert("iso_2_char".to_owned(), Value::Null);
    props.insert("iso_3_char".to_owned(), Value::Null);
    props.insert("iso_region".to_owned(), Value::Null);
    props.insert("is_region".to_owned(), Value::Bool(false));
    props
}
