//! Region-aware enrichment for detailed boundary datasets.
//!
//! A feature's `id` property is either a bare country code (`"US"`) or a
//! composite country-plus-region code (`"USCA"`). Resolution is fatal on
//! the first unmapped identifier; the run produces either a fully
//! enriched collection or nothing.

use super::{canonical_id, render_properties, sequential_id};
use crate::error::{IsoTagError, Result};
use crate::model::IsoTable;
use geojson::FeatureCollection;
use serde_json::Value;

/// Resolve every feature's composite identifier and merge the four
/// enrichment fields (`iso_2_char`, `iso_3_char`, `iso_region`,
/// `is_region`) into its existing properties. All other properties,
/// including the original `id` property, are preserved.
pub fn enrich_regions(
    mut collection: FeatureCollection,
    table: &IsoTable,
) -> Result<FeatureCollection> {
    for (n, feature) in collection.features.iter_mut().enumerate() {
        let props = feature.properties.get_or_insert_with(Default::default);

        let original_id = props.get("id").cloned().unwrap_or(Value::Null);
        let standardized = canonical_id(props.get("id")).ok_or_else(|| {
            IsoTagError::MissingIdentifier {
                feature: format!("#{} with properties {}", n + 1, render_properties(props)),
            }
        })?;

        let (iso_2, iso_3, iso_region, is_region) = match split_region(&standardized) {
            Some((prefix, suffix)) => {
                let entry =
                    table
                        .get(prefix)
                        .ok_or_else(|| IsoTagError::UnknownRegionPrefix {
                            prefix: prefix.to_owned(),
                            feature_id: display_id(&original_id),
                        })?;
                (
                    entry.alpha2.clone(),
                    entry.alpha3.clone(),
                    Some(format!("{prefix}-{suffix}")),
                    true,
                )
            }
            None => {
                let entry =
                    table
                        .get(&standardized)
                        .ok_or_else(|| IsoTagError::UnknownCountryCode {
                            code: standardized.clone(),
                            feature_id: display_id(&original_id),
                        })?;
                (entry.alpha2.clone(), entry.alpha3.clone(), None, false)
            }
        };

        feature.id = Some(sequential_id(n + 1));
        props.insert("iso_2_char".to_owned(), Value::String(iso_2));
        props.insert("iso_3_char".to_owned(), Value::String(iso_3));
        props.insert(
            "iso_region".to_owned(),
            iso_region.map_or(Value::Null, Value::String),
        );
        props.insert("is_region".to_owned(), Value::Bool(is_region));
    }
    Ok(collection)
}

/// Split a canonical identifier into country prefix and region suffix.
/// Identifiers of two characters or fewer are country codes, not regions.
/// Counts characters, not bytes, so multi-byte identifiers cannot panic
/// on the split.
fn split_region(id: &str) -> Option<(&str, &str)> {
    let (idx, _) = id.char_indices().nth(2)?;
    Some((&id[..idx], &id[idx..]))
}

/// Original identifier value as it appears in error messages.
fn display_id(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
