// crates/isotag-core/src/enrich/mod.rs

//! The two enrichment pipelines and their shared identifier handling.
//!
//! Both pipelines walk the collection in input order, resolve each
//! feature against the [`IsoTable`](crate::model::IsoTable), and reassign
//! the top-level feature id to the sequential `feature_<N>` form. They
//! differ in how they treat properties: the region-aware pipeline merges
//! its enrichment fields into whatever is already there, the country-only
//! pipeline rebuilds the properties object from scratch. That asymmetry
//! is intentional.

mod countries;
mod regions;

pub use countries::enrich_countries;
pub use regions::enrich_regions;

use geojson::feature::Id;
use serde_json::{Map, Value};

/// Replacement id for the N-th processed feature (1-based, no gaps).
fn sequential_id(n: usize) -> Id {
    Id::String(format!("feature_{n}"))
}

/// Canonical form of a textual identifier: trimmed and uppercased.
/// Anything that is not a non-blank string canonicalizes to `None`.
fn canonical_id(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_uppercase())
            }
        }
        _ => None,
    }
}

/// JSON-value truthiness: null, false, zero and empty containers are falsy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(false, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Render a properties object for error messages.
fn render_properties(props: &Map<String, Value>) -> String {
    Value::Object(props.clone()).to_string()
}
