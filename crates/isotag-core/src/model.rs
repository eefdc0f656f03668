use serde::Deserialize;
use std::collections::HashMap;

/// Raw country record as it comes from the ISO mapping JSON.
/// Field names mirror the external table; we do *not* expose this type
/// beyond table construction. Unknown fields in the source are ignored.
#[derive(Debug, Deserialize)]
pub struct CountryRecordRaw {
    #[serde(rename = "Country")]
    pub name: String,
    #[serde(rename = "Alpha-2 code")]
    pub alpha2: String,
    #[serde(rename = "Alpha-3 code")]
    pub alpha3: String,
}

/// Raw mapping document. A document without the `ISO_COUNTRY_CODES` field
/// yields an empty record list, not an error.
#[derive(Debug, Default, Deserialize)]
pub struct IsoTableRaw {
    #[serde(rename = "ISO_COUNTRY_CODES", default)]
    pub records: Vec<CountryRecordRaw>,
}

/// One normalized ISO country entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryRef {
    pub alpha2: String,
    pub alpha3: String,
    pub name: String,
}

/// Lookup table from uppercase alpha-2 code to its country entry.
///
/// Built once per run and read-only afterwards.
#[derive(Debug, Default)]
pub struct IsoTable {
    entries: HashMap<String, CountryRef>,
}

impl IsoTable {
    /// Build the table from raw records.
    ///
    /// Keys are the uppercased alpha-2 codes; the stored entry keeps the
    /// record's original spelling. Duplicate codes resolve last-write-wins
    /// in input order.
    pub fn from_records(records: Vec<CountryRecordRaw>) -> Self {
        let mut entries = HashMap::with_capacity(records.len());
        for record in records {
            entries.insert(
                record.alpha2.to_uppercase(),
                CountryRef {
                    alpha2: record.alpha2,
                    alpha3: record.alpha3,
                    name: record.name,
                },
            );
        }
        IsoTable { entries }
    }

    /// Look up an entry by its canonical (uppercase) alpha-2 code.
    pub fn get(&self, code: &str) -> Option<&CountryRef> {
        self.entries.get(code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
