use crate::error::Result;
use geojson::FeatureCollection;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Serialize the enriched collection to `path`, pretty-printed with
/// two-space indentation; non-ASCII text is written verbatim.
/// An existing file at the path is overwritten without warning.
pub fn write_feature_collection(
    path: impl AsRef<Path>,
    collection: &FeatureCollection,
) -> Result<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, collection)?;
    writer.flush()?;
    Ok(())
}
