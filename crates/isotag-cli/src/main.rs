//! isotag — Command-line interface for isotag-core
//!
//! This binary enriches GeoJSON feature collections with standardized
//! ISO 3166 identifiers, resolved against an external country mapping
//! file. One input file per invocation; the run either produces a fully
//! enriched output file or fails without writing anything.
//!
//! Usage examples
//! --------------
//!
//! - Enrich a detailed boundary dataset whose feature `id` properties mix
//!   country codes ("US") and composite region codes ("USCA")
//!   $ isotag regions boundaries.geojson iso_codes.json enriched.geojson
//!
//! - Enrich a world-country dataset that carries an `iso_a2` property,
//!   tolerating sentinel codes such as "-99"
//!   $ isotag countries world.geojson iso_codes.json enriched.geojson
//!
//! Mapping file
//! ------------
//!
//! The mapping is a JSON object with an `ISO_COUNTRY_CODES` field holding
//! records of the form
//! `{"Country": "...", "Alpha-2 code": "..", "Alpha-3 code": "..."}`.
//! It is reloaded fresh on every invocation.
mod args;

use crate::args::{CliArgs, Commands};
use clap::Parser;
use isotag_core::{
    enrich_countries, enrich_regions, read_feature_collection, write_feature_collection,
    FeatureCollection, IsoTable,
};
use std::path::Path;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    match args.command {
        Commands::Regions {
            input,
            mapping,
            output,
        } => run(&input, &mapping, &output, enrich_regions),
        Commands::Countries {
            input,
            mapping,
            output,
        } => run(&input, &mapping, &output, enrich_countries),
    }
}

fn run(
    input: &Path,
    mapping: &Path,
    output: &Path,
    pipeline: fn(FeatureCollection, &IsoTable) -> isotag_core::Result<FeatureCollection>,
) -> anyhow::Result<()> {
    let table = IsoTable::load_from_path(mapping)?;
    let collection = read_feature_collection(input)?;

    let enriched = pipeline(collection, &table)?;

    write_feature_collection(output, &enriched)?;
    println!(
        "Successfully enriched GeoJSON and saved to '{}'",
        output.display()
    );
    Ok(())
}
