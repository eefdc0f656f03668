use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for isotag
#[derive(Debug, Parser)]
#[command(
    name = "isotag",
    version,
    about = "Enrich GeoJSON feature collections with ISO country and region codes"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Enrich a boundary dataset whose feature ids mix countries and regions
    Regions {
        /// Path to the input GeoJSON file
        input: PathBuf,
        /// Path to the ISO country mapping JSON
        mapping: PathBuf,
        /// Path for the enriched output GeoJSON
        output: PathBuf,
    },

    /// Enrich a world-country dataset carrying an `iso_a2` property
    Countries {
        /// Path to the input GeoJSON file
        input: PathBuf,
        /// Path to the ISO country mapping JSON
        mapping: PathBuf,
        /// Path for the enriched output GeoJSON
        output: PathBuf,
    },
}
