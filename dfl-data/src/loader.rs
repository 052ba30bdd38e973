//! CSV loading for landing records.
//!
//! The source export uses Danish column names and has been through a Mac Roman
//! round trip at some point, so headers are repaired before matching. Matching
//! is case-insensitive and accepts English aliases.
//!
//! # CSV Format
//!
//! ```text
//! År,Art,Landingsplads,lat,lon,Levende vægt (kg),Landet vægt (kg),Værdi (kr)
//! 2020,Torsk,Esbjerg,55.47,8.45,"1,300","1,200",30000
//! ```
//!
//! `År`, `Art` and `Landingsplads` are required; the rest are optional.

use crate::dataset::Dataset;
use crate::error::LoadError;
use crate::quality::DataQualityReport;
use crate::record::Record;
use csv::StringRecord;
use dfl_utils::headers::normalize_header;
use dfl_utils::numbers::{parse_amount, parse_float, parse_year};
use std::path::Path;

const YEAR_ALIASES: &[&str] = &["år", "year", "aar"];
const SPECIES_ALIASES: &[&str] = &["art", "species"];
const PORT_ALIASES: &[&str] = &["landingsplads", "port"];
const LAT_ALIASES: &[&str] = &["lat", "latitude"];
const LON_ALIASES: &[&str] = &["lon", "lng", "longitude"];
const LANDED_WEIGHT_ALIASES: &[&str] = &["landet vægt (kg)", "landed_weight_kg"];
const LIVE_WEIGHT_ALIASES: &[&str] = &["levende vægt (kg)", "live_weight_kg"];
const VALUE_ALIASES: &[&str] = &["værdi (kr)", "value_kr"];

/// Column positions resolved from the header row.
struct ColumnMap {
    year: usize,
    species: usize,
    port: usize,
    lat: Option<usize>,
    lon: Option<usize>,
    landed_weight: Option<usize>,
    live_weight: Option<usize>,
    value: Option<usize>,
}

impl ColumnMap {
    fn resolve(headers: &StringRecord) -> Result<Self, LoadError> {
        let normalized: Vec<String> = headers.iter().map(normalize_header).collect();
        let find = |aliases: &[&str]| {
            normalized
                .iter()
                .position(|h| aliases.contains(&h.as_str()))
        };
        Ok(Self {
            year: find(YEAR_ALIASES).ok_or(LoadError::MissingColumn("År"))?,
            species: find(SPECIES_ALIASES).ok_or(LoadError::MissingColumn("Art"))?,
            port: find(PORT_ALIASES).ok_or(LoadError::MissingColumn("Landingsplads"))?,
            lat: find(LAT_ALIASES),
            lon: find(LON_ALIASES),
            landed_weight: find(LANDED_WEIGHT_ALIASES),
            live_weight: find(LIVE_WEIGHT_ALIASES),
            value: find(VALUE_ALIASES),
        })
    }
}

fn cell(row: &StringRecord, index: Option<usize>) -> &str {
    index.and_then(|i| row.get(i)).unwrap_or("")
}

impl Dataset {
    /// Load landing records from a CSV string (with headers).
    pub fn from_csv(csv_data: &str) -> Result<Dataset, LoadError> {
        Self::from_reader(csv_data.as_bytes())
    }

    /// Load landing records from a CSV file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Dataset, LoadError> {
        let file = std::fs::File::open(path.as_ref())?;
        log::info!("[Landings] loader: Reading {}", path.as_ref().display());
        Self::from_reader(file)
    }

    /// Load landing records from any CSV source.
    ///
    /// Rows missing year, species or port are dropped. Uncoercible optional
    /// cells become `None`. Both are counted in [`Dataset::quality`].
    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Dataset, LoadError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let columns = ColumnMap::resolve(rdr.headers()?)?;
        let mut quality = DataQualityReport::default();
        let mut records = Vec::new();

        for result in rdr.records() {
            let row = result?;
            quality.rows_read += 1;

            let year = parse_year(cell(&row, Some(columns.year))).value();
            let species = cell(&row, Some(columns.species)).trim();
            let port = cell(&row, Some(columns.port)).trim();

            let mut dropped = false;
            if year.is_none() {
                quality.missing_year += 1;
                dropped = true;
            }
            if species.is_empty() {
                quality.missing_species += 1;
                dropped = true;
            }
            if port.is_empty() {
                quality.missing_port += 1;
                dropped = true;
            }
            let Some(year) = year else {
                continue;
            };
            if dropped {
                continue;
            }

            let lat = parse_float(cell(&row, columns.lat));
            let lon = parse_float(cell(&row, columns.lon));
            quality.invalid_coordinates += usize::from(lat.is_invalid()) + usize::from(lon.is_invalid());
            let landed = parse_amount(cell(&row, columns.landed_weight));
            let live = parse_amount(cell(&row, columns.live_weight));
            quality.invalid_weight += usize::from(landed.is_invalid()) + usize::from(live.is_invalid());
            let value = parse_amount(cell(&row, columns.value));
            if value.is_invalid() {
                quality.invalid_value += 1;
            }

            let record = Record {
                year,
                species: species.to_string(),
                port: port.to_string(),
                lat: lat.value(),
                lon: lon.value(),
                landed_weight_kg: landed.value(),
                live_weight_kg: live.value(),
                value_kr: value.value(),
            };
            if record.landed_weight().is_none() {
                quality.rows_without_landed_weight += 1;
            }
            if record.position().is_none() {
                quality.rows_without_position += 1;
            }
            records.push(record);
        }

        quality.rows_loaded = records.len();
        if records.is_empty() {
            return Err(LoadError::NoRecords {
                rows_read: quality.rows_read,
            });
        }
        if quality.rows_dropped() > 0 {
            log::warn!(
                "[Landings] loader: Dropped {} of {} rows missing year, species or port",
                quality.rows_dropped(),
                quality.rows_read
            );
        }
        log::info!(
            "[Landings] loader: Loaded {} records, {} without landed weight, {} without position",
            quality.rows_loaded,
            quality.rows_without_landed_weight,
            quality.rows_without_position
        );
        Ok(Dataset::with_quality(records, quality))
    }
}
