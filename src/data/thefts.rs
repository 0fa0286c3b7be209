//! Loader for the raw historical theft-records table.
//!
//! The export from the Berlin open-data portal is Latin-1 encoded
//! delimited text. The loader resolves the columns it needs by header
//! name, zero-pads location codes, parses dates, and skips (but counts)
//! rows it cannot make sense of.

use chrono::NaiveDate;
use std::path::Path;

use crate::core::constants::{identifiers, risk, theft_columns};
use crate::core::error::Result;
use crate::data::delimited::{self, Header};
use crate::ui::ProgressReporter;

/// One historical theft report. Immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct TheftRecord {
    /// LOR location code, zero-padded to 8 characters
    pub location_code: String,
    /// Bicycle type category as reported
    pub bike_type: String,
    /// Hour of day the offense started (0-23)
    pub hour: u8,
    /// Date the report was filed
    pub reported_on: Option<NaiveDate>,
    /// Date the offense started
    pub offense_date: Option<NaiveDate>,
    /// Reported damage in EUR
    pub damage_eur: Option<f64>,
}

/// The loaded theft-records table plus load diagnostics.
#[derive(Debug, Clone, Default)]
pub struct TheftTable {
    pub records: Vec<TheftRecord>,
    /// Rows dropped because the hour or location code was unusable
    pub skipped_rows: usize,
}

impl TheftTable {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Earliest and latest offense date present, when any row has one.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let mut range: Option<(NaiveDate, NaiveDate)> = None;
        for record in &self.records {
            if let Some(date) = record.offense_date {
                range = Some(match range {
                    Some((min, max)) => (min.min(date), max.max(date)),
                    None => (date, date),
                });
            }
        }
        range
    }

    /// Bicycle type categories by descending record count.
    pub fn top_bike_types(&self, limit: usize) -> Vec<(String, usize)> {
        let mut counts: rustc_hash::FxHashMap<&str, usize> = rustc_hash::FxHashMap::default();
        for record in &self.records {
            *counts.entry(record.bike_type.as_str()).or_default() += 1;
        }
        let mut ranked: Vec<(String, usize)> = counts
            .into_iter()
            .map(|(name, count)| (name.to_string(), count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(limit);
        ranked
    }
}

/// Zero-pad a numeric-looking location code to its fixed width.
///
/// Some exports carry the code as a float ("1011101.0"); the fraction
/// is stripped before padding. Non-numeric values pass through so the
/// comparison failure stays visible downstream.
pub fn pad_location_code(raw: &str) -> String {
    let trimmed = raw.trim();
    let cleaned = trimmed.strip_suffix(".0").unwrap_or(trimmed);
    if !cleaned.is_empty()
        && cleaned.len() <= identifiers::LOR_ID_WIDTH
        && cleaned.bytes().all(|b| b.is_ascii_digit())
    {
        format!("{:0>width$}", cleaned, width = identifiers::LOR_ID_WIDTH)
    } else {
        cleaned.to_string()
    }
}

/// Load the theft-records table from a Latin-1 delimited file.
///
/// A missing required column is a schema error. Unusable rows are
/// skipped and counted rather than failing the whole load.
pub fn load_theft_records(path: &Path, progress: Option<&ProgressReporter>) -> Result<TheftTable> {
    let bytes = delimited::read_bytes(path)?;
    let text = delimited::decode_latin1(&bytes);

    let spinner = progress.and_then(|p| p.create_spinner("Scanning theft records"));

    let mut lines = text.lines().filter(|l| !l.trim().is_empty());
    let header = match lines.next() {
        Some(line) => Header::parse(line),
        None => {
            return Err(crate::core::error::VeloriskError::EmptyInput(
                path.display().to_string(),
            ));
        }
    };

    let location_idx = header.require(path, theft_columns::LOCATION)?;
    let bike_type_idx = header.require(path, theft_columns::BIKE_TYPE)?;
    let hour_idx = header.require(path, theft_columns::HOUR)?;
    let reported_idx = header.find(theft_columns::REPORTED);
    let offense_date_idx = header.find(theft_columns::OFFENSE_DATE);
    let damage_idx = header.find(theft_columns::DAMAGE);

    let mut table = TheftTable::default();
    for line in lines {
        let fields = delimited::split_fields(line);
        let location_code = fields
            .get(location_idx)
            .map(|f| pad_location_code(f))
            .unwrap_or_default();
        let hour = fields.get(hour_idx).and_then(|f| parse_hour(f));

        let (location_code, hour) = match (location_code.is_empty(), hour) {
            (false, Some(hour)) => (location_code, hour),
            _ => {
                table.skipped_rows += 1;
                continue;
            }
        };

        table.records.push(TheftRecord {
            location_code,
            bike_type: fields.get(bike_type_idx).cloned().unwrap_or_default(),
            hour,
            reported_on: reported_idx
                .and_then(|i| fields.get(i))
                .and_then(|f| parse_date(f)),
            offense_date: offense_date_idx
                .and_then(|i| fields.get(i))
                .and_then(|f| parse_date(f)),
            damage_eur: damage_idx
                .and_then(|i| fields.get(i))
                .and_then(|f| f.parse::<f64>().ok()),
        });

        if table.records.len() % 10_000 == 0 {
            if let Some(ref pb) = spinner {
                pb.set_message(format!("Scanning theft records ({} rows)", table.records.len()));
            }
        }
    }

    if let Some(pb) = spinner {
        pb.finish_with_message(format!(
            "✓ Loaded {} theft records ({} skipped)",
            table.records.len(),
            table.skipped_rows
        ));
    }

    Ok(table)
}

/// Parse an hour-of-day cell. Tolerates float formatting ("14.0").
fn parse_hour(raw: &str) -> Option<u8> {
    let trimmed = raw.trim();
    let value = trimmed
        .parse::<u8>()
        .ok()
        .or_else(|| trimmed.strip_suffix(".0").and_then(|v| v.parse::<u8>().ok()))?;
    (value <= risk::MAX_HOUR).then_some(value)
}

/// Parse a date cell in either German or ISO format.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, "%d.%m.%Y")
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%Y-%m-%d"))
        .ok()
}
