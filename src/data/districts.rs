//! Loader for the district boundary file.
//!
//! The boundaries arrive as a GeoJSON `FeatureCollection`. Only the
//! id/name attribute pair matters here; the geometry payload is
//! discarded at load time.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use std::path::Path;

use crate::core::error::{Result, VeloriskError};
use crate::data::delimited::read_text;
use crate::data::thefts::pad_location_code;

static LOCATION_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,8}(\.0)?$").expect("valid location code pattern"));

/// True when a string looks like a (possibly unpadded) location code
/// rather than a district name.
pub fn looks_like_location_code(value: &str) -> bool {
    LOCATION_CODE_RE.is_match(value.trim())
}

/// An identifier/name pair for one neighborhood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct District {
    /// LOR location code, zero-padded to 8 characters
    pub id: String,
    /// Human-readable district name
    pub name: String,
}

/// The loaded district table, sorted by name and deduplicated.
#[derive(Debug, Clone, Default)]
pub struct Districts {
    districts: Vec<District>,
}

impl Districts {
    pub fn len(&self) -> usize {
        self.districts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.districts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &District> {
        self.districts.iter()
    }

    /// District names in display order.
    pub fn names(&self) -> Vec<&str> {
        self.districts.iter().map(|d| d.name.as_str()).collect()
    }

    /// Case-insensitive lookup by name.
    pub fn find_by_name(&self, name: &str) -> Option<&District> {
        let wanted = name.trim().to_lowercase();
        self.districts
            .iter()
            .find(|d| d.name.to_lowercase() == wanted)
    }

    /// Lookup by location code; the query is padded before comparison.
    pub fn find_by_id(&self, id: &str) -> Option<&District> {
        let wanted = pad_location_code(id);
        self.districts.iter().find(|d| d.id == wanted)
    }
}

/// Load districts from a GeoJSON boundary file.
///
/// Features missing the id or name property are dropped; ids are
/// zero-padded; the result is sorted by name with duplicate ids and
/// names removed.
pub fn load_districts(path: &Path, id_key: &str, name_key: &str) -> Result<Districts> {
    let text = read_text(path)?;
    let root: Value = serde_json::from_str(&text)?;

    let features = root
        .get("features")
        .and_then(Value::as_array)
        .ok_or_else(|| VeloriskError::Schema {
            file: path.display().to_string(),
            column: "features".to_string(),
        })?;

    let mut districts = Vec::with_capacity(features.len());
    for feature in features {
        let properties = match feature.get("properties") {
            Some(Value::Object(map)) => map,
            _ => continue,
        };
        let id = properties.get(id_key).and_then(property_as_string);
        let name = properties.get(name_key).and_then(property_as_string);
        if let (Some(id), Some(name)) = (id, name) {
            if id.is_empty() || name.is_empty() {
                continue;
            }
            districts.push(District {
                id: pad_location_code(&id),
                name,
            });
        }
    }

    if districts.is_empty() {
        return Err(VeloriskError::EmptyInput(path.display().to_string()));
    }

    districts.sort_by(|a, b| a.name.cmp(&b.name));
    districts.dedup_by(|a, b| a.id == b.id || a.name == b.name);

    Ok(Districts { districts })
}

/// Property values arrive as strings or numbers depending on the export.
fn property_as_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
