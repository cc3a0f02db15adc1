use crate::domain::model::Landmark;
use crate::domain::ports::LandmarkSource;
use crate::utils::error::{Result, TourError};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

const REQUIRED_COLUMNS: [&str; 3] = ["Landmark Name", "Latitude", "Longitude"];

#[derive(Debug, Deserialize)]
struct LandmarkRow {
    #[serde(rename = "Landmark Name")]
    name: String,
    #[serde(rename = "Latitude")]
    latitude: f64,
    #[serde(rename = "Longitude")]
    longitude: f64,
}

/// Reads the landmark table, preserving row order. Row order fixes the
/// depot (first row) and the exact solver's canonical permutation order.
pub fn read_landmarks(path: &str) -> Result<Vec<Landmark>> {
    if !Path::new(path).exists() {
        return Err(TourError::ConfigError {
            message: format!("Landmark file '{}' not found", path),
        });
    }

    let mut reader = csv::Reader::from_path(path)?;

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(TourError::ConfigError {
                message: format!(
                    "Missing required column '{}' in '{}' (expected: {})",
                    column,
                    path,
                    REQUIRED_COLUMNS.join(", ")
                ),
            });
        }
    }

    let mut landmarks = Vec::new();
    let mut seen = HashSet::new();
    for row in reader.deserialize::<LandmarkRow>() {
        let row = row?;
        if !seen.insert(row.name.clone()) {
            return Err(TourError::ConfigError {
                message: format!("Duplicate landmark name '{}' in '{}'", row.name, path),
            });
        }
        landmarks.push(Landmark::new(row.name, row.latitude, row.longitude));
    }

    Ok(landmarks)
}

/// CSV-backed landmark source.
#[derive(Debug, Clone)]
pub struct CsvLandmarkSource {
    path: String,
}

impl CsvLandmarkSource {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl LandmarkSource for CsvLandmarkSource {
    fn load(&self) -> Result<Vec<Landmark>> {
        read_landmarks(&self.path)
    }
}
