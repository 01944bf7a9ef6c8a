use crate::error::{RadarError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Message shown whenever a note's text is blank.
pub const EMPTY_NOTE_MESSAGE: &str = "Note cannot be empty";

/// A geographic position, stored on disk as `[lat, lng]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Checks that both components are finite and within geographic range.
    pub fn validate(&self) -> Result<()> {
        if !self.lat.is_finite() || !self.lng.is_finite() {
            return Err(RadarError::Validation(format!(
                "Invalid coordinate: ({}, {})",
                self.lat, self.lng
            )));
        }
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(RadarError::Validation(format!(
                "Latitude out of range: {}",
                self.lat
            )));
        }
        if !(-180.0..=180.0).contains(&self.lng) {
            return Err(RadarError::Validation(format!(
                "Longitude out of range: {}",
                self.lng
            )));
        }
        Ok(())
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from(pair: [f64; 2]) -> Self {
        Self::new(pair[0], pair[1])
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(c: Coordinate) -> Self {
        [c.lat, c.lng]
    }
}

/// Formats as `lat, lng` with three decimals, the way the dialog and list show it.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}, {:.3}", self.lat, self.lng)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: u32,
    #[serde(rename = "geocode")]
    pub coordinate: Coordinate,
    #[serde(rename = "note")]
    pub text: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Note {
    pub fn new(id: u32, coordinate: Coordinate, text: String) -> Self {
        Self {
            id,
            coordinate,
            text,
            created_at: Utc::now(),
        }
    }
}

/// Returns the trimmed text, or a validation error when nothing is left.
pub fn normalize_text(text: &str) -> Result<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(RadarError::Validation(EMPTY_NOTE_MESSAGE.to_string()));
    }
    Ok(trimmed)
}
