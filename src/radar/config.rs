use crate::dialog::ClickWhileOpen;
use crate::error::{RadarError, Result};
use crate::map::MapSettings;
use crate::model::Coordinate;
use crate::notes::IdPolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Keys accepted by `radar config <key> [value]`.
pub const CONFIG_KEYS: &[&str] = &[
    "center",
    "zoom",
    "min-zoom",
    "max-zoom",
    "click-while-open",
    "id-policy",
];

/// Configuration for radar, stored in `config.json` in the data directory
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RadarConfig {
    #[serde(default)]
    pub map: MapSettings,

    /// What a map click does while the note dialog is open
    #[serde(default)]
    pub click_while_open: ClickWhileOpen,

    /// Whether note ids are renumbered after a removal
    #[serde(default)]
    pub id_policy: IdPolicy,
}

impl RadarConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RadarError::Io)?;
        let config: RadarConfig =
            serde_json::from_str(&content).map_err(RadarError::Serialization)?;
        config.map.validate()?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(RadarError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(RadarError::Serialization)?;
        fs::write(config_path, content).map_err(RadarError::Io)?;
        Ok(())
    }

    /// Current value of a key, formatted the way `set` accepts it.
    pub fn get(&self, key: &str) -> Result<String> {
        let value = match key {
            "center" => format!("{},{}", self.map.center.lat, self.map.center.lng),
            "zoom" => self.map.zoom.to_string(),
            "min-zoom" => self.map.min_zoom.to_string(),
            "max-zoom" => self.map.max_zoom.to_string(),
            "click-while-open" => match self.click_while_open {
                ClickWhileOpen::Retarget => "retarget".to_string(),
                ClickWhileOpen::Ignore => "ignore".to_string(),
            },
            "id-policy" => match self.id_policy {
                IdPolicy::Positional => "positional".to_string(),
                IdPolicy::Stable => "stable".to_string(),
            },
            other => return Err(unknown_key(other)),
        };
        Ok(value)
    }

    /// Parses and sets a key. The config is left unchanged if the result is invalid.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut next = self.clone();
        match key {
            "center" => next.map.center = parse_center(value)?,
            "zoom" => next.map.zoom = parse_zoom(key, value)?,
            "min-zoom" => next.map.min_zoom = parse_zoom(key, value)?,
            "max-zoom" => next.map.max_zoom = parse_zoom(key, value)?,
            "click-while-open" => {
                next.click_while_open = match value {
                    "retarget" => ClickWhileOpen::Retarget,
                    "ignore" => ClickWhileOpen::Ignore,
                    _ => return Err(invalid_value(key, value, "retarget or ignore")),
                }
            }
            "id-policy" => {
                next.id_policy = match value {
                    "positional" => IdPolicy::Positional,
                    "stable" => IdPolicy::Stable,
                    _ => return Err(invalid_value(key, value, "positional or stable")),
                }
            }
            other => return Err(unknown_key(other)),
        }
        next.map.validate()?;
        *self = next;
        Ok(())
    }
}

fn unknown_key(key: &str) -> RadarError {
    RadarError::Config(format!(
        "Unknown config key: {} (expected one of: {})",
        key,
        CONFIG_KEYS.join(", ")
    ))
}

fn invalid_value(key: &str, value: &str, expected: &str) -> RadarError {
    RadarError::Config(format!(
        "Invalid value for {}: {} (expected {})",
        key, value, expected
    ))
}

fn parse_zoom(key: &str, value: &str) -> Result<u8> {
    value
        .trim()
        .parse()
        .map_err(|_| invalid_value(key, value, "a zoom level between 0 and 255"))
}

fn parse_center(value: &str) -> Result<Coordinate> {
    let parts: Vec<_> = value.split(',').map(str::trim).collect();
    let [lat, lng] = parts.as_slice() else {
        return Err(invalid_value("center", value, "<lat>,<lng>"));
    };
    let lat: f64 = lat
        .parse()
        .map_err(|_| invalid_value("center", value, "<lat>,<lng>"))?;
    let lng: f64 = lng
        .parse()
        .map_err(|_| invalid_value("center", value, "<lat>,<lng>"))?;
    Ok(Coordinate::new(lat, lng))
}
