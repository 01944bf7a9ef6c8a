//! # Map View
//!
//! A headless model of the map surface: where it is centered, how far it is
//! zoomed, and how big the viewport is. It turns viewport clicks into
//! coordinates and coordinates into viewport positions for markers.
//!
//! Tiles and boundary shapes are drawn by whatever front end hosts the view;
//! nothing here depends on them.

use crate::error::{RadarError, Result};
use crate::model::Coordinate;
use serde::{Deserialize, Serialize};

pub mod marker;
pub mod projection;

use projection::{project, unproject, Point};

pub const DEFAULT_CENTER: Coordinate = Coordinate {
    lat: 27.89,
    lng: 30.53,
};
pub const DEFAULT_ZOOM: u8 = 5;
pub const DEFAULT_MIN_ZOOM: u8 = 1;
pub const DEFAULT_MAX_ZOOM: u8 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
        }
    }
}

/// Persisted map settings; the starting state of every [`MapView`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapSettings {
    #[serde(default = "default_center")]
    pub center: Coordinate,
    #[serde(default = "default_zoom")]
    pub zoom: u8,
    #[serde(default = "default_min_zoom")]
    pub min_zoom: u8,
    #[serde(default = "default_max_zoom")]
    pub max_zoom: u8,
    #[serde(default)]
    pub viewport: Viewport,
}

fn default_center() -> Coordinate {
    DEFAULT_CENTER
}

fn default_zoom() -> u8 {
    DEFAULT_ZOOM
}

fn default_min_zoom() -> u8 {
    DEFAULT_MIN_ZOOM
}

fn default_max_zoom() -> u8 {
    DEFAULT_MAX_ZOOM
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
            viewport: Viewport::default(),
        }
    }
}

impl MapSettings {
    pub fn validate(&self) -> Result<()> {
        self.center
            .validate()
            .map_err(|e| RadarError::Config(format!("center: {}", e)))?;
        if self.min_zoom > self.max_zoom {
            return Err(RadarError::Config(format!(
                "min-zoom ({}) is greater than max-zoom ({})",
                self.min_zoom, self.max_zoom
            )));
        }
        if !(self.min_zoom..=self.max_zoom).contains(&self.zoom) {
            return Err(RadarError::Config(format!(
                "zoom ({}) must be between {} and {}",
                self.zoom, self.min_zoom, self.max_zoom
            )));
        }
        if self.viewport.width == 0 || self.viewport.height == 0 {
            return Err(RadarError::Config("viewport must not be empty".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    center: Coordinate,
    zoom: u8,
    min_zoom: u8,
    max_zoom: u8,
    viewport: Viewport,
}

impl MapView {
    pub fn new(settings: &MapSettings) -> Self {
        let mut view = Self {
            center: settings.center,
            zoom: settings.zoom,
            min_zoom: settings.min_zoom.min(settings.max_zoom),
            max_zoom: settings.max_zoom,
            viewport: settings.viewport,
        };
        view.zoom = view.clamp_zoom(settings.zoom);
        view
    }

    pub fn center(&self) -> Coordinate {
        self.center
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    pub fn zoom_bounds(&self) -> (u8, u8) {
        (self.min_zoom, self.max_zoom)
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn clamp_zoom(&self, zoom: u8) -> u8 {
        zoom.clamp(self.min_zoom, self.max_zoom)
    }

    /// Sets the zoom level, clamped to the bounds. Returns the level in effect.
    pub fn set_zoom(&mut self, zoom: u8) -> u8 {
        self.zoom = self.clamp_zoom(zoom);
        self.zoom
    }

    pub fn zoom_in(&mut self) -> u8 {
        self.set_zoom(self.zoom.saturating_add(1))
    }

    pub fn zoom_out(&mut self) -> u8 {
        self.set_zoom(self.zoom.saturating_sub(1))
    }

    fn center_px(&self) -> Point {
        project(self.center, self.zoom as f64)
    }

    fn origin_px(&self) -> Point {
        let c = self.center_px();
        Point::new(
            c.x - self.viewport.width as f64 / 2.0,
            c.y - self.viewport.height as f64 / 2.0,
        )
    }

    /// Moves the view by a pixel offset, like dragging the map the other way.
    /// Non-finite offsets are rejected and leave the view unchanged.
    pub fn pan_by(&mut self, dx: f64, dy: f64) -> Result<Coordinate> {
        if !dx.is_finite() || !dy.is_finite() {
            return Err(RadarError::Validation(format!(
                "Invalid pan offset: ({}, {})",
                dx, dy
            )));
        }
        let c = self.center_px();
        self.center = unproject(Point::new(c.x + dx, c.y + dy), self.zoom as f64);
        Ok(self.center)
    }

    /// Coordinate under a viewport pixel.
    pub fn coordinate_at(&self, x: f64, y: f64) -> Result<Coordinate> {
        if !x.is_finite() || !y.is_finite() {
            return Err(RadarError::Validation(format!(
                "Invalid map position: ({}, {})",
                x, y
            )));
        }
        let origin = self.origin_px();
        Ok(unproject(
            Point::new(origin.x + x, origin.y + y),
            self.zoom as f64,
        ))
    }

    /// Viewport pixel of a coordinate; may fall outside the viewport.
    pub fn position_of(&self, c: Coordinate) -> Point {
        let p = project(c, self.zoom as f64);
        let origin = self.origin_px();
        Point::new(p.x - origin.x, p.y - origin.y)
    }

    pub fn contains(&self, p: Point) -> bool {
        (0.0..=self.viewport.width as f64).contains(&p.x)
            && (0.0..=self.viewport.height as f64).contains(&p.y)
    }
}

impl Default for MapView {
    fn default() -> Self {
        Self::new(&MapSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn defaults_match_initial_view() {
        let view = MapView::default();
        assert_eq!(view.center(), Coordinate::new(27.89, 30.53));
        assert_eq!(view.zoom(), 5);
        assert_eq!(view.zoom_bounds(), (1, 8));
    }

    #[test]
    fn viewport_center_is_map_center() {
        let view = MapView::default();
        let c = view.coordinate_at(512.0, 384.0).unwrap();
        assert!(close(c.lat, 27.89));
        assert!(close(c.lng, 30.53));
    }

    #[test]
    fn position_of_inverts_coordinate_at() {
        let view = MapView::default();
        let c = view.coordinate_at(100.0, 650.0).unwrap();
        let p = view.position_of(c);
        assert!(close(p.x, 100.0));
        assert!(close(p.y, 650.0));
    }

    #[test]
    fn clicks_left_and_up_go_west_and_north() {
        let view = MapView::default();
        let c = view.coordinate_at(0.0, 0.0).unwrap();
        assert!(c.lat > 27.89);
        assert!(c.lng < 30.53);
    }

    #[test]
    fn zoom_is_clamped_to_bounds() {
        let mut view = MapView::default();
        assert_eq!(view.set_zoom(20), 8);
        assert_eq!(view.zoom_in(), 8);
        assert_eq!(view.set_zoom(0), 1);
        assert_eq!(view.zoom_out(), 1);
        assert_eq!(view.zoom_in(), 2);
    }

    #[test]
    fn out_of_bounds_starting_zoom_is_clamped() {
        let settings = MapSettings {
            zoom: 12,
            ..MapSettings::default()
        };
        assert_eq!(MapView::new(&settings).zoom(), 8);
    }

    #[test]
    fn pan_moves_center() {
        let mut view = MapView::default();
        let before = view.coordinate_at(612.0, 384.0).unwrap();
        let center = view.pan_by(100.0, 0.0).unwrap();
        assert!(close(center.lng, before.lng));
        assert!(close(center.lat, before.lat));
    }

    #[test]
    fn non_finite_pan_keeps_the_view() {
        let mut view = MapView::default();
        assert!(view.pan_by(f64::NAN, 0.0).is_err());
        assert!(view.pan_by(0.0, f64::INFINITY).is_err());
        assert_eq!(view.center(), Coordinate::new(27.89, 30.53));

        let c = view.coordinate_at(512.0, 384.0).unwrap();
        assert!(c.validate().is_ok());
    }

    #[test]
    fn rejects_non_finite_clicks() {
        let view = MapView::default();
        assert!(view.coordinate_at(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn contains_checks_viewport() {
        let view = MapView::default();
        assert!(view.contains(Point::new(0.0, 0.0)));
        assert!(view.contains(Point::new(1024.0, 768.0)));
        assert!(!view.contains(Point::new(-1.0, 10.0)));
        assert!(!view.contains(Point::new(10.0, 800.0)));
    }

    #[test]
    fn settings_validation() {
        assert!(MapSettings::default().validate().is_ok());
        let inverted = MapSettings {
            min_zoom: 6,
            max_zoom: 3,
            zoom: 4,
            ..MapSettings::default()
        };
        assert!(inverted.validate().is_err());
        let outside = MapSettings {
            zoom: 9,
            ..MapSettings::default()
        };
        assert!(outside.validate().is_err());
    }
}
